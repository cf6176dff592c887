//! Terminal-client support: HTTP services over the gateway API plus
//! console prompt/printing helpers.

pub mod console;
pub mod services;

pub use services::{AccountService, AuthenticationService, Session, TransferService};
