//! Transfer domain: wire models, server-side validation and atomic
//! settlement of balances between two accounts.

pub mod error;
pub mod models;
pub mod service;

pub use error::TransferError;
pub use models::{NewTransfer, Transfer, TransferDetail, TransferStatus, TransferType};
pub use service::TransferService;
