//! TEbucks - peer-to-peer "TE bucks" transfers
//!
//! # Modules
//!
//! - [`account`] - User/Account models and sqlx repositories
//! - [`transfer`] - Transfer domain: validation, atomic settlement, history
//! - [`user_auth`] - Registration, login, JWT verification
//! - [`gateway`] - axum HTTP API layer
//! - [`client`] - HTTP services + console helpers for the terminal client

pub mod account;
pub mod client;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod transfer;
pub mod user_auth;

// Convenient re-exports at crate root
pub use account::{Account, ShareableUser, User};
pub use db::Database;
pub use transfer::{NewTransfer, Transfer, TransferError, TransferStatus, TransferType};
