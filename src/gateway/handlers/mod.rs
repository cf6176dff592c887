//! HTTP handlers for the TEbucks resource endpoints.

pub mod account;
pub mod health;
pub mod transfer;

pub use account::{
    get_account, get_account_by_user, get_account_owner, get_balance, get_transfer_candidates,
};
pub use health::health_check;
pub use transfer::{create_transfer, get_transfer, list_transfers, update_transfer_status};
