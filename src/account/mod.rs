//! Users and accounts: models plus sqlx repositories.

pub mod models;
pub mod repository;

pub use models::{Account, ShareableUser, User};
pub use repository::{AccountRepository, UserRepository};
