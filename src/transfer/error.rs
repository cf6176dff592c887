use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Source and destination accounts are the same")]
    SameAccount,

    #[error("Invalid amount: must be positive")]
    InvalidAmount,

    #[error("Invalid transfer type id: {0}")]
    InvalidType(i16),

    #[error("Invalid transfer status id: {0}")]
    InvalidStatus(i16),

    #[error("Account not found: {0}")]
    AccountNotFound(i64),

    #[error("Transfer not found: {0}")]
    TransferNotFound(i64),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}
