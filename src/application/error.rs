use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{BillId, Cents, RemoveBillError};

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    #[error("Wallet already exists: {0}")]
    WalletAlreadyExists(String),

    #[error("Insufficient funds in wallet {wallet}: balance {balance}, required {required}")]
    InsufficientFunds {
        wallet: String,
        balance: Cents,
        required: Cents,
    },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("No transactions recorded on {0}")]
    TransactionBucketNotFound(NaiveDate),

    #[error("Bill not found: {0}")]
    BillNotFound(BillId),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl From<RemoveBillError> for LedgerError {
    fn from(err: RemoveBillError) -> Self {
        match err {
            RemoveBillError::BucketNotFound(day) => LedgerError::TransactionBucketNotFound(day),
            RemoveBillError::BillNotFound(id) => LedgerError::BillNotFound(id),
        }
    }
}
