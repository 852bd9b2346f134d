use sea_orm::DbErr;
use thiserror::Error;

/// Failures of the underlying key-value store.
///
/// These are never retried or swallowed by this crate; callers decide what a
/// storage outage means for them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("key-value store unavailable: {0}")]
    Unavailable(String),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("stored value could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
