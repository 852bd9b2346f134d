//! Key-value storage backends.
//!
//! Values are JSON documents addressed by string keys. Backends guarantee
//! atomicity for a single key; [`KeyValueStore::write_batch`] is atomic across
//! keys only where the backend overrides it with a transaction.

mod memory;
mod sql;

pub use memory::MemoryStore;
pub use sql::SqlStore;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StoreResult;

/// A single write inside a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    Put { key: String, value: Value },
    Delete { key: String },
}

impl WriteOp {
    pub fn put(key: impl Into<String>, value: Value) -> Self {
        WriteOp::Put {
            key: key.into(),
            value,
        }
    }

    pub fn delete(key: impl Into<String>) -> Self {
        WriteOp::Delete { key: key.into() }
    }

    pub fn key(&self) -> &str {
        match self {
            WriteOp::Put { key, .. } | WriteOp::Delete { key } => key,
        }
    }
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    async fn put(&self, key: &str, value: Value) -> StoreResult<()>;

    /// Returns whether a value was removed.
    async fn delete(&self, key: &str) -> StoreResult<bool>;

    /// All keys starting with `prefix`, sorted.
    async fn list_keys(&self, prefix: &str) -> StoreResult<Vec<String>>;

    async fn contains_key(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Apply `ops` in order. The default applies them one key at a time and
    /// stops at the first failure, leaving earlier writes in place.
    async fn write_batch(&self, ops: Vec<WriteOp>) -> StoreResult<()> {
        for op in ops {
            match op {
                WriteOp::Put { key, value } => self.put(&key, value).await?,
                WriteOp::Delete { key } => {
                    self.delete(&key).await?;
                }
            }
        }
        Ok(())
    }
}
