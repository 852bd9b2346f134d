use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::KeyValueStore;
use crate::error::{StoreError, StoreResult};

#[derive(Default)]
struct Inner {
    entries: BTreeMap<String, Value>,
    // Remaining writes before the store starts failing. `None` means unlimited.
    write_budget: Option<usize>,
}

/// In-process store with single-key atomicity.
///
/// Batches go through the default one-key-at-a-time path, so a failure in
/// the middle of a batch leaves the earlier writes applied.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate an outage after `budget` more successful writes. Reads keep
    /// working. `None` lifts the limit.
    pub async fn set_write_budget(&self, budget: Option<usize>) {
        self.inner.write().await.write_budget = budget;
    }

    fn spend_write(inner: &mut Inner, key: &str) -> StoreResult<()> {
        match inner.write_budget {
            Some(0) => {
                tracing::warn!("Rejecting write to '{}': store unavailable", key);
                Err(StoreError::Unavailable(format!(
                    "write to '{}' rejected",
                    key
                )))
            }
            Some(ref mut remaining) => {
                *remaining -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.inner.read().await.entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Value) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        Self::spend_write(&mut inner, key)?;
        inner.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        Self::spend_write(&mut inner, key)?;
        Ok(inner.entries.remove(key).is_some())
    }

    async fn list_keys(&self, prefix: &str) -> StoreResult<Vec<String>> {
        let inner = self.inner.read().await;
        Ok(inner
            .entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect())
    }
}
