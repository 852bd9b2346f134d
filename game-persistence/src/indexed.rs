//! Generic CRUD over a key-value store with a maintained id index.
//!
//! Each entity kind owns three kinds of keys:
//!
//! ```text
//! entity:{entity_name}:{id}   -> the record as JSON
//! index:{index_name}          -> JSON array of ids, in insertion order
//! seeded:{index_name}         -> true once the seed set has been written
//! ```
//!
//! Every mutation is issued as one [`WriteOp`] batch. On a backend whose
//! batches are transactional record and index change together. Otherwise the
//! ops are ordered so that an interrupted write can leave a record missing
//! from the index, but never an index entry whose record is missing: creates
//! write the record before the index, deletes rewrite the index before
//! removing the record.
//!
//! Mutations through one store are serialized, so the read-modify-write of
//! the index never interleaves with another writer of the same kind. Two
//! store instances over the same backend do not share that lock.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::StoreResult;
use crate::store::{KeyValueStore, WriteOp};

/// A storable object identified by a unique string id.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Static description of one entity kind.
#[derive(Debug, Clone)]
pub struct EntityConfig<T> {
    /// Namespace for per-record keys.
    pub entity_name: &'static str,
    /// Key name of the id index.
    pub index_name: &'static str,
    /// Returned by [`IndexedEntityStore::get_state`] for ids with no record.
    pub initial_state: T,
    /// Written by [`IndexedEntityStore::ensure_seed`] on first use.
    pub seed_data: Vec<T>,
}

impl<T> EntityConfig<T> {
    pub fn new(entity_name: &'static str, index_name: &'static str, initial_state: T) -> Self {
        Self {
            entity_name,
            index_name,
            initial_state,
            seed_data: Vec::new(),
        }
    }

    pub fn with_seed_data(mut self, seed_data: Vec<T>) -> Self {
        self.seed_data = seed_data;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityList<T> {
    pub items: Vec<T>,
}

pub struct IndexedEntityStore<T: Record> {
    kv: Arc<dyn KeyValueStore>,
    config: EntityConfig<T>,
    // held from the index read until the batch that rewrites it completes
    write_lock: Mutex<()>,
}

impl<T: Record> IndexedEntityStore<T> {
    pub fn new(kv: Arc<dyn KeyValueStore>, config: EntityConfig<T>) -> Self {
        Self {
            kv,
            config,
            write_lock: Mutex::new(()),
        }
    }

    fn record_key(&self, id: &str) -> String {
        format!("entity:{}:{}", self.config.entity_name, id)
    }

    fn index_key(&self) -> String {
        format!("index:{}", self.config.index_name)
    }

    fn seed_marker_key(&self) -> String {
        format!("seeded:{}", self.config.index_name)
    }

    async fn read_index(&self) -> StoreResult<Vec<String>> {
        match self.kv.get(&self.index_key()).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    fn index_write(&self, ids: &[String]) -> StoreResult<WriteOp> {
        Ok(WriteOp::put(self.index_key(), serde_json::to_value(ids)?))
    }

    pub async fn exists(&self, id: &str) -> StoreResult<bool> {
        self.kv.contains_key(&self.record_key(id)).await
    }

    /// The stored record, or the configured initial state when there is none.
    ///
    /// Absence is not an error here. Callers that need "not found" must ask
    /// [`exists`](Self::exists) first.
    pub async fn get_state(&self, id: &str) -> StoreResult<T> {
        match self.kv.get(&self.record_key(id)).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(self.config.initial_state.clone()),
        }
    }

    /// Store `record`, replacing any record with the same id, and add its id
    /// to the index unless it is already there.
    pub async fn create(&self, record: T) -> StoreResult<T> {
        self.upsert(&record).await?;
        Ok(record)
    }

    /// Overwrite the full state of `record`. Index handling is the same as
    /// [`create`](Self::create), so saving an unknown id also indexes it.
    pub async fn save(&self, record: &T) -> StoreResult<()> {
        self.upsert(record).await
    }

    async fn upsert(&self, record: &T) -> StoreResult<()> {
        let id = record.id();
        let mut ops = vec![WriteOp::put(
            self.record_key(id),
            serde_json::to_value(record)?,
        )];

        let _guard = self.write_lock.lock().await;
        let mut index = self.read_index().await?;
        if !index.iter().any(|existing| existing == id) {
            index.push(id.to_string());
            ops.push(self.index_write(&index)?);
        }

        tracing::debug!("Writing {} '{}'", self.config.entity_name, id);
        self.kv.write_batch(ops).await
    }

    /// Remove the record and its index entry. Returns `false` when there was
    /// no record; a stale index entry for such an id is still dropped.
    pub async fn delete(&self, id: &str) -> StoreResult<bool> {
        let record_key = self.record_key(id);
        let _guard = self.write_lock.lock().await;
        let existed = self.kv.contains_key(&record_key).await?;

        let mut index = self.read_index().await?;
        let indexed = index.len();
        index.retain(|existing| existing != id);

        let mut ops = Vec::with_capacity(2);
        if index.len() != indexed {
            ops.push(self.index_write(&index)?);
        }
        if existed {
            ops.push(WriteOp::delete(record_key));
        }

        if !ops.is_empty() {
            tracing::debug!("Deleting {} '{}'", self.config.entity_name, id);
            self.kv.write_batch(ops).await?;
        }
        Ok(existed)
    }

    /// Ids in index order.
    pub async fn list_ids(&self) -> StoreResult<Vec<String>> {
        self.read_index().await
    }

    pub async fn count(&self) -> StoreResult<usize> {
        Ok(self.read_index().await?.len())
    }

    /// All records in index order.
    ///
    /// An index entry without a record is skipped with a warning; listing
    /// never writes to repair it.
    pub async fn list(&self) -> StoreResult<EntityList<T>> {
        let ids = self.read_index().await?;
        let mut items = Vec::with_capacity(ids.len());

        for id in &ids {
            match self.kv.get(&self.record_key(id)).await? {
                Some(value) => items.push(serde_json::from_value(value)?),
                None => tracing::warn!(
                    "Index '{}' references missing {} '{}', skipping",
                    self.config.index_name,
                    self.config.entity_name,
                    id
                ),
            }
        }

        Ok(EntityList { items })
    }

    /// Seed with the configured seed data. See [`ensure_seed_with`](Self::ensure_seed_with).
    pub async fn ensure_seed(&self) -> StoreResult<bool> {
        self.ensure_seed_with(&self.config.seed_data).await
    }

    /// Write `seed` and build the index from it, in order, the first time
    /// this kind is seeded. Returns whether anything was written.
    ///
    /// The seed marker is written last, after the records and the index, so
    /// calling again after a failure part-way through rewrites the whole set.
    /// A kind whose index already has entries is adopted as seeded without
    /// touching its records. Duplicate ids in `seed` keep their first record.
    pub async fn ensure_seed_with(&self, seed: &[T]) -> StoreResult<bool> {
        if seed.is_empty() {
            return Ok(false);
        }

        let marker_key = self.seed_marker_key();
        if self.kv.contains_key(&marker_key).await? {
            return Ok(false);
        }

        let _guard = self.write_lock.lock().await;
        if self.kv.contains_key(&marker_key).await? {
            return Ok(false);
        }

        if !self.read_index().await?.is_empty() {
            tracing::debug!(
                "Index '{}' already populated, marking as seeded",
                self.config.index_name
            );
            self.kv.put(&marker_key, Value::Bool(true)).await?;
            return Ok(false);
        }

        let mut ids: Vec<String> = Vec::with_capacity(seed.len());
        let mut ops = Vec::with_capacity(seed.len() + 2);
        for record in seed {
            let id = record.id();
            if ids.iter().any(|existing| existing == id) {
                continue;
            }
            ops.push(WriteOp::put(
                self.record_key(id),
                serde_json::to_value(record)?,
            ));
            ids.push(id.to_string());
        }
        ops.push(self.index_write(&ids)?);
        ops.push(WriteOp::put(marker_key, Value::Bool(true)));

        self.kv.write_batch(ops).await?;
        tracing::info!(
            "Seeded {} {} records into '{}'",
            ids.len(),
            self.config.entity_name,
            self.config.index_name
        );
        Ok(true)
    }
}
