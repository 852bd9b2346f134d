use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use serde_json::Value;

use super::{KeyValueStore, WriteOp};
use crate::entities::{kv_entries, prelude::*};
use crate::error::StoreResult;

/// Key-value store over the `kv_entries` table.
///
/// Batches run inside a single database transaction, so they either apply
/// completely or not at all.
pub struct SqlStore {
    db: DatabaseConnection,
}

impl SqlStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn upsert<C: ConnectionTrait>(conn: &C, key: &str, value: Value) -> Result<(), DbErr> {
    let entry = kv_entries::ActiveModel {
        key: ActiveValue::Set(key.to_string()),
        value: ActiveValue::Set(value),
        updated_at: ActiveValue::Set(chrono::Utc::now().into()),
    };

    KvEntries::insert(entry)
        .on_conflict(
            OnConflict::column(kv_entries::Column::Key)
                .update_columns([kv_entries::Column::Value, kv_entries::Column::UpdatedAt])
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

async fn remove<C: ConnectionTrait>(conn: &C, key: &str) -> Result<bool, DbErr> {
    let result = KvEntries::delete_by_id(key.to_string()).exec(conn).await?;
    Ok(result.rows_affected > 0)
}

async fn apply_batch<C: ConnectionTrait>(conn: &C, ops: Vec<WriteOp>) -> Result<(), DbErr> {
    for op in ops {
        tracing::debug!("Batch write to '{}'", op.key());
        match op {
            WriteOp::Put { key, value } => upsert(conn, &key, value).await?,
            WriteOp::Delete { key } => {
                remove(conn, &key).await?;
            }
        }
    }
    Ok(())
}

#[async_trait]
impl KeyValueStore for SqlStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        let entry = KvEntries::find_by_id(key.to_string()).one(&self.db).await?;
        Ok(entry.map(|entry| entry.value))
    }

    async fn put(&self, key: &str, value: Value) -> StoreResult<()> {
        upsert(&self.db, key, value).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<bool> {
        Ok(remove(&self.db, key).await?)
    }

    async fn list_keys(&self, prefix: &str) -> StoreResult<Vec<String>> {
        let keys: Vec<String> = KvEntries::find()
            .select_only()
            .column(kv_entries::Column::Key)
            .filter(kv_entries::Column::Key.starts_with(prefix))
            .order_by_asc(kv_entries::Column::Key)
            .into_tuple()
            .all(&self.db)
            .await?;

        // LIKE treats `_` and `%` as wildcards
        Ok(keys
            .into_iter()
            .filter(|key| key.starts_with(prefix))
            .collect())
    }

    async fn write_batch(&self, ops: Vec<WriteOp>) -> StoreResult<()> {
        let txn = self.db.begin().await?;

        match apply_batch(&txn, ops).await {
            Ok(()) => {
                txn.commit().await?;
                Ok(())
            }
            Err(err) => {
                tracing::warn!("Rolling back batch: {}", err);
                txn.rollback().await?;
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_to_memory_database;
    use crate::error::StoreError;
    use migration::{Migrator, MigratorTrait};
    use serde_json::json;

    async fn setup_test_store() -> SqlStore {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SqlStore::new(db)
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_value() {
        let store = setup_test_store().await;

        store.put("entity:user:a@b.co", json!({"id": "a@b.co"})).await.unwrap();
        store
            .put("entity:user:a@b.co", json!({"id": "a@b.co", "name": "Ada"}))
            .await
            .unwrap();

        let value = store.get("entity:user:a@b.co").await.unwrap().unwrap();
        assert_eq!(value["name"], "Ada");
        assert_eq!(store.list_keys("entity:user:").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let store = setup_test_store().await;

        store.put("k", json!(1)).await.unwrap();
        assert!(store.delete("k").await.unwrap());
        assert!(!store.delete("k").await.unwrap());
        assert!(!store.contains_key("k").await.unwrap());
    }

    #[tokio::test]
    async fn test_list_keys_ignores_like_wildcards() {
        let store = setup_test_store().await;

        store.put("entity:play:1", json!(1)).await.unwrap();
        store.put("entityXplay:2", json!(2)).await.unwrap();
        store.put("entity_play_3", json!(3)).await.unwrap();

        let keys = store.list_keys("entity_play").await.unwrap();
        assert_eq!(keys, vec!["entity_play_3"]);
    }

    #[tokio::test]
    async fn test_write_batch_applies_all_ops() {
        let store = setup_test_store().await;
        store.put("stale", json!(0)).await.unwrap();

        store
            .write_batch(vec![
                WriteOp::put("entity:game:g1", json!({"id": "g1"})),
                WriteOp::put("index:games", json!(["g1"])),
                WriteOp::delete("stale"),
            ])
            .await
            .unwrap();

        assert_eq!(store.get("index:games").await.unwrap(), Some(json!(["g1"])));
        assert!(store.contains_key("entity:game:g1").await.unwrap());
        assert!(!store.contains_key("stale").await.unwrap());
    }

    #[tokio::test]
    async fn test_failed_batch_rolls_back_earlier_ops() {
        let store = setup_test_store().await;
        store.put("index:games", json!(["g0"])).await.unwrap();
        store
            .db
            .execute_unprepared(
                "CREATE TRIGGER reject_locked_key BEFORE INSERT ON kv_entries \
                 WHEN NEW.key = 'locked' \
                 BEGIN SELECT RAISE(ABORT, 'locked key'); END;",
            )
            .await
            .unwrap();

        let result = store
            .write_batch(vec![
                WriteOp::put("entity:game:g1", json!({"id": "g1"})),
                WriteOp::put("index:games", json!(["g0", "g1"])),
                WriteOp::put("locked", json!(true)),
            ])
            .await;

        assert!(matches!(result, Err(StoreError::Database(_))));
        assert!(!store.contains_key("entity:game:g1").await.unwrap());
        assert_eq!(store.get("index:games").await.unwrap(), Some(json!(["g0"])));
        assert!(!store.contains_key("locked").await.unwrap());
    }
}
