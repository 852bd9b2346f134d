pub mod connection;
pub mod entities;
pub mod error;
pub mod indexed;
pub mod repositories;
pub mod seed;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use indexed::{EntityConfig, EntityList, IndexedEntityStore, Record};
pub use repositories::Repositories;
pub use store::{KeyValueStore, MemoryStore, SqlStore, WriteOp};
