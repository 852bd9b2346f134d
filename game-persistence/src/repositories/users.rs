use std::sync::Arc;

use game_types::User;

use crate::indexed::{EntityConfig, IndexedEntityStore, Record};
use crate::store::KeyValueStore;

pub const ENTITY_NAME: &str = "user";
pub const INDEX_NAME: &str = "users";

pub type UserRepository = IndexedEntityStore<User>;

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn config() -> EntityConfig<User> {
    EntityConfig::new(ENTITY_NAME, INDEX_NAME, User::default())
}

pub fn repository(kv: Arc<dyn KeyValueStore>) -> UserRepository {
    IndexedEntityStore::new(kv, config())
}
