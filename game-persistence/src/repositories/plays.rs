use std::sync::Arc;

use game_types::Play;

use crate::indexed::{EntityConfig, IndexedEntityStore, Record};
use crate::store::KeyValueStore;

pub const ENTITY_NAME: &str = "play";
pub const INDEX_NAME: &str = "plays";

pub type PlayRepository = IndexedEntityStore<Play>;

impl Record for Play {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn config() -> EntityConfig<Play> {
    EntityConfig::new(ENTITY_NAME, INDEX_NAME, Play::default())
}

pub fn repository(kv: Arc<dyn KeyValueStore>) -> PlayRepository {
    IndexedEntityStore::new(kv, config())
}
