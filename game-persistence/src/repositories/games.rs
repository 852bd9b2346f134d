use std::sync::Arc;

use game_types::{Game, QuizGame};

use crate::indexed::{EntityConfig, IndexedEntityStore, Record};
use crate::seed::seed_games;
use crate::store::KeyValueStore;

pub const ENTITY_NAME: &str = "game";
pub const INDEX_NAME: &str = "games";

pub type GameRepository = IndexedEntityStore<Game>;

impl Record for Game {
    fn id(&self) -> &str {
        Game::id(self)
    }
}

/// An untitled quiz with no questions.
pub fn initial_state() -> Game {
    Game::Quiz(QuizGame::default())
}

pub fn config() -> EntityConfig<Game> {
    EntityConfig::new(ENTITY_NAME, INDEX_NAME, initial_state()).with_seed_data(seed_games())
}

pub fn repository(kv: Arc<dyn KeyValueStore>) -> GameRepository {
    IndexedEntityStore::new(kv, config())
}
