pub mod games;
pub mod plays;
pub mod users;

pub use games::GameRepository;
pub use plays::PlayRepository;
pub use users::UserRepository;

use std::sync::Arc;

use crate::store::KeyValueStore;

/// The three entity kinds of the application over one shared store.
pub struct Repositories {
    pub games: GameRepository,
    pub users: UserRepository,
    pub plays: PlayRepository,
}

impl Repositories {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            games: games::repository(kv.clone()),
            users: users::repository(kv.clone()),
            plays: plays::repository(kv),
        }
    }
}
