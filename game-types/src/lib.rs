pub mod analytics;
pub mod api;
pub mod game;
pub mod play;
pub mod user;

// Re-export all types
pub use analytics::*;
pub use api::*;
pub use game::*;
pub use play::*;
pub use user::*;
