pub mod analytics;
pub mod newsletter;
pub mod plays;
pub mod validation;

// Re-export main components
pub use analytics::*;
pub use newsletter::*;
pub use plays::*;
pub use validation::*;
