pub mod breakdown;
pub mod heart;
pub mod card;
pub mod events;

// Re-exports for convenience
pub use breakdown::*;
pub use heart::*;
pub use card::*;
pub use events::*;
