pub mod commands;
pub mod playback;
pub mod spawner;
pub mod time_engine;

// Re-exports
pub use commands::*;
pub use playback::*;
pub use spawner::*;
pub use time_engine::*;
