pub mod media;
pub mod persistence;
pub mod time;

// Re-exports
pub use media::*;
pub use persistence::*;
pub use time::*;
