//! Keepsake Core - pure domain logic with no terminal or filesystem code
//!
//! This crate contains the time arithmetic, heart particle generation, playback
//! overlay state and the ports (interfaces) for Keepsake. Rendering, config files
//! and media players are handled by adapters in the application crate.

pub mod domain;
pub mod ports;
pub mod app;
pub mod error;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
