pub mod media;
pub mod persistence;
