use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Local time does not exist: {value}")]
    InvalidInstant { value: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
