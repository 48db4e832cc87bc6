use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid contact document: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    CoreError(#[from] qrcard_core::error::CoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
