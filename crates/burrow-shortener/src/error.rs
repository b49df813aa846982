use burrow_core::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenerError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid page request: {0}")]
    InvalidPage(String),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
