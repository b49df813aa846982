use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

/// The presented token is missing, unknown, revoked or expired.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("session is missing or expired")]
pub struct Unauthorized;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("random source failure: {0}")]
    RandomSource(String),
}
