use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a short code to its original URL and records the visit.
    ///
    /// `user_agent` is the raw `User-Agent` header of the visitor; it may be empty.
    /// Returns [`RedirectorError::NotFound`](crate::RedirectorError::NotFound)
    /// if the code is malformed or unknown.
    async fn resolve(&self, code: &str, user_agent: &str) -> Result<String>;
}
