use crate::error::Result;
use async_trait::async_trait;
use burrow_core::{MappingPage, ShortCode};

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Creates (or overwrites) the mapping for `original_url` and returns its short code.
    async fn shorten(&self, original_url: &str) -> Result<ShortCode>;

    /// Returns up to `limit` mappings after skipping `offset`, plus the total count.
    async fn list(&self, offset: usize, limit: usize) -> Result<MappingPage>;

    /// Counts all stored mappings.
    async fn count(&self) -> Result<usize>;

    /// Writes `amount` synthetic mappings, reporting the outcome of each one.
    async fn seed(&self, amount: usize) -> Vec<Result<ShortCode>>;
}
