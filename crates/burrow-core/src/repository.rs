use crate::error::Result;
use crate::record::{ClientMetadata, MappingRecord};
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use serde::Serialize;

/// One key/value pair returned by a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    pub code: ShortCode,
    pub record: MappingRecord,
}

/// A window over all mappings, in the backend's native key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingPage {
    pub entries: Vec<MappingEntry>,
    /// Number of mappings in the whole store, not only in this page.
    pub total_count: usize,
}

/// A read-only view of a mapping repository.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the record for a given short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<MappingRecord>>;

    /// Counts every stored mapping.
    async fn count(&self) -> Result<usize>;

    /// Skips `offset` mappings in key order and returns up to `limit` of the
    /// following ones, together with the total number of mappings.
    async fn list(&self, offset: usize, limit: usize) -> Result<MappingPage>;
}

#[async_trait]
pub trait Repository: ReadRepository {
    /// Stores a record, replacing whatever was stored under the same code.
    async fn put(&self, code: &ShortCode, record: MappingRecord) -> Result<()>;

    /// Records one visit as a single atomic read-modify-write.
    ///
    /// Increments the visit count, overwrites the client metadata and returns
    /// the original URL. Returns `None` if the code does not exist. Concurrent
    /// calls on the same code never lose an increment.
    async fn record_visit(&self, code: &ShortCode, client: &ClientMetadata)
        -> Result<Option<String>>;
}
