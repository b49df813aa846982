use async_trait::async_trait;
use burrow_core::error::Result;
use burrow_core::{
    ClientMetadata, MappingEntry, MappingPage, MappingRecord, ReadRepository, Repository,
    ShortCode,
};
use dashmap::DashMap;

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. A visit is recorded while holding the shard
/// write guard, so updates to the same code are serialized.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    storage: DashMap<String, MappingRecord>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Clones every entry and sorts them by key bytes, matching the
    /// ordering of the persistent backend.
    fn sorted_snapshot(&self) -> Vec<MappingEntry> {
        let mut entries: Vec<MappingEntry> = self
            .storage
            .iter()
            .map(|item| MappingEntry {
                code: ShortCode::new_unchecked(item.key().as_str()),
                record: item.value().clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.code.as_str().as_bytes().cmp(b.code.as_str().as_bytes()));
        entries
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<MappingRecord>> {
        Ok(self.storage.get(code.as_str()).map(|entry| entry.clone()))
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.storage.len())
    }

    async fn list(&self, offset: usize, limit: usize) -> Result<MappingPage> {
        let snapshot = self.sorted_snapshot();
        let total_count = snapshot.len();
        let entries = snapshot.into_iter().skip(offset).take(limit).collect();

        Ok(MappingPage {
            entries,
            total_count,
        })
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn put(&self, code: &ShortCode, record: MappingRecord) -> Result<()> {
        self.storage.insert(code.as_str().to_owned(), record);
        Ok(())
    }

    async fn record_visit(
        &self,
        code: &ShortCode,
        client: &ClientMetadata,
    ) -> Result<Option<String>> {
        let Some(mut entry) = self.storage.get_mut(code.as_str()) else {
            return Ok(None);
        };

        let original_url = entry.original_url.clone();
        entry.record_visit(client);
        Ok(Some(original_url))
    }
}
