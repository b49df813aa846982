use ::redb::{Database, ReadableTable, TableDefinition};
use async_trait::async_trait;
use burrow_core::error::{Result, StorageError};
use burrow_core::{
    ClientMetadata, MappingEntry, MappingPage, MappingRecord, ReadRepository, Repository,
    ShortCode,
};
use std::path::Path;
use std::sync::Arc;

/// Short code -> JSON encoded [`MappingRecord`] (or a legacy bare URL).
const MAPPINGS: TableDefinition<&str, &[u8]> = TableDefinition::new("mappings");

/// Durable repository backed by an embedded redb database.
///
/// Every operation runs in its own transaction on the blocking thread pool.
/// redb admits one write transaction at a time, which serializes
/// [`Repository::record_visit`] per key. Listing runs its counting pass and
/// its paging pass inside a single read transaction, so both observe the
/// same snapshot.
#[derive(Clone)]
pub struct RedbRepository {
    db: Arc<Database>,
}

impl RedbRepository {
    /// Opens (or creates) a database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Database::create(path).map_err(map_redb_error)?;
        Self::from_database(db)
    }

    /// Creates a database that lives only in memory.
    pub fn in_memory() -> Result<Self> {
        let db = ::redb::Builder::new()
            .create_with_backend(::redb::backends::InMemoryBackend::new())
            .map_err(map_redb_error)?;
        Self::from_database(db)
    }

    fn from_database(db: Database) -> Result<Self> {
        // Read transactions cannot open a table that was never created.
        let txn = db.begin_write().map_err(map_redb_error)?;
        txn.open_table(MAPPINGS).map_err(map_redb_error)?;
        txn.commit().map_err(map_redb_error)?;

        Ok(Self { db: Arc::new(db) })
    }

    async fn blocking<T, F>(&self, task: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || task(&db))
            .await
            .map_err(|e| StorageError::Operation(format!("blocking storage task failed: {e}")))?
    }
}

fn map_redb_error(err: impl Into<::redb::Error>) -> StorageError {
    let err: ::redb::Error = err.into();
    let message = err.to_string();

    match err {
        ::redb::Error::DatabaseAlreadyOpen | ::redb::Error::Io(_) => {
            StorageError::Unavailable(message)
        }
        ::redb::Error::Corrupted(_) => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl ReadRepository for RedbRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<MappingRecord>> {
        let key = code.as_str().to_owned();

        self.blocking(move |db| {
            let txn = db.begin_read().map_err(map_redb_error)?;
            let table = txn.open_table(MAPPINGS).map_err(map_redb_error)?;
            let value = table
                .get(key.as_str())
                .map_err(map_redb_error)?
                .map(|guard| guard.value().to_vec());

            value.map(|bytes| MappingRecord::decode(&bytes)).transpose()
        })
        .await
    }

    async fn count(&self) -> Result<usize> {
        self.blocking(|db| {
            let txn = db.begin_read().map_err(map_redb_error)?;
            let table = txn.open_table(MAPPINGS).map_err(map_redb_error)?;

            let mut count = 0;
            for item in table.iter().map_err(map_redb_error)? {
                item.map_err(map_redb_error)?;
                count += 1;
            }
            Ok(count)
        })
        .await
    }

    async fn list(&self, offset: usize, limit: usize) -> Result<MappingPage> {
        self.blocking(move |db| {
            let txn = db.begin_read().map_err(map_redb_error)?;
            let table = txn.open_table(MAPPINGS).map_err(map_redb_error)?;

            let mut total_count = 0;
            for item in table.iter().map_err(map_redb_error)? {
                item.map_err(map_redb_error)?;
                total_count += 1;
            }

            let mut entries = Vec::with_capacity(limit.min(total_count));
            for item in table
                .iter()
                .map_err(map_redb_error)?
                .skip(offset)
                .take(limit)
            {
                let (key, value) = item.map_err(map_redb_error)?;
                entries.push(MappingEntry {
                    code: ShortCode::new_unchecked(key.value()),
                    record: MappingRecord::decode(value.value())?,
                });
            }

            Ok(MappingPage {
                entries,
                total_count,
            })
        })
        .await
    }
}

#[async_trait]
impl Repository for RedbRepository {
    async fn put(&self, code: &ShortCode, record: MappingRecord) -> Result<()> {
        let key = code.as_str().to_owned();
        let value = record.encode()?;

        self.blocking(move |db| {
            let txn = db.begin_write().map_err(map_redb_error)?;
            {
                let mut table = txn.open_table(MAPPINGS).map_err(map_redb_error)?;
                table
                    .insert(key.as_str(), value.as_slice())
                    .map_err(map_redb_error)?;
            }
            txn.commit().map_err(map_redb_error)
        })
        .await
    }

    async fn record_visit(
        &self,
        code: &ShortCode,
        client: &ClientMetadata,
    ) -> Result<Option<String>> {
        let key = code.as_str().to_owned();
        let client = client.clone();

        self.blocking(move |db| {
            let txn = db.begin_write().map_err(map_redb_error)?;
            let visited = {
                let mut table = txn.open_table(MAPPINGS).map_err(map_redb_error)?;
                let existing = table
                    .get(key.as_str())
                    .map_err(map_redb_error)?
                    .map(|guard| guard.value().to_vec());

                match existing {
                    None => None,
                    Some(bytes) => {
                        let mut record = MappingRecord::decode(&bytes)?;
                        let original_url = record.original_url.clone();
                        record.record_visit(&client);
                        table
                            .insert(key.as_str(), record.encode()?.as_slice())
                            .map_err(map_redb_error)?;
                        Some(original_url)
                    }
                }
            };

            match visited {
                Some(_) => txn.commit().map_err(map_redb_error)?,
                None => txn.abort().map_err(map_redb_error)?,
            }
            Ok(visited)
        })
        .await
    }
}
