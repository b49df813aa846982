use crate::error::{Result, ShortenerError};
use crate::mock;
use crate::shortener::Shortener;
use async_trait::async_trait;
use burrow_core::{MappingPage, MappingRecord, Repository, ShortCode};
use burrow_generator::Generator;
use std::sync::Arc;
use tracing::{debug, trace};

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - Short code derivation from the URL itself
/// - URL validation
/// - Paged listing and counting for the admin surface
///
/// Note: codes are derived from content, so shortening the same URL twice
/// overwrites the same record. Two different URLs whose codes coincide also
/// share a record; the later write wins and no collision retry is performed.
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R, G> Clone for ShortenerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` owning its repository.
    pub fn new(repository: R, generator: G) -> Self {
        Self::with_shared_repository(Arc::new(repository), generator)
    }

    /// Creates a new `ShortenerService` over a repository shared with other services.
    pub fn with_shared_repository(repository: Arc<R>, generator: G) -> Self {
        Self {
            repository,
            generator: Arc::new(generator),
        }
    }

    /// Validates that the URL is present.
    fn validate_url(url: &str) -> Result<()> {
        if url.trim().is_empty() {
            return Err(ShortenerError::InvalidUrl(
                "URL cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_limit(limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(ShortenerError::InvalidPage(
                "limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, original_url: &str) -> Result<ShortCode> {
        Self::validate_url(original_url)?;

        let short_code = self.generator.generate(original_url);
        self.repository
            .put(&short_code, MappingRecord::new(original_url))
            .await?;

        debug!(code = %short_code, url = %original_url, "stored mapping");
        Ok(short_code)
    }

    async fn list(&self, offset: usize, limit: usize) -> Result<MappingPage> {
        Self::validate_limit(limit)?;
        trace!(offset, limit, "listing mappings");

        Ok(self.repository.list(offset, limit).await?)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.repository.count().await?)
    }

    async fn seed(&self, amount: usize) -> Vec<Result<ShortCode>> {
        let records = mock::mock_records(amount);
        let mut outcomes = Vec::with_capacity(records.len());

        for record in records {
            let short_code = self.generator.generate(&record.original_url);
            let outcome = self
                .repository
                .put(&short_code, record)
                .await
                .map(|()| short_code)
                .map_err(ShortenerError::from);
            outcomes.push(outcome);
        }

        debug!(
            requested = amount,
            written = outcomes.iter().filter(|o| o.is_ok()).count(),
            "seeded synthetic mappings"
        );
        outcomes
    }
}
