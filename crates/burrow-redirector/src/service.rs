use std::sync::Arc;

use crate::error::{RedirectorError, Result};
use crate::redirector::Redirector;
use crate::user_agent::parse_user_agent;
use async_trait::async_trait;
use burrow_core::{ClientMetadata, Repository, ShortCode};
use tracing::{debug, trace};

/// Service for handling URL redirects.
///
/// Every successful resolution is also a write: the repository increments
/// the visit count and stores the visitor's OS and browser in the same
/// transaction that reads the original URL.
#[derive(Debug)]
pub struct RedirectorService<R> {
    repository: Arc<R>,
}

impl<R> Clone for RedirectorService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: Repository> RedirectorService<R> {
    /// Creates a new RedirectorService with the given repository.
    pub fn new(repository: R) -> Self {
        Self::with_shared_repository(Arc::new(repository))
    }

    /// Creates a new RedirectorService over a repository shared with other services.
    pub fn with_shared_repository(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves a validated short code with already parsed client metadata.
    ///
    /// # Returns
    ///
    /// * `Ok(url)` - The original URL; the visit has been recorded
    /// * `Err(NotFound)` - If the code doesn't exist
    /// * `Err(Storage)` - If there was an error accessing the repository
    pub async fn resolve_with(&self, code: &ShortCode, client: &ClientMetadata) -> Result<String> {
        trace!(code = %code, "resolving short code");

        match self.repository.record_visit(code, client).await? {
            Some(url) => {
                debug!(code = %code, url = %url, os = %client.os, agent = %client.agent, "resolved short code");
                Ok(url)
            }
            None => {
                trace!(code = %code, "short code not found");
                Err(RedirectorError::NotFound)
            }
        }
    }
}

#[async_trait]
impl<R: Repository> Redirector for RedirectorService<R> {
    async fn resolve(&self, code: &str, user_agent: &str) -> Result<String> {
        let Ok(code) = ShortCode::new(code) else {
            trace!(code = %code, "malformed short code");
            return Err(RedirectorError::NotFound);
        };

        let client = parse_user_agent(user_agent);
        self.resolve_with(&code, &client).await
    }
}
