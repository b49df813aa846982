use crate::error::Unauthorized;
use crate::registry::SessionRegistry;
use burrow_core::{Clock, SystemClock};
use jiff::SignedDuration;
use std::future::Future;
use std::sync::Arc;

/// Guards protected operations behind a live session.
///
/// Each check renews the session, so an admin who keeps working is never
/// logged out mid-use.
#[derive(Debug)]
pub struct AccessGate<C = SystemClock> {
    registry: Arc<SessionRegistry<C>>,
    ttl: SignedDuration,
}

impl<C> Clone for AccessGate<C> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            ttl: self.ttl,
        }
    }
}

impl<C: Clock> AccessGate<C> {
    pub fn new(registry: Arc<SessionRegistry<C>>, ttl: SignedDuration) -> Self {
        Self { registry, ttl }
    }

    pub fn ttl(&self) -> SignedDuration {
        self.ttl
    }

    /// Validates and renews `token`. A missing token is unauthorized.
    pub fn check(&self, token: Option<&str>) -> Result<(), Unauthorized> {
        match token {
            Some(token) if self.registry.validate_and_renew(token, self.ttl) => Ok(()),
            _ => Err(Unauthorized),
        }
    }

    /// Runs `op` only when `token` passes [`AccessGate::check`], returning its
    /// result unchanged.
    pub async fn run<T, E, F, Fut>(&self, token: Option<&str>, op: F) -> Result<T, E>
    where
        E: From<Unauthorized>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.check(token)?;
        op().await
    }
}
