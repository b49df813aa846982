use crate::error::{Result, SessionError};
use crate::registry::{Session, SessionRegistry};
use burrow_core::{Clock, SystemClock};
use jiff::SignedDuration;
use std::fmt;
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// The single configured admin credential pair.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Compares both fields in constant time with respect to their contents.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        let user_ok = self.username.as_bytes().ct_eq(username.as_bytes());
        let pass_ok = self.password.as_bytes().ct_eq(password.as_bytes());
        (user_ok & pass_ok).into()
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Handles the login and logout intents.
#[derive(Debug)]
pub struct Authenticator<C = SystemClock> {
    registry: Arc<SessionRegistry<C>>,
    credentials: AdminCredentials,
    ttl: SignedDuration,
}

impl<C: Clock> Authenticator<C> {
    pub fn new(
        registry: Arc<SessionRegistry<C>>,
        credentials: AdminCredentials,
        ttl: SignedDuration,
    ) -> Self {
        Self {
            registry,
            credentials,
            ttl,
        }
    }

    pub fn registry(&self) -> &Arc<SessionRegistry<C>> {
        &self.registry
    }

    /// Issues a session when the credentials match.
    pub fn login(&self, username: &str, password: &str) -> Result<Session> {
        if !self.credentials.matches(username, password) {
            return Err(SessionError::InvalidCredentials);
        }
        self.registry.create(self.ttl)
    }

    pub fn logout(&self, token: &str) {
        self.registry.revoke(token);
    }
}
