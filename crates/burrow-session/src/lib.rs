//! Admin session lifecycle.
//!
//! [`SessionRegistry`] owns the table of live tokens and their expiry
//! instants. [`AccessGate`] wraps protected operations with a
//! validate-and-renew check, and [`Authenticator`] turns a credential check
//! into a fresh session.
//!
//! ```
//! use burrow_session::{AccessGate, AdminCredentials, Authenticator, SessionRegistry};
//! use jiff::SignedDuration;
//! use std::sync::Arc;
//!
//! let ttl = SignedDuration::from_mins(10);
//! let registry = Arc::new(SessionRegistry::new());
//! let auth = Authenticator::new(Arc::clone(&registry), AdminCredentials::new("admin", "hunter2"), ttl);
//! let gate = AccessGate::new(registry, ttl);
//!
//! let session = auth.login("admin", "hunter2").unwrap();
//! assert!(gate.check(Some(session.token.as_str())).is_ok());
//!
//! auth.logout(&session.token);
//! assert!(gate.check(Some(session.token.as_str())).is_err());
//! ```

pub mod auth;
pub mod error;
pub mod gate;
pub mod registry;
mod token;

pub use auth::{AdminCredentials, Authenticator};
pub use error::{SessionError, Unauthorized};
pub use gate::AccessGate;
pub use registry::{Session, SessionRegistry};
