use crate::error::Result;
use crate::token;
use burrow_core::{Clock, SystemClock};
use jiff::{SignedDuration, Timestamp};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;

/// A freshly issued admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub expires_at: Timestamp,
}

/// In-memory table of live session tokens.
///
/// A token is valid while the clock reads strictly before its expiry. Every
/// operation takes the single table lock and does no I/O while holding it.
/// Expired entries are never revived: validation of an expired token fails
/// without touching the table, and [`SessionRegistry::purge_expired`] drops
/// them opportunistically.
pub struct SessionRegistry<C = SystemClock> {
    sessions: Mutex<HashMap<String, Timestamp>>,
    clock: C,
}

impl<C: fmt::Debug> fmt::Debug for SessionRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("sessions", &self.sessions.lock().len())
            .field("clock", &self.clock)
            .finish()
    }
}

/// `now + ttl`, saturating at the ends of the representable range.
fn expiry_after(now: Timestamp, ttl: SignedDuration) -> Timestamp {
    now.checked_add(ttl).unwrap_or(if ttl.is_negative() {
        Timestamp::MIN
    } else {
        Timestamp::MAX
    })
}

impl SessionRegistry<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for SessionRegistry<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SessionRegistry<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Issues a new token that expires `ttl` from now.
    ///
    /// Fails only when the operating system's random source does.
    pub fn create(&self, ttl: SignedDuration) -> Result<Session> {
        let token = token::generate()?;
        let now = self.clock.now();
        let expires_at = expiry_after(now, ttl);

        let mut sessions = self.sessions.lock();
        sessions.retain(|_, expiry| *expiry > now);
        sessions.insert(token.clone(), expires_at);

        Ok(Session { token, expires_at })
    }

    /// Returns whether `token` is live and, if so, slides its expiry to `ttl`
    /// from now. Unknown or expired tokens leave the table untouched.
    pub fn validate_and_renew(&self, token: &str, ttl: SignedDuration) -> bool {
        let now = self.clock.now();
        let mut sessions = self.sessions.lock();

        match sessions.get_mut(token) {
            Some(expiry) if *expiry > now => {
                *expiry = expiry_after(now, ttl);
                true
            }
            _ => false,
        }
    }

    /// Read-only validity check; does not renew.
    pub fn is_active(&self, token: &str) -> bool {
        let now = self.clock.now();
        self.sessions
            .lock()
            .get(token)
            .is_some_and(|expiry| *expiry > now)
    }

    /// Removes `token`. Revoking an unknown token is a no-op.
    pub fn revoke(&self, token: &str) {
        self.sessions.lock().remove(token);
    }

    /// Drops every expired entry and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut sessions = self.sessions.lock();
        let before = sessions.len();
        sessions.retain(|_, expiry| *expiry > now);
        before - sessions.len()
    }

    /// Number of entries in the table, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burrow_core::ManualClock;
    use std::sync::Arc;

    fn secs(n: i64) -> SignedDuration {
        SignedDuration::from_secs(n)
    }

    fn registry() -> (SessionRegistry<ManualClock>, ManualClock) {
        let clock = ManualClock::new(Timestamp::from_second(1_700_000_000).unwrap());
        (SessionRegistry::with_clock(clock.clone()), clock)
    }

    #[test]
    fn fresh_session_validates() {
        let (registry, clock) = registry();

        let session = registry.create(secs(1)).unwrap();

        assert_eq!(session.expires_at, clock.now() + secs(1));
        assert!(registry.validate_and_renew(&session.token, secs(1)));
    }

    #[test]
    fn idle_session_expires() {
        let (registry, clock) = registry();
        let session = registry.create(secs(1)).unwrap();

        clock.advance(secs(2));

        assert!(!registry.validate_and_renew(&session.token, secs(1)));
        assert!(!registry.is_active(&session.token));
    }

    #[test]
    fn expiry_instant_itself_is_invalid() {
        let (registry, clock) = registry();
        let session = registry.create(secs(10)).unwrap();

        clock.set(session.expires_at);

        assert!(!registry.validate_and_renew(&session.token, secs(10)));
    }

    #[test]
    fn renewal_slides_past_original_expiry() {
        let (registry, clock) = registry();
        let ttl = secs(10);
        let session = registry.create(ttl).unwrap();

        clock.advance(secs(6));
        assert!(registry.validate_and_renew(&session.token, ttl));

        // past the original expiry, inside the renewed window
        clock.advance(secs(6));
        assert!(registry.validate_and_renew(&session.token, ttl));

        // idle for a full ttl after the last access
        clock.advance(ttl);
        assert!(!registry.validate_and_renew(&session.token, ttl));
    }

    #[test]
    fn failed_validation_does_not_mutate() {
        let (registry, clock) = registry();
        let session = registry.create(secs(1)).unwrap();
        clock.advance(secs(5));

        assert!(!registry.validate_and_renew(&session.token, secs(60)));
        assert!(!registry.validate_and_renew("not-a-token", secs(60)));

        // the expired entry is still there, unrenewed, and no entry was added
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_active(&session.token));
    }

    #[test]
    fn is_active_does_not_renew() {
        let (registry, clock) = registry();
        let session = registry.create(secs(10)).unwrap();

        clock.advance(secs(9));
        assert!(registry.is_active(&session.token));

        clock.advance(secs(1));
        assert!(!registry.is_active(&session.token));
    }

    #[test]
    fn revoked_token_never_validates() {
        let (registry, _clock) = registry();
        let session = registry.create(secs(60)).unwrap();

        registry.revoke(&session.token);

        assert!(!registry.validate_and_renew(&session.token, secs(60)));
        assert!(registry.is_empty());
    }

    #[test]
    fn revoking_unknown_token_is_noop() {
        let (registry, _clock) = registry();
        let session = registry.create(secs(60)).unwrap();

        registry.revoke("unknown");
        registry.revoke("unknown");

        assert!(registry.is_active(&session.token));
    }

    #[test]
    fn create_purges_expired_sessions() {
        let (registry, clock) = registry();
        registry.create(secs(1)).unwrap();
        registry.create(secs(1)).unwrap();
        clock.advance(secs(2));

        let live = registry.create(secs(1)).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.is_active(&live.token));
    }

    #[test]
    fn purge_expired_reports_removed() {
        let (registry, clock) = registry();
        registry.create(secs(1)).unwrap();
        let long = registry.create(secs(100)).unwrap();
        clock.advance(secs(2));

        assert_eq!(registry.purge_expired(), 1);
        assert!(registry.is_active(&long.token));
    }

    #[test]
    fn huge_ttl_saturates_instead_of_overflowing() {
        let huge = SignedDuration::from_secs(i64::MAX / 2);
        let registry = SessionRegistry::new();

        let session = registry.create(huge).unwrap();

        assert_eq!(session.expires_at, Timestamp::MAX);
        assert!(registry.validate_and_renew(&session.token, huge));
        assert!(registry.is_active(&session.token));
    }

    #[test]
    fn huge_ttl_on_manual_clock_renews() {
        let (registry, clock) = registry();
        let session = registry.create(secs(60)).unwrap();

        let huge = SignedDuration::from_secs(i64::MAX / 2);
        assert!(registry.validate_and_renew(&session.token, huge));
        clock.advance(SignedDuration::from_hours(24 * 365));
        assert!(registry.is_active(&session.token));
    }

    #[test]
    fn debug_output_hides_tokens() {
        let (registry, _clock) = registry();
        let session = registry.create(secs(60)).unwrap();

        let rendered = format!("{registry:?}");

        assert!(!rendered.contains(&session.token));
        assert!(rendered.contains("sessions: 1"));
    }

    #[test]
    fn system_clock_session_round_trip() {
        let registry = SessionRegistry::new();
        let session = registry.create(SignedDuration::from_mins(10)).unwrap();

        assert!(session.expires_at > Timestamp::now());
        assert!(registry.validate_and_renew(&session.token, SignedDuration::from_mins(10)));
    }

    #[test]
    fn concurrent_access_is_serialized() {
        let (registry, _clock) = registry();
        let registry = Arc::new(registry);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        let session = registry.create(secs(60)).unwrap();
                        assert!(registry.validate_and_renew(&session.token, secs(60)));
                        registry.revoke(&session.token);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert!(registry.is_empty());
    }
}
