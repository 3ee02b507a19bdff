//! In-memory session storage with time-based expiry.
//!
//! Each session holds one-shot notices ("flash" messages): a notice is set
//! by one request and handed out, then cleared, by the next request that
//! reads it.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Identifier of a browser session, carried in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
struct SessionEntry {
    notices: HashMap<String, Vec<String>>,
    touched_at: Instant,
}

impl SessionEntry {
    fn fresh(now: Instant) -> Self {
        Self {
            notices: HashMap::new(),
            touched_at: now,
        }
    }

    fn is_live(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.touched_at) < ttl
    }
}

/// A thread-safe session table with sliding expiration.
///
/// A session expires once it has not been touched for the configured TTL.
/// The store can be cloned cheaply (uses Arc internally).
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionEntry>>>,
    ttl: Duration,
}

impl SessionStore {
    /// Create a new SessionStore with the specified TTL in seconds.
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: Duration::from_secs(ttl_seconds),
        }
    }

    /// Resume the session `id` if it is still live, otherwise start a new one.
    ///
    /// Either way the returned session's expiry is pushed back by the TTL.
    pub fn resume_or_start(&self, id: Option<SessionId>) -> SessionId {
        let now = Instant::now();

        if let Ok(mut sessions) = self.sessions.write() {
            if let Some(id) = id {
                if let Some(entry) = sessions.get_mut(&id) {
                    if entry.is_live(now, self.ttl) {
                        entry.touched_at = now;
                        return id;
                    }
                    sessions.remove(&id);
                }
            }

            let id = SessionId::generate();
            sessions.insert(id, SessionEntry::fresh(now));
            return id;
        }

        tracing::warn!("Session table lock poisoned; starting an untracked session");
        SessionId::generate()
    }

    /// Queue a notice under `key` for the next read.
    pub fn set_notice(&self, id: SessionId, key: &str, message: impl Into<String>) {
        let now = Instant::now();

        if let Ok(mut sessions) = self.sessions.write() {
            let entry = sessions
                .entry(id)
                .or_insert_with(|| SessionEntry::fresh(now));
            entry
                .notices
                .entry(key.to_string())
                .or_default()
                .push(message.into());
        } else {
            tracing::warn!(key = %key, "Session table lock poisoned; notice dropped");
        }
    }

    /// Take every notice queued under `key`, clearing them.
    pub fn take_notices(&self, id: SessionId, key: &str) -> Vec<String> {
        let now = Instant::now();

        match self.sessions.write() {
            Ok(mut sessions) => {
                if let Some(entry) = sessions.get_mut(&id) {
                    if entry.is_live(now, self.ttl) {
                        return entry.notices.remove(key).unwrap_or_default();
                    }
                }
            }
            Err(_) => {
                tracing::warn!(key = %key, "Session table lock poisoned; no notices read");
            }
        }

        Vec::new()
    }

    /// Remove all expired sessions.
    pub fn cleanup_expired(&self) {
        let now = Instant::now();

        if let Ok(mut sessions) = self.sessions.write() {
            let before = sessions.len();
            sessions.retain(|_, entry| entry.is_live(now, self.ttl));
            let purged = before - sessions.len();
            if purged > 0 {
                tracing::debug!(purged = purged, "Expired sessions removed");
            }
        }
    }

    /// Get the number of sessions (including expired ones).
    pub fn len(&self) -> usize {
        if let Ok(sessions) = self.sessions.read() {
            sessions.len()
        } else {
            0
        }
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the TTL duration for this store.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("ttl", &self.ttl)
            .field("sessions", &self.len())
            .finish()
    }
}
