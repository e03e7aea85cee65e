use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{Notice, Session};

/// Sessions idle for longer than this are dropped along with their input and
/// result.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// Per-browser state: the interaction session plus a notice to show on the
/// next render only.
#[derive(Debug, Default)]
pub struct WebSession {
    pub session: Session,
    pub notice: Option<Notice>,
}

struct Entry {
    web: Arc<Mutex<WebSession>>,
    last_seen: Instant,
}

/// In-memory session table. Each entry has its own lock so a browser never
/// has two transitions in flight.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Entry>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Looks up a live session without creating one.
    pub async fn get(&self, id: &str) -> Option<Arc<Mutex<WebSession>>> {
        let mut sessions = self.sessions.lock().await;
        let now = Instant::now();
        let expired = now.duration_since(sessions.get(id)?.last_seen) >= self.ttl;
        if expired {
            sessions.remove(id);
            return None;
        }
        let entry = sessions.get_mut(id)?;
        entry.last_seen = now;
        Some(entry.web.clone())
    }

    /// Returns the session for `id`, creating it if needed. Idle sessions are
    /// evicted first.
    pub async fn get_or_create(&self, id: &str) -> Arc<Mutex<WebSession>> {
        let mut sessions = self.sessions.lock().await;
        let now = Instant::now();

        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!("Evicted {evicted} idle session(s)");
        }

        let entry = sessions.entry(id.to_string()).or_insert_with(|| Entry {
            web: Arc::new(Mutex::new(WebSession::default())),
            last_seen: now,
        });
        entry.last_seen = now;
        entry.web.clone()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
