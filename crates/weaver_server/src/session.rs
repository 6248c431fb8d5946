//! Per-browser session storage.

use axum::http::{HeaderMap, header};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;
use weaver_pipeline::{RunOutcome, SessionState};

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "weaver_session";

/// Session id from the request's `Cookie` headers, if present and well formed.
pub fn session_id_from_cookies(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// Sessions kept when no limit is configured.
pub const DEFAULT_MAX_SESSIONS: usize = 256;

#[derive(Debug)]
struct Entry {
    state: SessionState,
    last_seen: u64,
}

#[derive(Debug, Default)]
struct Sessions {
    entries: HashMap<Uuid, Entry>,
    clock: u64,
}

impl Sessions {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn touch(&mut self, id: Uuid) -> Option<SessionState> {
        let now = self.tick();
        self.entries.get_mut(&id).map(|entry| {
            entry.last_seen = now;
            entry.state.clone()
        })
    }
}

/// Session states keyed by id.
///
/// Only completed runs create entries. Once `max_sessions` entries exist, the
/// session seen least recently is dropped to make room. The lock is held only
/// to read or replace one entry, never across a run.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<Sessions>>,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    /// An empty store holding up to [`DEFAULT_MAX_SESSIONS`] sessions.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store holding up to `max_sessions` sessions (at least one).
    pub fn with_capacity(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(Sessions::default())),
            max_sessions: max_sessions.max(1),
        }
    }

    /// The eviction threshold.
    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    /// Snapshot of a session, or a fresh state for unknown ids.
    ///
    /// Reading a known session marks it as recently seen.
    pub async fn get(&self, id: Uuid) -> SessionState {
        self.sessions.lock().await.touch(id).unwrap_or_default()
    }

    /// Fold a run outcome into a session and return the resulting state.
    ///
    /// Rejected and failed runs never create an entry.
    pub async fn apply(&self, id: Uuid, outcome: RunOutcome) -> SessionState {
        let mut sessions = self.sessions.lock().await;

        if !outcome.is_completed() {
            return sessions.touch(id).unwrap_or_default();
        }

        if !sessions.entries.contains_key(&id) && sessions.entries.len() >= self.max_sessions {
            let oldest = sessions
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(key, _)| *key);
            if let Some(oldest) = oldest {
                sessions.entries.remove(&oldest);
                tracing::debug!(session = %oldest, "Session evicted");
            }
        }

        let now = sessions.tick();
        let entry = sessions.entries.entry(id).or_insert_with(|| Entry {
            state: SessionState::default(),
            last_seen: now,
        });
        entry.state.apply(outcome);
        entry.last_seen = now;
        tracing::debug!(session = %id, "Session updated");
        entry.state.clone()
    }

    /// Number of sessions with stored state.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.entries.len()
    }

    /// True when no session has stored state.
    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.entries.is_empty()
    }
}
