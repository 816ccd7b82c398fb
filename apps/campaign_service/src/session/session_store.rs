use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use uuid::Uuid;

/// Last results shown to one browser session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionDisplayState {
    pub campaign_text: String,
    pub logo_description: String,
    pub logo_image_url: Option<String>,
    pub email_content: String,
    pub updated_at: Option<DateTime<Utc>>,
}

struct SessionEntry {
    state: SessionDisplayState,
    touched_at: DateTime<Utc>,
}

impl SessionEntry {
    fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.touched_at >= ttl
    }
}

/// In-memory session state. Lost on restart.
///
/// A session expires `ttl` after it was created or last updated. Expired
/// sessions read as absent and are purged whenever a new session is created.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn create(&self) -> Uuid {
        self.create_at(Utc::now())
    }

    fn create_at(&self, now: DateTime<Utc>) -> Uuid {
        let id = Uuid::new_v4();
        let mut sessions = self.sessions.write();

        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired(now, self.ttl));
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::info!("Purged {} expired sessions", purged);
        }

        sessions.insert(
            id,
            SessionEntry {
                state: SessionDisplayState::default(),
                touched_at: now,
            },
        );
        tracing::info!("Created session {}", id);
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<SessionDisplayState> {
        self.get_at(id, Utc::now())
    }

    fn get_at(&self, id: &Uuid, now: DateTime<Utc>) -> Option<SessionDisplayState> {
        self.sessions
            .read()
            .get(id)
            .filter(|entry| !entry.is_expired(now, self.ttl))
            .map(|entry| entry.state.clone())
    }

    /// Applies `apply` to the session's state. Returns false for an unknown or expired id.
    pub fn update<F>(&self, id: &Uuid, apply: F) -> bool
    where
        F: FnOnce(&mut SessionDisplayState),
    {
        let now = Utc::now();
        let mut sessions = self.sessions.write();
        match sessions.get_mut(id) {
            Some(entry) if !entry.is_expired(now, self.ttl) => {
                apply(&mut entry.state);
                entry.state.updated_at = Some(now);
                entry.touched_at = now;
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}
