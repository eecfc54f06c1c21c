//! Session store - live authenticated sessions

use dashmap::DashMap;
use uuid::Uuid;

use crate::models::Session;

/// Sessions by id. Ending a session removes it, which invalidates its token.
pub struct SessionStore {
    sessions: DashMap<Uuid, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn open(&self, session: Session) -> Session {
        tracing::debug!("Opening session {} for account {}", session.id, session.account_id);
        self.sessions.insert(session.id, session.clone());
        session
    }

    /// Look up a live session. Expired sessions are dropped on access.
    pub fn get(&self, id: &Uuid) -> Option<Session> {
        let session = self.sessions.get(id).map(|s| s.clone())?;
        if session.is_expired() {
            self.sessions.remove(id);
            return None;
        }
        Some(session)
    }

    /// End a session. Returns false if it was not live.
    pub fn end(&self, id: &Uuid) -> bool {
        self.sessions.remove(id).is_some()
    }

    /// Drop every expired session, returning how many went
    pub fn purge_expired(&self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, s| !s.is_expired());
        before - self.sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
