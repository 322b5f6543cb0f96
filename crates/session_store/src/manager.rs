//! Session manager - get-or-create semantics with a cache of active sessions

use crate::error::{Result, SessionError};
use crate::storage::SessionStorage;
use crate::structs::SessionData;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Hands out working copies of per-user sessions and writes them back.
/// Callers follow a load/mutate/save cycle per request; the framework's
/// one-request-at-a-time handling per user is what keeps that safe, no
/// extra locking is layered on top.
pub struct SessionManager<S: SessionStorage> {
    storage: Arc<S>,
    /// In-memory cache of active sessions (session_id -> session)
    sessions: Arc<RwLock<HashMap<String, Arc<RwLock<SessionData>>>>>,
}

impl<S: SessionStorage> SessionManager<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(storage),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get a session, creating and persisting an empty one on first use.
    pub async fn get_session(&self, session_id: &str) -> Result<SessionData> {
        // Check cache first
        {
            let sessions = self.sessions.read().await;
            if let Some(session_lock) = sessions.get(session_id) {
                return Ok(session_lock.read().await.clone());
            }
        }

        // Load from storage or create new
        let session = match self.storage.load_session(session_id).await {
            Ok(session) => session,
            Err(SessionError::NotFound) => {
                debug!(session_id, "creating new session");
                let new_session = SessionData::default();
                self.storage.save_session(session_id, &new_session).await?;
                new_session
            }
            Err(e) => return Err(e),
        };

        // Add to cache
        {
            let mut sessions = self.sessions.write().await;
            sessions.insert(
                session_id.to_string(),
                Arc::new(RwLock::new(session.clone())),
            );
        }

        Ok(session)
    }

    /// Write a mutated session back to cache and storage.
    pub async fn update_session(&self, session_id: &str, session: SessionData) -> Result<()> {
        {
            let mut sessions = self.sessions.write().await;
            if let Some(session_lock) = sessions.get(session_id) {
                *session_lock.write().await = session.clone();
            } else {
                sessions.insert(
                    session_id.to_string(),
                    Arc::new(RwLock::new(session.clone())),
                );
            }
        }

        self.storage.save_session(session_id, &session).await
    }

    /// Drop a session from cache and storage.
    pub async fn delete_session(&self, session_id: &str) -> Result<()> {
        self.sessions.write().await.remove(session_id);
        self.storage.delete_session(session_id).await
    }
}
