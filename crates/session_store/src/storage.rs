//! Session storage trait and the in-memory implementation

use crate::error::{Result, SessionError};
use crate::structs::SessionData;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Session storage trait. Backends hold sessions as opaque serialized
/// blobs keyed by session id.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Load a session
    async fn load_session(&self, session_id: &str) -> Result<SessionData>;

    /// Save a session
    async fn save_session(&self, session_id: &str, session: &SessionData) -> Result<()>;

    /// Check if a session exists
    async fn session_exists(&self, session_id: &str) -> bool;

    /// Delete a session
    async fn delete_session(&self, session_id: &str) -> Result<()>;
}

/// In-memory session storage. Entries are JSON strings, the same shape a
/// cookie or external session backend would carry; nothing survives a
/// restart.
#[derive(Default)]
pub struct MemorySessionStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn load_session(&self, session_id: &str) -> Result<SessionData> {
        let entries = self.entries.read().await;
        let raw = entries.get(session_id).ok_or(SessionError::NotFound)?;
        let session: SessionData = serde_json::from_str(raw)?;
        Ok(session)
    }

    async fn save_session(&self, session_id: &str, session: &SessionData) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        let mut entries = self.entries.write().await;
        entries.insert(session_id.to_string(), raw);
        Ok(())
    }

    async fn session_exists(&self, session_id: &str) -> bool {
        self.entries.read().await.contains_key(session_id)
    }

    async fn delete_session(&self, session_id: &str) -> Result<()> {
        self.entries.write().await.remove(session_id);
        Ok(())
    }
}
