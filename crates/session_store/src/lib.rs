//! # Session Store
//!
//! Per-user session state for the to-do service: the session record
//! (lists plus one-shot flash messages), a storage trait with an
//! in-memory backend, and a manager that caches active sessions.

pub mod error;
pub mod manager;
pub mod storage;
pub mod structs;

// Re-exports
pub use error::SessionError;
pub use manager::SessionManager;
pub use storage::{MemorySessionStorage, SessionStorage};
pub use structs::{Flash, SessionData};
