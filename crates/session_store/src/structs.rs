//! Session data structures

use serde::{Deserialize, Serialize};
use todo_core::TodoList;

/// Everything the service knows about one user: their lists and any
/// pending flash messages. Serialized as an opaque blob by the storage
/// backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionData {
    /// Insertion order is display order.
    pub lists: Vec<TodoList>,

    /// One-shot notices for the next rendered response.
    #[serde(default)]
    pub flash: Flash,
}

/// Short-lived error/success notices. Each slot is displayed once and
/// cleared when taken.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flash {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
}

impl Flash {
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
    }

    /// Consume both slots, leaving the flash empty.
    pub fn take(&mut self) -> Flash {
        std::mem::take(self)
    }

    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.success.is_none()
    }
}
