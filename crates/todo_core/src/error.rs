//! Domain error types

use thiserror::Error;

/// User-input errors. Every variant is recoverable; the web layer turns
/// these into flash messages, never into HTTP error responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The label ("List name", "Todo") leads the user-facing message.
    #[error("{0} must be between 1 and 100 characters long")]
    InvalidLength(&'static str),

    #[error("List name must be unique")]
    DuplicateName,

    #[error("The specified list was not found")]
    ListNotFound,

    #[error("The specified todo was not found")]
    TodoNotFound,
}
