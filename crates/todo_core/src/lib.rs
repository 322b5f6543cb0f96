//! # Todo Core
//!
//! Domain model and rules for the to-do list manager: list and todo
//! records, name validation, strict id resolution, and the
//! completion-ordered view helper. No I/O lives here.

pub mod error;
pub mod resolve;
pub mod structs;
pub mod validation;
pub mod view;

// Re-exports
pub use error::TodoError;
pub use resolve::{parse_id, resolve_list, resolve_todo};
pub use structs::{next_id, next_list_id, Todo, TodoList};
pub use validation::{validate_list_name, validate_todo_name};
pub use view::partition_by_completion;

pub type Result<T> = std::result::Result<T, TodoError>;
