//! List and todo records

use serde::{Deserialize, Serialize};

/// A named, ordered collection of todos. Lives inside a user session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoList {
    /// Unique within the session, assigned monotonically, never reused.
    pub id: u64,

    /// 1-100 characters, unique among the session's lists.
    pub name: String,

    /// Insertion order is display order; views reorder lazily.
    pub todos: Vec<Todo>,
}

/// A single item on a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Unique within the parent list, numbered independently per list.
    pub id: u64,

    pub name: String,

    #[serde(default)]
    pub completed: bool,
}

impl TodoList {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            todos: Vec::new(),
        }
    }

    /// A list is complete iff it has at least one todo and none are open.
    pub fn is_completed(&self) -> bool {
        !self.todos.is_empty() && self.incomplete_count() == 0
    }

    pub fn todo_count(&self) -> usize {
        self.todos.len()
    }

    pub fn incomplete_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    /// Next todo id: max existing + 1. Gaps left by deletion are permanent.
    pub fn next_todo_id(&self) -> u64 {
        next_id(self.todos.iter().map(|todo| todo.id))
    }
}

impl Todo {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }
}

/// Monotonic id assignment: max(existing) + 1, or 1 when empty.
pub fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0) + 1
}

/// Next list id for a session's list collection.
pub fn next_list_id(lists: &[TodoList]) -> u64 {
    next_id(lists.iter().map(|list| list.id))
}
