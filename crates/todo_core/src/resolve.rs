//! Identifier resolution from request path segments

use tracing::debug;

use crate::error::TodoError;
use crate::structs::{Todo, TodoList};

/// Strict id parse: the canonical decimal re-serialization must equal the
/// input byte-for-byte, so "01", "+1", " 1" and "abc" are all rejected.
pub fn parse_id(raw: &str) -> Option<u64> {
    let id: u64 = raw.parse().ok()?;
    (id.to_string() == raw).then_some(id)
}

/// Resolve a raw path segment to a list in the session. The mutable
/// borrow lets callers edit the record before the session is saved back.
pub fn resolve_list<'a>(
    lists: &'a mut [TodoList],
    raw: &str,
) -> Result<&'a mut TodoList, TodoError> {
    let id = parse_id(raw).ok_or_else(|| {
        debug!(raw, "rejected malformed list id");
        TodoError::ListNotFound
    })?;
    lists
        .iter_mut()
        .find(|list| list.id == id)
        .ok_or(TodoError::ListNotFound)
}

/// Same contract as [`resolve_list`], scoped to one list's todos.
pub fn resolve_todo<'a>(list: &'a mut TodoList, raw: &str) -> Result<&'a mut Todo, TodoError> {
    let id = parse_id(raw).ok_or_else(|| {
        debug!(raw, "rejected malformed todo id");
        TodoError::TodoNotFound
    })?;
    list.todos
        .iter_mut()
        .find(|todo| todo.id == id)
        .ok_or(TodoError::TodoNotFound)
}
