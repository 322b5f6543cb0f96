//! Name validation rules

use crate::error::TodoError;
use crate::structs::TodoList;

const NAME_RANGE: std::ops::RangeInclusive<usize> = 1..=100;

/// Validate a list name against the current set of lists.
///
/// `exclude` carries the id of the list being renamed, if any. The rename
/// is self-exempt only when the name is unchanged; any other collision,
/// including with the excluded list's own former name, is a duplicate.
pub fn validate_list_name(
    name: &str,
    lists: &[TodoList],
    exclude: Option<u64>,
) -> Result<(), TodoError> {
    if let Some(id) = exclude {
        let unchanged = lists
            .iter()
            .any(|list| list.id == id && list.name == name);
        if unchanged {
            return Ok(());
        }
    }

    if !NAME_RANGE.contains(&name.chars().count()) {
        return Err(TodoError::InvalidLength("List name"));
    }

    // Byte-exact comparison; case variants are distinct names.
    if lists.iter().any(|list| list.name == name) {
        return Err(TodoError::DuplicateName);
    }

    Ok(())
}

/// Todo names carry only the length rule; duplicates are allowed.
pub fn validate_todo_name(name: &str) -> Result<(), TodoError> {
    if !NAME_RANGE.contains(&name.chars().count()) {
        return Err(TodoError::InvalidLength("Todo"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists(names: &[&str]) -> Vec<TodoList> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| TodoList::new(i as u64 + 1, *name))
            .collect()
    }

    #[test]
    fn test_valid_name_passes() {
        assert!(validate_list_name("Groceries", &lists(&["Chores"]), None).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            validate_list_name("", &[], None),
            Err(TodoError::InvalidLength("List name"))
        );
    }

    #[test]
    fn test_name_over_100_chars_rejected() {
        let long = "a".repeat(101);
        assert_eq!(
            validate_list_name(&long, &[], None),
            Err(TodoError::InvalidLength("List name"))
        );
        // exactly 100 is fine
        assert!(validate_list_name(&"a".repeat(100), &[], None).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 100 multibyte characters is a valid length
        let name = "é".repeat(100);
        assert!(validate_list_name(&name, &[], None).is_ok());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        assert_eq!(
            validate_list_name("Chores", &lists(&["Chores"]), None),
            Err(TodoError::DuplicateName)
        );
    }

    #[test]
    fn test_case_variant_is_not_a_duplicate() {
        assert!(validate_list_name("chores", &lists(&["Chores"]), None).is_ok());
    }

    #[test]
    fn test_rename_to_own_name_is_exempt() {
        let existing = lists(&["A", "B"]);
        // list 2 keeps its name "B"
        assert!(validate_list_name("B", &existing, Some(2)).is_ok());
    }

    #[test]
    fn test_rename_to_other_list_name_rejected() {
        let existing = lists(&["A", "B"]);
        assert_eq!(
            validate_list_name("A", &existing, Some(2)),
            Err(TodoError::DuplicateName)
        );
    }

    #[test]
    fn test_rename_to_invalid_length_rejected() {
        let existing = lists(&["A", "B"]);
        assert_eq!(
            validate_list_name("", &existing, Some(2)),
            Err(TodoError::InvalidLength("List name"))
        );
    }

    #[test]
    fn test_todo_name_length_rule() {
        assert!(validate_todo_name("Milk").is_ok());
        assert_eq!(validate_todo_name(""), Err(TodoError::InvalidLength("Todo")));
        assert_eq!(
            validate_todo_name(&"x".repeat(101)),
            Err(TodoError::InvalidLength("Todo"))
        );
    }
}
