//! Name policy checks layered above the store
//!
//! The store accepts any name it is given; these rules run in the caller
//! before a create or rename reaches it. Lengths are counted in characters,
//! on names the caller has already trimmed.

use crate::errors::{Result, TodoXError};
use crate::flash::Message;
use crate::model::ListSummary;

/// Inclusive bounds for list and todo names
pub const NAME_MIN_CHARS: usize = 1;
pub const NAME_MAX_CHARS: usize = 100;

fn valid_length(name: &str) -> bool {
    (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name.chars().count())
}

fn length_reason(name: &str) -> String {
    format!(
        "must be between {} and {} characters, got {}",
        NAME_MIN_CHARS,
        NAME_MAX_CHARS,
        name.chars().count()
    )
}

/// Check a list name for length, then for uniqueness against `existing`
///
/// A rename is checked against every list including the one being renamed,
/// so renaming a list to its current name is rejected as a duplicate.
///
/// # Errors
///
/// * `InvalidListName` - name is empty or longer than 100 characters
/// * `DuplicateListName` - another list already uses the name
pub fn validate_list_name(name: &str, existing: &[ListSummary]) -> Result<()> {
    if !valid_length(name) {
        return Err(TodoXError::InvalidListName {
            reason: length_reason(name),
        });
    }

    if existing.iter().any(|list| list.name == name) {
        return Err(TodoXError::DuplicateListName {
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Check a todo name for length; todo names need not be unique
///
/// # Errors
///
/// * `InvalidTodoName` - name is empty or longer than 100 characters
pub fn validate_todo_name(name: &str) -> Result<()> {
    if !valid_length(name) {
        return Err(TodoXError::InvalidTodoName {
            reason: length_reason(name),
        });
    }
    Ok(())
}

/// The flash message a validation failure is reported with
///
/// Returns `None` for errors that are not validation failures.
pub fn rejection_message(err: &TodoXError) -> Option<Message> {
    match err {
        TodoXError::InvalidListName { .. } => Some(Message::InvalidListName),
        TodoXError::DuplicateListName { .. } => Some(Message::ListNameNotUnique),
        TodoXError::InvalidTodoName { .. } => Some(Message::InvalidTodoName),
        TodoXError::ListNotFound { .. } => Some(Message::ListNotFound),
        _ => None,
    }
}
