//! Todo handlers
//!
//! All of these resolve the owning list first and answer `NotFound` when it
//! is missing. A todo id that does not belong to the list is left to the
//! store, which treats it as a no-op.

use todox_core::rules::validate_todo_name;
use todox_core::{ListId, ListStore, Message, TodoId, TodoXError};
use todox_core_types::RequestContext;
use todox_store::errors::Result;

use super::{logged, reject, Outcome};

/// Add a todo to a list
///
/// # Errors
///
/// `Persistence` if the backend fails.
pub fn todo_create(
    store: &mut dyn ListStore,
    ctx: &RequestContext,
    list_id: ListId,
    name: &str,
) -> Result<Outcome> {
    let name = name.trim();
    logged("todo_create", ctx, || {
        if store.find_list(list_id)?.is_none() {
            return reject(TodoXError::ListNotFound { list_id });
        }
        if let Err(e) = validate_todo_name(name) {
            return reject(e);
        }
        store.create_todo(list_id, name)?;
        Ok(Outcome::Done(Message::TodoAdded))
    })
}

/// # Errors
///
/// `Persistence` if the backend fails.
pub fn todo_delete(
    store: &mut dyn ListStore,
    ctx: &RequestContext,
    list_id: ListId,
    todo_id: TodoId,
) -> Result<Outcome> {
    logged("todo_delete", ctx, || {
        if store.find_list(list_id)?.is_none() {
            return reject(TodoXError::ListNotFound { list_id });
        }
        store.delete_todo(list_id, todo_id)?;
        Ok(Outcome::Done(Message::TodoDeleted))
    })
}

/// Mark a todo completed or not
///
/// # Errors
///
/// `Persistence` if the backend fails.
pub fn todo_set_status(
    store: &mut dyn ListStore,
    ctx: &RequestContext,
    list_id: ListId,
    todo_id: TodoId,
    completed: bool,
) -> Result<Outcome> {
    logged("todo_set_status", ctx, || {
        if store.find_list(list_id)?.is_none() {
            return reject(TodoXError::ListNotFound { list_id });
        }
        store.set_todo_status(list_id, todo_id, completed)?;
        Ok(Outcome::Done(Message::TodoUpdated))
    })
}

/// # Errors
///
/// `Persistence` if the backend fails.
pub fn todos_complete_all(
    store: &mut dyn ListStore,
    ctx: &RequestContext,
    list_id: ListId,
) -> Result<Outcome> {
    logged("todos_complete_all", ctx, || {
        if store.find_list(list_id)?.is_none() {
            return reject(TodoXError::ListNotFound { list_id });
        }
        store.complete_todos(list_id)?;
        Ok(Outcome::Done(Message::TodosCompleted))
    })
}
