//! List handlers

use todox_core::rules::validate_list_name;
use todox_core::{ListId, ListStore, ListSummary, Message, Todo, TodoXError};
use todox_core_types::RequestContext;
use todox_store::errors::Result;

use super::{logged, reject, Outcome};

/// All lists with their counts, in the backend's order
///
/// # Errors
///
/// `Persistence` if the backend fails.
pub fn lists_index(store: &mut dyn ListStore, ctx: &RequestContext) -> Result<Vec<ListSummary>> {
    logged("lists_index", ctx, || store.all_lists())
}

/// One list and its todos, or `None` if the id is unknown
///
/// # Errors
///
/// `Persistence` if the backend fails.
pub fn list_show(
    store: &mut dyn ListStore,
    ctx: &RequestContext,
    list_id: ListId,
) -> Result<Option<(ListSummary, Vec<Todo>)>> {
    logged("list_show", ctx, || {
        let Some(list) = store.find_list(list_id)? else {
            return Ok(None);
        };
        let todos = store.find_todos(list_id)?;
        Ok(Some((list, todos)))
    })
}

/// Create a list after validating its name
///
/// # Errors
///
/// `Persistence` if the backend fails. Invalid names are a
/// `Rejected` outcome, not an error.
pub fn list_create(store: &mut dyn ListStore, ctx: &RequestContext, name: &str) -> Result<Outcome> {
    let name = name.trim();
    logged("list_create", ctx, || {
        if let Err(e) = validate_list_name(name, &store.all_lists()?) {
            return reject(e);
        }
        store.create_list(name)?;
        Ok(Outcome::Done(Message::ListCreated))
    })
}

/// Rename a list
///
/// The new name is checked against every list, the renamed one included.
///
/// # Errors
///
/// `Persistence` if the backend fails.
pub fn list_rename(
    store: &mut dyn ListStore,
    ctx: &RequestContext,
    list_id: ListId,
    new_name: &str,
) -> Result<Outcome> {
    let new_name = new_name.trim();
    logged("list_rename", ctx, || {
        if store.find_list(list_id)?.is_none() {
            return reject(TodoXError::ListNotFound { list_id });
        }
        if let Err(e) = validate_list_name(new_name, &store.all_lists()?) {
            return reject(e);
        }
        store.update_list_name(list_id, new_name)?;
        Ok(Outcome::Done(Message::ListUpdated))
    })
}

/// Delete a list and every todo in it
///
/// # Errors
///
/// `Persistence` if the backend fails.
pub fn list_delete(store: &mut dyn ListStore, ctx: &RequestContext, list_id: ListId) -> Result<Outcome> {
    logged("list_delete", ctx, || {
        if store.find_list(list_id)?.is_none() {
            return reject(TodoXError::ListNotFound { list_id });
        }
        store.delete_list(list_id)?;
        Ok(Outcome::Done(Message::ListDeleted))
    })
}
