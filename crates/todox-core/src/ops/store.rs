use crate::errors::StoreResult;
use crate::model::{ListId, ListSummary, Todo, TodoId};

/// Storage contract for lists and todos
///
/// Implemented by the session-backed `SessionStore` and by the SQLite-backed
/// store in `todox-store`. Callers hold a `&mut dyn ListStore` and never need
/// to know which backend is active.
///
/// Absence is never an error: lookups return `None` or an empty `Vec`, and
/// mutations addressed at an unknown list or todo are silent no-ops. Callers
/// that need to tell "missing" apart must call `find_list` first.
pub trait ListStore {
    /// Every list with its todo counts
    ///
    /// The session backend keeps insertion order; the relational backend
    /// orders by name.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backing database fails.
    fn all_lists(&self) -> StoreResult<Vec<ListSummary>>;

    /// The list with the given id, or `None`
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backing database fails.
    fn find_list(&self, id: ListId) -> StoreResult<Option<ListSummary>>;

    /// Insert a new, empty list under a freshly assigned id
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backing database fails.
    fn create_list(&mut self, name: &str) -> StoreResult<()>;

    /// Rename a list in place
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backing database fails.
    fn update_list_name(&mut self, id: ListId, new_name: &str) -> StoreResult<()>;

    /// Remove a list and every todo it owns
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backing database fails.
    fn delete_list(&mut self, id: ListId) -> StoreResult<()>;

    /// Append a new, incomplete todo to a list
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backing database fails.
    fn create_todo(&mut self, list_id: ListId, name: &str) -> StoreResult<()>;

    /// Remove the todo matching both ids
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backing database fails.
    fn delete_todo(&mut self, list_id: ListId, todo_id: TodoId) -> StoreResult<()>;

    /// Set a todo's completion flag (idempotent)
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backing database fails.
    fn set_todo_status(
        &mut self,
        list_id: ListId,
        todo_id: TodoId,
        completed: bool,
    ) -> StoreResult<()>;

    /// Mark every todo of a list as completed
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backing database fails.
    fn complete_todos(&mut self, list_id: ListId) -> StoreResult<()>;

    /// The todos of a list, in stable order
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if the backing database fails.
    fn find_todos(&self, list_id: ListId) -> StoreResult<Vec<Todo>>;
}
