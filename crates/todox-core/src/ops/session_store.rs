use tracing::debug;

use super::store::ListStore;
use crate::errors::StoreResult;
use crate::model::{List, ListId, ListSummary, Todo, TodoId};
use crate::session::Session;

/// Session-backed store
///
/// Borrows the lists of the request's `Session` for the lifetime of the
/// request; the session's flash stays free for the caller to set.
///
/// Ids are assigned as `max(existing) + 1`; todo ids are
/// computed per list, so two lists can both own a todo with id 1.
///
/// Never fails: every `StoreResult` it returns is `Ok`.
#[derive(Debug)]
pub struct SessionStore<'s> {
    lists: &'s mut Vec<List>,
}

impl<'s> SessionStore<'s> {
    pub fn new(session: &'s mut Session) -> Self {
        Self::from_lists(&mut session.lists)
    }

    /// Store over a session's list collection alone
    pub fn from_lists(lists: &'s mut Vec<List>) -> Self {
        Self { lists }
    }

    /// Live reference to a list held in the session
    pub fn list(&self, id: ListId) -> Option<&List> {
        self.lists.iter().find(|list| list.id == id)
    }

    fn list_mut(&mut self, id: ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|list| list.id == id)
    }
}

/// Next id for a collection: one past the highest id in use, 1 when empty
fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

impl ListStore for SessionStore<'_> {
    fn all_lists(&self) -> StoreResult<Vec<ListSummary>> {
        Ok(self.lists.iter().map(List::summary).collect())
    }

    fn find_list(&self, id: ListId) -> StoreResult<Option<ListSummary>> {
        Ok(self.list(id).map(List::summary))
    }

    fn create_list(&mut self, name: &str) -> StoreResult<()> {
        let id = next_id(self.lists.iter().map(|list| list.id));
        debug!(list_id = id, "session: create list");
        self.lists.push(List::new(id, name.to_string()));
        Ok(())
    }

    fn update_list_name(&mut self, id: ListId, new_name: &str) -> StoreResult<()> {
        if let Some(list) = self.list_mut(id) {
            list.name = new_name.to_string();
        }
        Ok(())
    }

    fn delete_list(&mut self, id: ListId) -> StoreResult<()> {
        // Todos live inside the list, so dropping it drops them too.
        self.lists.retain(|list| list.id != id);
        Ok(())
    }

    fn create_todo(&mut self, list_id: ListId, name: &str) -> StoreResult<()> {
        if let Some(list) = self.list_mut(list_id) {
            let id = next_id(list.todos.iter().map(|todo| todo.id));
            debug!(list_id, todo_id = id, "session: create todo");
            list.todos.push(Todo::new(id, list_id, name.to_string()));
        }
        Ok(())
    }

    fn delete_todo(&mut self, list_id: ListId, todo_id: TodoId) -> StoreResult<()> {
        if let Some(list) = self.list_mut(list_id) {
            list.todos.retain(|todo| todo.id != todo_id);
        }
        Ok(())
    }

    fn set_todo_status(
        &mut self,
        list_id: ListId,
        todo_id: TodoId,
        completed: bool,
    ) -> StoreResult<()> {
        let todo = self
            .list_mut(list_id)
            .and_then(|list| list.todos.iter_mut().find(|todo| todo.id == todo_id));
        if let Some(todo) = todo {
            todo.completed = completed;
        }
        Ok(())
    }

    fn complete_todos(&mut self, list_id: ListId) -> StoreResult<()> {
        if let Some(list) = self.list_mut(list_id) {
            list.todos.iter_mut().for_each(|todo| todo.completed = true);
        }
        Ok(())
    }

    fn find_todos(&self, list_id: ListId) -> StoreResult<Vec<Todo>> {
        Ok(self
            .list(list_id)
            .map(|list| list.todos.clone())
            .unwrap_or_default())
    }
}
