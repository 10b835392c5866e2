use serde::{Deserialize, Serialize};

use super::{ListId, Todo};

/// List - a named, ordered collection of todos
///
/// This is the embedded shape held by the session-backed store. The
/// relational store never materializes it; both backends hand callers a
/// `ListSummary` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,

    /// Display name, unique among lists
    pub name: String,

    /// Todos in insertion order
    pub todos: Vec<Todo>,
}

impl List {
    /// Create a new list with no todos
    pub fn new(id: ListId, name: String) -> Self {
        Self {
            id,
            name,
            todos: Vec::new(),
        }
    }

    pub fn todos_count(&self) -> usize {
        self.todos.len()
    }

    pub fn remaining_todos_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    /// A list is complete when it has todos and none of them remain open
    pub fn is_complete(&self) -> bool {
        self.todos_count() > 0 && self.remaining_todos_count() == 0
    }

    /// Project this list into the backend-neutral summary view
    pub fn summary(&self) -> ListSummary {
        ListSummary {
            id: self.id,
            name: self.name.clone(),
            todos_count: self.todos_count(),
            remaining_todos_count: self.remaining_todos_count(),
        }
    }
}

/// A list together with its aggregate todo counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: ListId,
    pub name: String,
    pub todos_count: usize,
    pub remaining_todos_count: usize,
}

impl ListSummary {
    /// Same rule as `List::is_complete`, computed from the counts alone
    pub fn is_complete(&self) -> bool {
        self.todos_count > 0 && self.remaining_todos_count == 0
    }
}
