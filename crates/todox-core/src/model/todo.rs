use serde::{Deserialize, Serialize};

use super::{ListId, TodoId};

/// Todo - a named task with a completion flag, owned by exactly one list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Identifier, unique within the owning list
    pub id: TodoId,

    pub name: String,

    pub completed: bool,

    /// Owning list
    pub list_id: ListId,
}

impl Todo {
    /// Create a new, not yet completed todo
    pub fn new(id: TodoId, list_id: ListId, name: String) -> Self {
        Self {
            id,
            name,
            completed: false,
            list_id,
        }
    }
}
