pub mod list;
pub mod todo;

pub use list::{List, ListSummary};
pub use todo::Todo;

/// Identifier of a list
pub type ListId = i64;

/// Identifier of a todo (unique within its owning list)
pub type TodoId = i64;
