//! Subcommand implementations
//!
//! Every subcommand is one request: it gets a fresh `RequestContext` and
//! goes through the engine handlers, which leave a flash in the session.

pub mod lists;
pub mod todos;

use todox_core::{ListSummary, Todo};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// One line per list: id, name and done/total
pub fn render_summary(list: &ListSummary) -> String {
    let done = list.todos_count - list.remaining_todos_count;
    let mut line = format!("{:>4}  {}  {}/{}", list.id, list.name, done, list.todos_count);
    if list.is_complete() {
        line.push_str("  (complete)");
    }
    line
}

pub fn render_todo(todo: &Todo) -> String {
    let mark = if todo.completed { 'x' } else { ' ' };
    format!("  [{}] {:>4}  {}", mark, todo.id, todo.name)
}
