use todox_core::{List, Session, Todo};

/// Create a new empty Session for testing
#[allow(dead_code)]
pub fn new_session() -> Session {
    Session::new()
}

/// Build a session holding one list with the given todo statuses
///
/// Bypasses the store so tests can set up arbitrary ids and states.
#[allow(dead_code)]
pub fn session_with_list(list_id: i64, name: &str, statuses: &[bool]) -> Session {
    let mut list = List::new(list_id, name.to_string());
    for (i, completed) in statuses.iter().enumerate() {
        let mut todo = Todo::new(i as i64 + 1, list_id, format!("todo {}", i + 1));
        todo.completed = *completed;
        list.todos.push(todo);
    }

    let mut session = Session::new();
    session.lists.push(list);
    session
}

/// Ids of the todos in a list, in order
#[allow(dead_code)]
pub fn todo_ids(session: &Session, list_id: i64) -> Vec<i64> {
    session
        .lists
        .iter()
        .find(|l| l.id == list_id)
        .map(|l| l.todos.iter().map(|t| t.id).collect())
        .unwrap_or_default()
}
