// The SQLite store is durable: data written through one connection is
// visible after the store is closed and the database reopened.

use tempfile::TempDir;
use todox_core::ListStore;
use todox_store::SqliteStore;

fn db_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("todos.db").display())
}

#[test]
fn test_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let url = db_url(&dir);

    {
        let mut store = SqliteStore::open(&url).unwrap();
        store.create_list("Groceries").unwrap();
        store.create_todo(1, "Milk").unwrap();
        store.create_todo(1, "Eggs").unwrap();
        store.set_todo_status(1, 1, true).unwrap();
        store.disconnect().unwrap();
    }

    let store = SqliteStore::open(&url).unwrap();
    let list = store.find_list(1).unwrap().unwrap();
    assert_eq!(list.name, "Groceries");
    assert_eq!(list.todos_count, 2);
    assert_eq!(list.remaining_todos_count, 1);
}

#[test]
fn test_all_lists_ordered_by_name() {
    let dir = TempDir::new().unwrap();
    let mut store = SqliteStore::open(&db_url(&dir)).unwrap();

    store.create_list("Zoo trip").unwrap();
    store.create_list("Apples").unwrap();
    store.create_list("Moving").unwrap();

    let names: Vec<_> = store
        .all_lists()
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(names, vec!["Apples", "Moving", "Zoo trip"]);
}

#[test]
fn test_list_ids_never_reused() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.create_list("a").unwrap(); // 1
    store.create_list("b").unwrap(); // 2

    store.delete_list(2).unwrap();
    store.create_list("c").unwrap();

    let ids: Vec<_> = store.all_lists().unwrap().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_todo_ids_are_global() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.create_list("Home").unwrap();
    store.create_list("Work").unwrap();
    store.create_todo(1, "Dishes").unwrap();
    store.create_todo(2, "Email").unwrap();

    assert_eq!(store.find_todos(1).unwrap()[0].id, 1);
    assert_eq!(store.find_todos(2).unwrap()[0].id, 2);
}

#[test]
fn test_directory_as_database_fails() {
    let dir = TempDir::new().unwrap();
    // A directory cannot be opened as a database file
    let result = SqliteStore::open(&dir.path().display().to_string());
    assert!(result.is_err());
}
