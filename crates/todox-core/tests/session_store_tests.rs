mod common;

use common::{new_session, session_with_list, todo_ids};
use todox_core::{ListStore, SessionStore};

// ===== LIST TESTS =====

#[test]
fn test_create_first_list_gets_id_one() {
    let mut session = new_session();
    let mut store = SessionStore::new(&mut session);

    store.create_list("Groceries").unwrap();

    let lists = store.all_lists().unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].id, 1);
    assert_eq!(lists[0].name, "Groceries");
    assert_eq!(lists[0].todos_count, 0);
    assert_eq!(lists[0].remaining_todos_count, 0);
}

#[test]
fn test_all_lists_keeps_insertion_order() {
    let mut session = new_session();
    let mut store = SessionStore::new(&mut session);

    store.create_list("Zoo trip").unwrap();
    store.create_list("Apples").unwrap();
    store.create_list("Moving").unwrap();

    let names: Vec<_> = store
        .all_lists()
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert_eq!(names, vec!["Zoo trip", "Apples", "Moving"]);
}

#[test]
fn test_create_adds_exactly_one_list() {
    let mut session = new_session();
    let mut store = SessionStore::new(&mut session);
    store.create_list("One").unwrap();
    store.create_list("Two").unwrap();

    let before = store.all_lists().unwrap().len();
    store.create_list("Three").unwrap();
    let after = store.all_lists().unwrap();

    assert_eq!(after.len(), before + 1);
    assert_eq!(after.iter().filter(|l| l.name == "Three").count(), 1);
}

#[test]
fn test_find_list_absent_for_unknown_id() {
    let mut session = new_session();
    let store = SessionStore::new(&mut session);
    assert!(store.find_list(42).unwrap().is_none());
}

#[test]
fn test_update_list_name() {
    let mut session = new_session();
    let mut store = SessionStore::new(&mut session);
    store.create_list("Groceries").unwrap();

    store.update_list_name(1, "Food").unwrap();

    assert_eq!(store.find_list(1).unwrap().unwrap().name, "Food");
}

#[test]
fn test_delete_list_removes_list_and_todos() {
    let mut session = session_with_list(1, "Chores", &[false, true]);
    let mut store = SessionStore::new(&mut session);

    store.delete_list(1).unwrap();

    assert!(store.find_list(1).unwrap().is_none());
    assert!(store.find_todos(1).unwrap().is_empty());
}

#[test]
fn test_list_ids_follow_max_plus_one() {
    let mut session = new_session();
    let mut store = SessionStore::new(&mut session);
    store.create_list("a").unwrap(); // 1
    store.create_list("b").unwrap(); // 2
    store.create_list("c").unwrap(); // 3

    store.delete_list(2).unwrap();
    store.create_list("d").unwrap(); // max(1, 3) + 1

    let ids: Vec<_> = store.all_lists().unwrap().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

// ===== TODO TESTS =====

#[test]
fn test_todo_ids_in_sequence() {
    let mut session = session_with_list(1, "Chores", &[]);
    {
        let mut store = SessionStore::new(&mut session);
        store.create_todo(1, "Sweep").unwrap();
        store.create_todo(1, "Mop").unwrap();
        store.create_todo(1, "Dust").unwrap();
    }
    assert_eq!(todo_ids(&session, 1), vec![1, 2, 3]);
}

#[test]
fn test_deleting_lower_id_does_not_cause_reuse() {
    // create -> 1, create -> 2, delete 1, create -> 3
    let mut session = session_with_list(1, "Chores", &[]);
    {
        let mut store = SessionStore::new(&mut session);
        store.create_todo(1, "first").unwrap();
        store.create_todo(1, "second").unwrap();
        store.delete_todo(1, 1).unwrap();
        store.create_todo(1, "third").unwrap();
    }
    assert_eq!(todo_ids(&session, 1), vec![2, 3]);
}

#[test]
fn test_deleting_highest_id_allows_reuse() {
    // create -> 1, create -> 2, delete 2, create -> 2 again (max + 1)
    let mut session = session_with_list(1, "Chores", &[]);
    {
        let mut store = SessionStore::new(&mut session);
        store.create_todo(1, "first").unwrap();
        store.create_todo(1, "second").unwrap();
        store.delete_todo(1, 2).unwrap();
        store.create_todo(1, "again").unwrap();
    }
    assert_eq!(todo_ids(&session, 1), vec![1, 2]);
}

#[test]
fn test_todo_ids_are_per_list() {
    let mut session = new_session();
    let mut store = SessionStore::new(&mut session);
    store.create_list("Home").unwrap();
    store.create_list("Work").unwrap();

    store.create_todo(1, "Dishes").unwrap();
    store.create_todo(1, "Laundry").unwrap();
    store.create_todo(2, "Email").unwrap();

    let work = store.find_todos(2).unwrap();
    assert_eq!(work.len(), 1);
    assert_eq!(work[0].id, 1);
    assert_eq!(work[0].list_id, 2);
}

#[test]
fn test_new_todo_is_incomplete() {
    let mut session = session_with_list(1, "Chores", &[]);
    let mut store = SessionStore::new(&mut session);
    store.create_todo(1, "Sweep").unwrap();

    let todos = store.find_todos(1).unwrap();
    assert!(!todos[0].completed);
    assert_eq!(store.find_list(1).unwrap().unwrap().remaining_todos_count, 1);
}

#[test]
fn test_delete_todo_with_unknown_id_is_noop() {
    let mut session = session_with_list(1, "Chores", &[false, true]);
    let mut store = SessionStore::new(&mut session);
    let before = store.find_todos(1).unwrap();

    store.delete_todo(1, 99).unwrap();

    assert_eq!(store.find_todos(1).unwrap(), before);
}

#[test]
fn test_delete_todo_requires_matching_list() {
    let mut session = new_session();
    let mut store = SessionStore::new(&mut session);
    store.create_list("Home").unwrap();
    store.create_list("Work").unwrap();
    store.create_todo(1, "Dishes").unwrap();

    // todo 1 exists, but not in list 2
    store.delete_todo(2, 1).unwrap();

    assert_eq!(store.find_todos(1).unwrap().len(), 1);
}

#[test]
fn test_set_todo_status_is_idempotent() {
    let mut once = session_with_list(1, "Chores", &[false, false]);
    let mut twice = once.clone();

    SessionStore::new(&mut once)
        .set_todo_status(1, 2, true)
        .unwrap();
    {
        let mut store = SessionStore::new(&mut twice);
        store.set_todo_status(1, 2, true).unwrap();
        store.set_todo_status(1, 2, true).unwrap();
    }

    assert_eq!(once, twice);
}

#[test]
fn test_set_todo_status_can_reopen() {
    let mut session = session_with_list(1, "Chores", &[true]);
    let mut store = SessionStore::new(&mut session);

    store.set_todo_status(1, 1, false).unwrap();

    assert_eq!(store.find_list(1).unwrap().unwrap().remaining_todos_count, 1);
}

#[test]
fn test_one_of_two_completed_is_not_complete() {
    let mut session = session_with_list(1, "Chores", &[true, false]);
    let store = SessionStore::new(&mut session);

    let list = store.find_list(1).unwrap().unwrap();
    assert_eq!(list.todos_count, 2);
    assert_eq!(list.remaining_todos_count, 1);
    assert!(!list.is_complete());
}

#[test]
fn test_complete_todos_completes_list() {
    let mut session = session_with_list(1, "Chores", &[false, true, false]);
    let mut store = SessionStore::new(&mut session);

    store.complete_todos(1).unwrap();

    let list = store.find_list(1).unwrap().unwrap();
    assert_eq!(list.remaining_todos_count, 0);
    assert!(list.is_complete());
}

#[test]
fn test_complete_todos_on_empty_list_is_not_complete() {
    let mut session = session_with_list(1, "Chores", &[]);
    let mut store = SessionStore::new(&mut session);

    store.complete_todos(1).unwrap();

    let list = store.find_list(1).unwrap().unwrap();
    assert_eq!(list.remaining_todos_count, 0);
    assert!(!list.is_complete());
}

#[test]
fn test_store_state_lives_in_session() {
    let mut session = new_session();
    SessionStore::new(&mut session).create_list("Kept").unwrap();

    // A new store over the same session sees the list
    let store = SessionStore::new(&mut session);
    assert_eq!(store.all_lists().unwrap()[0].name, "Kept");
}
