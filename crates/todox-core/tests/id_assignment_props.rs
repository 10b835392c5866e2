//! Property tests for max + 1 id assignment in the session store

use proptest::prelude::*;
use todox_core::{ListStore, Session, SessionStore};

proptest! {
    #[test]
    fn sequential_todo_ids_count_up_from_one(n in 1usize..40) {
        let mut session = Session::new();
        let mut store = SessionStore::new(&mut session);
        store.create_list("Props").unwrap();

        for i in 0..n {
            store.create_todo(1, &format!("todo {}", i)).unwrap();
        }

        let ids: Vec<i64> = store.find_todos(1).unwrap().iter().map(|t| t.id).collect();
        let expected: Vec<i64> = (1..=n as i64).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn new_todo_id_is_one_past_surviving_max(
        n in 1usize..20,
        deletions in proptest::collection::vec(1i64..20, 0..10),
    ) {
        let mut session = Session::new();
        let mut store = SessionStore::new(&mut session);
        store.create_list("Props").unwrap();
        for i in 0..n {
            store.create_todo(1, &format!("todo {}", i)).unwrap();
        }
        for id in &deletions {
            store.delete_todo(1, *id).unwrap();
        }

        let surviving_max = store
            .find_todos(1)
            .unwrap()
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0);
        store.create_todo(1, "fresh").unwrap();

        let last = store.find_todos(1).unwrap().last().cloned().unwrap();
        prop_assert_eq!(last.name.as_str(), "fresh");
        prop_assert_eq!(last.id, surviving_max + 1);
    }

    #[test]
    fn list_ids_stay_unique(names in proptest::collection::vec("[a-z]{1,8}", 1..15)) {
        let mut session = Session::new();
        let mut store = SessionStore::new(&mut session);
        for name in &names {
            store.create_list(name).unwrap();
        }

        let mut ids: Vec<i64> = store.all_lists().unwrap().iter().map(|l| l.id).collect();
        let total = ids.len();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
        prop_assert_eq!(total, names.len());
    }
}
