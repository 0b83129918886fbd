//! Property tests for the task store
//!
//! Random sequences of intents are applied to a store and the collection
//! invariants are checked after every step.

use proptest::prelude::*;
use std::collections::HashSet;
use tasklist::{ClockIds, EditTask, IdGenerator, SequentialIds, TaskStore};

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(usize),
    Remove(usize),
    Rename(usize, String),
    Stale(i64),
}

fn title() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "Buy milk", "Walk dog"]).prop_map(String::from)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => title().prop_map(Op::Add),
        2 => any::<usize>().prop_map(Op::Toggle),
        1 => any::<usize>().prop_map(Op::Remove),
        1 => (any::<usize>(), title()).prop_map(|(i, t)| Op::Rename(i, t)),
        1 => any::<i64>().prop_map(Op::Stale),
    ]
}

/// Pick an existing id by index, if the list is not empty
fn pick<G: IdGenerator>(store: &TaskStore<G>, i: usize) -> Option<i64> {
    let tasks = store.tasks();
    if tasks.is_empty() {
        None
    } else {
        Some(tasks[i % tasks.len()].id)
    }
}

fn apply<G: IdGenerator>(store: &mut TaskStore<G>, op: Op) {
    match op {
        Op::Add(title) => {
            let existed = store.tasks().iter().any(|t| t.title == title);
            let before = store.tasks_count();
            let result = store.add_task(&title);
            assert_eq!(result.is_err(), existed);
            assert_eq!(store.tasks_count(), if existed { before } else { before + 1 });
        }
        Op::Toggle(i) => {
            if let Some(id) = pick(store, i) {
                store.toggle_task_done(id);
            }
        }
        Op::Remove(i) => {
            if let Some(id) = pick(store, i) {
                store.remove_task(id);
                assert!(store.find(id).is_none());
            }
        }
        Op::Rename(i, new_task_title) => {
            if let Some(id) = pick(store, i) {
                store.edit_task(EditTask { id, new_task_title });
            }
        }
        Op::Stale(id) => {
            if store.find(id).is_none() {
                let before = store.snapshot();
                store.toggle_task_done(id);
                store.remove_task(id);
                store.edit_task(EditTask {
                    id,
                    new_task_title: "stale".to_string(),
                });
                assert_eq!(store.snapshot(), before);
            }
        }
    }
}

fn assert_unique_ids<G: IdGenerator>(store: &TaskStore<G>) {
    let ids: HashSet<i64> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), store.tasks_count());
}

fn frozen_clock() -> i64 {
    1_700_000_000_000
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn ids_stay_unique_with_sequential_ids(ops in prop::collection::vec(op(), 0..64)) {
        let mut store = TaskStore::with_ids(SequentialIds::new());
        for op in ops {
            apply(&mut store, op);
            assert_unique_ids(&store);
        }
    }

    /// Every addition lands in the same millisecond
    #[test]
    fn ids_stay_unique_with_frozen_clock(ops in prop::collection::vec(op(), 0..64)) {
        let mut store = TaskStore::with_ids(ClockIds::with_clock(frozen_clock));
        for op in ops {
            apply(&mut store, op);
            assert_unique_ids(&store);
        }
    }

    #[test]
    fn toggle_twice_is_identity(ops in prop::collection::vec(op(), 0..32), i in any::<usize>()) {
        let mut store = TaskStore::with_ids(SequentialIds::new());
        for op in ops {
            apply(&mut store, op);
        }

        if let Some(id) = pick(&store, i) {
            let before = store.snapshot();
            store.toggle_task_done(id);
            store.toggle_task_done(id);
            prop_assert_eq!(store.snapshot(), before);
        }
    }

    #[test]
    fn toggle_and_rename_keep_order(
        titles in prop::collection::hash_set("[a-z]{1,8}", 1..16),
        toggles in prop::collection::vec(any::<usize>(), 0..16),
        renames in prop::collection::vec((any::<usize>(), "[a-z]{1,8}"), 0..16),
    ) {
        let mut store = TaskStore::with_ids(SequentialIds::new());
        for title in &titles {
            store.add_task(title).unwrap();
        }
        let order: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();

        for i in toggles {
            let id = pick(&store, i).unwrap();
            store.toggle_task_done(id);
        }
        for (i, new_task_title) in renames {
            let id = pick(&store, i).unwrap();
            store.edit_task(EditTask { id, new_task_title });
        }

        let after: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
        prop_assert_eq!(after, order);
    }
}
