//! End-to-end store scenarios.

use std::sync::{Arc, Mutex};
use tally::{
    Checkpoint, CounterAction, CounterReducer, CounterState, CounterStore, Dispatched, RawAction,
    StoreConfig,
};

#[test]
fn increment_increment_by_decrement() {
    let mut store = CounterStore::counter();
    assert_eq!(store.value(), 1);

    store.dispatch(CounterAction::Increment);
    assert_eq!(store.value(), 2);

    store.dispatch(CounterAction::IncrementBy(5));
    assert_eq!(store.value(), 7);

    store.dispatch(CounterAction::Decrement);
    assert_eq!(store.value(), 6);

    let path: Vec<i64> = store.history().get_path().iter().map(|s| s.value).collect();
    assert_eq!(path, vec![1, 2, 7, 6]);
}

#[test]
fn unrecognized_action_leaves_value() {
    let mut store = CounterStore::counter();

    assert_eq!(
        store.dispatch_raw(&RawAction::new("counter/square")),
        Dispatched::Ignored
    );
    assert_eq!(store.value(), 1);
}

#[test]
fn json_actions_drive_the_store() {
    let mut store = CounterStore::counter();
    let incoming = r#"[
        {"type": "counter/inc"},
        {"type": "counter/incBy", "payload": 5},
        {"type": "counter/incBy", "payload": "lots"},
        {"type": "counter/dec"},
        {"type": "todos/add", "payload": "milk"}
    ]"#;

    let actions: Vec<RawAction> = serde_json::from_str(incoming).unwrap();
    let outcomes: Vec<Dispatched> = actions.iter().map(|raw| store.dispatch_raw(raw)).collect();

    assert_eq!(
        outcomes,
        vec![
            Dispatched::Applied,
            Dispatched::Applied,
            Dispatched::Ignored,
            Dispatched::Applied,
            Dispatched::Ignored,
        ]
    );
    assert_eq!(store.value(), 6);
    assert_eq!(store.metadata().ignored_count, 2);
}

#[test]
fn subscriber_can_detect_noop_actions() {
    let mut store = CounterStore::counter();
    let unchanged = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&unchanged);
    store.subscribe(move |change| {
        if !change.is_changed() {
            sink.lock().unwrap().push(*change.action);
        }
    });

    store.dispatch(CounterAction::IncrementBy(0));
    store.dispatch(CounterAction::Increment);

    assert_eq!(
        *unchanged.lock().unwrap(),
        vec![CounterAction::IncrementBy(0)]
    );
}

#[test]
fn checkpoint_survives_json_and_binary() {
    let mut store = CounterStore::counter();
    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::IncrementBy(5));

    let checkpoint = store.checkpoint();

    let json = checkpoint.to_json_pretty().unwrap();
    let from_json = Checkpoint::<CounterState, CounterAction>::from_json(&json).unwrap();
    let resumed = CounterStore::resume(CounterReducer, from_json).unwrap();
    assert_eq!(resumed.value(), 7);

    let bytes = checkpoint.to_binary().unwrap();
    let from_binary = Checkpoint::<CounterState, CounterAction>::from_binary(&bytes).unwrap();
    let resumed = CounterStore::resume(CounterReducer, from_binary).unwrap();
    assert_eq!(resumed.value(), 7);
    assert_eq!(resumed.initial_state(), &CounterState::new(1));
}

#[test]
fn config_file_builds_store() {
    let config = StoreConfig::from_toml_str(
        r#"
        initial_value = 100
        history_limit = 3
        "#,
    )
    .unwrap();

    let mut store = CounterStore::from_config(&config).unwrap();
    for _ in 0..10 {
        store.dispatch(CounterAction::Decrement);
    }

    assert_eq!(store.value(), 90);
    assert_eq!(store.history().len(), 3);
}

#[tokio::test]
async fn dispatchers_from_many_tasks_are_serialized() {
    let mut store = CounterStore::counter();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let dispatcher = store.dispatcher();
            tokio::spawn(async move {
                for _ in 0..25 {
                    dispatcher.dispatch(CounterAction::Increment).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.process_pending(), 200);
    assert_eq!(store.value(), 201);

    let sequences: Vec<u64> = store.history().records().iter().map(|r| r.sequence).collect();
    assert_eq!(sequences, (1..=200).collect::<Vec<u64>>());
}
