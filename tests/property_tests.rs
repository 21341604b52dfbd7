//! Property-based tests for the counter reducer and store.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use tally::core::{
    counter_reducer, CounterAction, CounterReducer, CounterState, RawAction, Reducer,
};
use tally::CounterStore;

prop_compose! {
    fn arbitrary_state()(value in any::<i64>()) -> CounterState {
        CounterState::new(value)
    }
}

fn arbitrary_action() -> impl Strategy<Value = CounterAction> {
    prop_oneof![
        Just(CounterAction::Increment),
        Just(CounterAction::Decrement),
        any::<i64>().prop_map(CounterAction::IncrementBy),
    ]
}

proptest! {
    #[test]
    fn increments_add_their_count(state in arbitrary_state(), count in 0usize..200) {
        let end = (0..count).fold(state, |s, _| counter_reducer(&s, &CounterAction::Increment));
        prop_assert_eq!(end.value, state.value.wrapping_add(count as i64));
    }

    #[test]
    fn increment_by_roundtrips(state in arbitrary_state(), n in any::<i64>()) {
        let there = counter_reducer(&state, &CounterAction::IncrementBy(n));
        let back = counter_reducer(&there, &CounterAction::IncrementBy(n.wrapping_neg()));
        prop_assert_eq!(back, state);
    }

    #[test]
    fn decrement_inverts_increment(state in arbitrary_state()) {
        let up_down = counter_reducer(
            &counter_reducer(&state, &CounterAction::Increment),
            &CounterAction::Decrement,
        );
        let down_up = counter_reducer(
            &counter_reducer(&state, &CounterAction::Decrement),
            &CounterAction::Increment,
        );
        prop_assert_eq!(up_down, state);
        prop_assert_eq!(down_up, state);
    }

    #[test]
    fn reducer_is_pure(state in arbitrary_state(), action in arbitrary_action()) {
        let snapshot = state;
        let first = CounterReducer.reduce(&state, &action);
        let second = CounterReducer.reduce(&state, &action);
        prop_assert_eq!(first, second);
        prop_assert_eq!(state, snapshot);
    }

    #[test]
    fn unknown_raw_actions_are_identity(
        state in arbitrary_state(),
        kind in "[a-z]{1,12}/[a-zA-Z]{1,12}"
    ) {
        prop_assume!(kind != "counter/inc" && kind != "counter/dec" && kind != "counter/incBy");
        let next = CounterReducer.reduce_raw(&state, &RawAction::new(kind));
        prop_assert_eq!(next, state);
    }

    #[test]
    fn raw_form_decodes_to_same_action(action in arbitrary_action()) {
        use tally::core::Action;
        prop_assert_eq!(CounterAction::from_raw(&action.to_raw()), Some(action));
    }

    #[test]
    fn history_replay_matches_store(actions in prop::collection::vec(arbitrary_action(), 1..50)) {
        let mut store = CounterStore::counter();
        for action in &actions {
            store.dispatch(*action);
        }

        prop_assert_eq!(store.history().len(), actions.len());
        prop_assert_eq!(store.history().replay(&CounterReducer), Some(*store.state()));
    }

    #[test]
    fn bounded_history_still_replays(
        actions in prop::collection::vec(arbitrary_action(), 1..50),
        limit in 1usize..10,
    ) {
        let mut store = CounterStore::builder(CounterReducer)
            .initial(CounterState::default())
            .history_limit(limit)
            .build()
            .unwrap();
        for action in &actions {
            store.dispatch(*action);
        }

        prop_assert_eq!(store.history().len(), actions.len().min(limit));
        prop_assert_eq!(store.history().replay(&CounterReducer), Some(*store.state()));
    }
}
