use proptest::prelude::*;

use formdag::engine::{Processor, TriggerEngine};
use formdag::state::FieldState;

const NUM_FIELDS: usize = 8;

fn field_name(i: usize) -> String {
    format!("field_{i}")
}

fn counting(key: &str) -> Processor {
    let counter = format!("{key}_runs");
    Box::new(move |state: &mut FieldState| {
        let runs: u32 = state.get_or_empty(&counter).parse().unwrap_or(0);
        state.set(counter.clone(), (runs + 1).to_string());
        Ok(())
    })
}

fn engine_from_edges(edges: &[(usize, usize)]) -> TriggerEngine {
    let mut engine = TriggerEngine::new();
    for i in 0..NUM_FIELDS {
        engine.register_node(&field_name(i));
        engine.register_processor(&field_name(i), counting(&field_name(i)));
    }
    for &(a, b) in edges {
        engine.register_dependency(&field_name(a), &field_name(b));
    }
    engine
}

proptest! {
    // Acyclic by construction: edges only go from lower to higher index.
    #[test]
    fn every_processor_fires_at_most_once_per_notification(
        raw_edges in proptest::collection::vec((0..NUM_FIELDS, 0..NUM_FIELDS), 0..24),
        changed in 0..NUM_FIELDS,
    ) {
        let edges: Vec<(usize, usize)> = raw_edges
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();

        let engine = engine_from_edges(&edges);
        let mut state = FieldState::new();
        engine.notify_change(&field_name(changed), &mut state).unwrap();

        for i in 0..NUM_FIELDS {
            let runs: u32 = state
                .get_or_empty(&format!("{}_runs", field_name(i)))
                .parse()
                .unwrap_or(0);
            prop_assert!(runs <= 1, "{} ran {runs} times", field_name(i));
        }

        // The changed field never triggers its own processor.
        prop_assert_eq!(
            state.get(&format!("{}_runs", field_name(changed))),
            None
        );
    }

    // Arbitrary (possibly cyclic) graphs must still terminate with each
    // affected field processed exactly once.
    #[test]
    fn cyclic_graphs_terminate_without_reprocessing(
        edges in proptest::collection::vec((0..NUM_FIELDS, 0..NUM_FIELDS), 0..24),
        changed in 0..NUM_FIELDS,
    ) {
        let engine = engine_from_edges(&edges);
        let mut state = FieldState::new();
        engine.notify_change(&field_name(changed), &mut state).unwrap();

        for i in 0..NUM_FIELDS {
            let runs: u32 = state
                .get_or_empty(&format!("{}_runs", field_name(i)))
                .parse()
                .unwrap_or(0);
            prop_assert!(runs <= 1, "{} ran {runs} times", field_name(i));
        }
    }
}
