use std::error::Error;

use formdag::engine::{Processor, TriggerEngine};
use formdag::state::FieldState;

type TestResult = Result<(), Box<dyn Error>>;

fn counting(key: &str) -> Processor {
    let counter = format!("{key}_runs");
    Box::new(move |state: &mut FieldState| {
        let runs: u32 = state.get_or_empty(&counter).parse().unwrap_or(0);
        state.set(counter.clone(), (runs + 1).to_string());
        Ok(())
    })
}

#[test]
fn duplicate_edge_registration_still_fires_once() -> TestResult {
    let mut engine = TriggerEngine::new();
    engine.register_dependency("A", "B");
    engine.register_dependency("A", "B");
    engine.register_processor("B", counting("B"));

    assert_eq!(engine.graph().dependents_of("A"), &["B".to_string()]);
    assert_eq!(engine.graph().dependencies_of("B"), &["A".to_string()]);

    let mut state = FieldState::new();
    engine.notify_change("A", &mut state)?;
    assert_eq!(state.get("B_runs"), Some("1"));

    Ok(())
}

#[test]
fn node_registration_is_idempotent() -> TestResult {
    let mut engine = TriggerEngine::new();
    engine.register_node("A");
    engine.register_node("A");

    assert_eq!(engine.graph().fields().count(), 1);
    assert!(engine.graph().contains("A"));

    Ok(())
}

#[test]
fn rebinding_a_processor_replaces_the_first() -> TestResult {
    let mut engine = TriggerEngine::new();
    engine.register_dependency("A", "B");
    engine.register_processor(
        "B",
        Box::new(|state: &mut FieldState| {
            state.set("who", "first");
            Ok(())
        }),
    );
    engine.register_processor(
        "B",
        Box::new(|state: &mut FieldState| {
            state.set("who", "second");
            Ok(())
        }),
    );

    let mut state = FieldState::new();
    engine.notify_change("A", &mut state)?;
    assert_eq!(state.get("who"), Some("second"));

    Ok(())
}

#[test]
fn self_dependency_is_ignored() -> TestResult {
    let mut engine = TriggerEngine::new();
    engine.register_dependency("A", "A");
    engine.register_processor("A", counting("A"));

    // The node exists, but no self-edge was added.
    assert!(engine.graph().contains("A"));
    assert!(engine.graph().dependents_of("A").is_empty());
    assert!(engine.graph().dependencies_of("A").is_empty());

    let mut state = FieldState::new();
    engine.notify_change("A", &mut state)?;
    assert!(state.get("A_runs").is_none());

    // The node registered by the ignored self-edge behaves like any other:
    // a real edge added afterwards propagates normally.
    engine.register_dependency("A", "B");
    engine.register_processor("B", counting("B"));
    engine.notify_change("A", &mut state)?;
    assert_eq!(state.get("B_runs"), Some("1"));
    assert!(state.get("A_runs").is_none());

    Ok(())
}

#[test]
fn bulk_registration_matches_individual_registration() -> TestResult {
    let mut bulk = TriggerEngine::new();
    bulk.register_dependencies([("A", "B"), ("B", "C"), ("A", "C")]);

    let mut single = TriggerEngine::new();
    single.register_dependency("A", "B");
    single.register_dependency("B", "C");
    single.register_dependency("A", "C");

    for key in ["A", "B", "C"] {
        assert_eq!(
            bulk.graph().dependents_of(key),
            single.graph().dependents_of(key),
            "dependents of {key} diverge"
        );
    }

    Ok(())
}

#[test]
fn descendants_exclude_the_changed_key() -> TestResult {
    let mut engine = TriggerEngine::new();
    engine.register_dependencies([("A", "B"), ("B", "C")]);

    let descendants = engine.graph().descendants("A");
    assert!(descendants.contains("B"));
    assert!(descendants.contains("C"));
    assert!(!descendants.contains("A"));
    assert!(engine.graph().descendants("C").is_empty());

    Ok(())
}
