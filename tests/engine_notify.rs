use std::error::Error;

use formdag::engine::{Processor, TriggerEngine};
use formdag::state::FieldState;

type TestResult = Result<(), Box<dyn Error>>;

/// Processor that bumps a `<key>_runs` counter in the state.
fn counting(key: &str) -> Processor {
    let counter = format!("{key}_runs");
    Box::new(move |state: &mut FieldState| {
        let runs: u32 = state.get_or_empty(&counter).parse().unwrap_or(0);
        state.set(counter.clone(), (runs + 1).to_string());
        Ok(())
    })
}

#[test]
fn notify_on_unknown_key_is_a_noop() -> TestResult {
    let mut engine = TriggerEngine::new();
    engine.register_dependency("A", "B");
    engine.register_processor("B", counting("B"));

    let mut state = FieldState::new();
    state.set("A", "something");
    let before = state.clone();

    engine.notify_change("nonexistent", &mut state)?;
    assert_eq!(state, before);

    Ok(())
}

#[test]
fn direct_dependency_fires_processor_exactly_once() -> TestResult {
    let mut engine = TriggerEngine::new();
    engine.register_dependency("A", "B");
    engine.register_processor("B", counting("B"));

    let mut state = FieldState::new();
    engine.notify_change("A", &mut state)?;
    assert_eq!(state.get("B_runs"), Some("1"));

    // A field does not trigger its own processor.
    engine.notify_change("B", &mut state)?;
    assert_eq!(state.get("B_runs"), Some("1"));

    Ok(())
}

#[test]
fn transitive_dependents_all_fire_once() -> TestResult {
    let mut engine = TriggerEngine::new();
    engine.register_dependencies([("A", "B"), ("B", "C")]);
    engine.register_processor("B", counting("B"));
    engine.register_processor("C", counting("C"));

    let mut state = FieldState::new();
    engine.notify_change("A", &mut state)?;

    assert_eq!(state.get("B_runs"), Some("1"));
    assert_eq!(state.get("C_runs"), Some("1"));

    Ok(())
}

#[test]
fn affected_field_without_processor_is_skipped_silently() -> TestResult {
    let mut engine = TriggerEngine::new();
    engine.register_dependency("A", "B");

    let mut state = FieldState::new();
    state.set("A", "value");
    let before = state.clone();

    engine.notify_change("A", &mut state)?;
    assert_eq!(state, before);

    Ok(())
}

#[test]
fn isolated_node_has_no_downstream_effects() -> TestResult {
    let mut engine = TriggerEngine::new();
    engine.register_node("lonely");
    engine.register_processor("lonely", counting("lonely"));

    let mut state = FieldState::new();
    engine.notify_change("lonely", &mut state)?;

    assert!(state.is_empty());

    Ok(())
}

#[test]
fn repeated_notification_with_idempotent_processor_is_stable() -> TestResult {
    let mut engine = TriggerEngine::new();
    engine.register_dependency("X", "Y");
    engine.register_processor(
        "Y",
        Box::new(|state: &mut FieldState| {
            if !state.is_filled("Y") {
                state.set("Y", "computed");
            }
            Ok(())
        }),
    );

    let mut state = FieldState::new();
    engine.notify_change("X", &mut state)?;
    assert_eq!(state.get("Y"), Some("computed"));

    engine.notify_change("X", &mut state)?;
    assert_eq!(state.get("Y"), Some("computed"));

    Ok(())
}
