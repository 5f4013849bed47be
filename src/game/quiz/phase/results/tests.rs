use super::*;
use crate::game::quiz::outcome::Tier;
use crate::output::mock::MockGameOutput;

#[test]
fn announces_outcome() {
    let output = MockGameOutput::new();
    let outcome = Outcome::new(4, 5);
    let mut state = ResultsState::new(outcome.clone(), output.clone());
    state.on_begin();
    assert_eq!(output.flush(), [Message::QuizFinished(outcome)]);
    assert_eq!(state.outcome().tier, Tier::Excellent);
}

#[test]
fn never_ends_on_its_own() {
    let output = MockGameOutput::new();
    let mut state = ResultsState::new(Outcome::new(0, 5), output.clone());
    state.on_begin();
    for _ in 0..100 {
        state.on_tick();
    }
    assert!(!state.is_over());
    assert_eq!(output.flush().len(), 1);
}
