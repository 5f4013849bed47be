use crate::game::quiz::outcome::Outcome;
use crate::game::quiz::State;
use crate::output::{GameOutput, Message};

#[cfg(test)]
mod tests;

#[derive(Clone, Debug)]
pub struct ResultsState<O> {
    outcome: Outcome,
    output: O,
}

impl<O> ResultsState<O> {
    pub fn new(outcome: Outcome, output: O) -> Self {
        ResultsState { outcome, output }
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

impl<O: GameOutput> State for ResultsState<O> {
    fn on_tick(&mut self) {}

    fn on_begin(&mut self) {
        self.output
            .say(&Message::QuizFinished(self.outcome.clone()));
    }

    fn is_over(&self) -> bool {
        false
    }
}
