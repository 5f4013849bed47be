use crate::game::quiz::State;
use crate::output::{GameOutput, Message};

#[derive(Clone, Debug)]
pub struct IdleState<O> {
    time_budget: u32,
    output: O,
}

impl<O: GameOutput> IdleState<O> {
    pub fn new(time_budget: u32, output: O) -> Self {
        IdleState {
            time_budget,
            output,
        }
    }
}

impl<O: GameOutput> State for IdleState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::Welcome(self.time_budget));
    }

    fn on_tick(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
