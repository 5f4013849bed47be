use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use self::definition::*;
use self::error::QuizError;
use self::outcome::Outcome;
use self::phase::*;
use self::settings::*;
use crate::output::GameOutput;

pub mod definition;
pub mod error;
pub mod outcome;
mod phase;
pub mod settings;


pub use self::phase::Submission;

trait State {
    fn on_begin(&mut self);
    fn on_tick(&mut self);
    fn is_over(&self) -> bool;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Idle,
    AwaitingAnswer,
    Finished,
}

enum Phase<O> {
    Idle(IdleState<O>),
    Question(QuestionState<O>),
    Results(ResultsState<O>),
}

impl<O: GameOutput> Phase<O> {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            Phase::Idle(s) => s,
            Phase::Question(s) => s,
            Phase::Results(s) => s,
        }
    }

    fn status(&self) -> Status {
        match self {
            Phase::Idle(_) => Status::Idle,
            Phase::Question(_) => Status::AwaitingAnswer,
            Phase::Results(_) => Status::Finished,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Phase::Idle(_) => "idle",
            Phase::Question(_) => "awaiting an answer",
            Phase::Results(_) => "finished",
        }
    }
}

/// Drives a quiz session from the welcome screen to the results. Owns the
/// question set, the score and the question timer; everything it wants shown
/// goes through its [`GameOutput`].
pub struct QuizController<O: GameOutput + Clone> {
    definition: QuizDefinition,
    settings: Settings,
    questions: Vec<Question>,
    current_question: usize,
    score: u32,
    current_phase: Phase<O>,
    rng: StdRng,
    output: O,
}

impl<O: GameOutput + Clone> QuizController<O> {
    pub fn new(definition: QuizDefinition, settings: Settings, output: O) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let idle_state = IdleState::new(settings.time_budget, output.clone());
        let mut quiz = QuizController {
            definition,
            settings,
            questions: Vec::new(),
            current_question: 0,
            score: 0,
            current_phase: Phase::Idle(idle_state.clone()),
            rng,
            output,
        };
        quiz.set_current_phase(Phase::Idle(idle_state));
        quiz
    }

    pub fn status(&self) -> Status {
        self.current_phase.status()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        match &self.current_phase {
            Phase::Question(state) => Some(state.question()),
            _ => None,
        }
    }

    /// 1-based number of the question being asked.
    pub fn question_number(&self) -> Option<usize> {
        match &self.current_phase {
            Phase::Question(state) => Some(state.question_number()),
            _ => None,
        }
    }

    pub fn time_remaining(&self) -> Option<u32> {
        match &self.current_phase {
            Phase::Question(state) => Some(state.time_remaining()),
            _ => None,
        }
    }

    pub fn is_timer_active(&self) -> bool {
        match &self.current_phase {
            Phase::Question(state) => state.is_timer_active(),
            _ => false,
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.current_phase {
            Phase::Results(state) => Some(state.outcome()),
            _ => None,
        }
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        debug!("Entering quiz phase: {}", phase.name());
        self.current_phase = phase;
        self.current_phase.get_state().on_begin();
    }

    fn invalid_state(&self, operation: &'static str) -> QuizError {
        QuizError::InvalidState {
            operation,
            state: self.current_phase.name(),
        }
    }

    pub fn start(&mut self) -> Result<(), QuizError> {
        if let Phase::Question(_) = self.current_phase {
            return Err(self.invalid_state("start a quiz"));
        }
        if self.settings.time_budget == 0 {
            return Err(QuizError::Construction(
                "time budget must be at least one tick".into(),
            ));
        }

        let questions = self.definition.build_question_set(&mut self.rng)?;
        debug!("Starting quiz with {} questions", questions.len());
        self.questions = questions;
        self.current_question = 0;
        self.score = 0;
        self.begin_question();
        Ok(())
    }

    /// Counts one unit of time down on the active question. A question that
    /// runs out of time is submitted without an answer.
    pub fn tick(&mut self) -> Result<(), QuizError> {
        let state = self.current_phase.get_state();
        state.on_tick();
        if state.is_over() {
            self.submit(None)?;
        }
        Ok(())
    }

    pub fn submit(&mut self, selection: Option<usize>) -> Result<Submission, QuizError> {
        let submission = match &mut self.current_phase {
            Phase::Question(state) => state.submit(selection)?,
            _ => return Err(self.invalid_state("submit an answer")),
        };
        if submission.is_correct {
            self.score += 1;
        }
        self.advance();
        Ok(submission)
    }

    pub fn reset_to_idle(&mut self) -> Result<(), QuizError> {
        match self.current_phase {
            Phase::Results(_) => {
                let state = IdleState::new(self.settings.time_budget, self.output.clone());
                self.set_current_phase(Phase::Idle(state));
                Ok(())
            }
            _ => Err(self.invalid_state("return to the main menu")),
        }
    }

    fn advance(&mut self) {
        self.current_question += 1;
        if self.current_question < self.questions.len() {
            self.begin_question();
        } else {
            let outcome = Outcome::new(self.score, self.questions.len());
            debug!(
                "Quiz finished with {}/{} ({:.1}%)",
                outcome.score, outcome.total, outcome.percentage
            );
            let state = ResultsState::new(outcome, self.output.clone());
            self.set_current_phase(Phase::Results(state));
        }
    }

    fn begin_question(&mut self) {
        let question = self.questions[self.current_question].clone();
        let state = QuestionState::new(
            question,
            self.current_question + 1,
            self.questions.len(),
            self.score,
            self.settings.time_budget,
            self.output.clone(),
        );
        self.set_current_phase(Phase::Question(state));
    }
}
