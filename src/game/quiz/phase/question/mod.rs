use crate::game::quiz::definition::Question;
use crate::game::quiz::error::QuizError;
use crate::game::quiz::State;
use crate::output::{GameOutput, Message};


#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Submission {
    pub selection: Option<usize>,
    pub is_correct: bool,
}

#[derive(Clone, Debug)]
pub struct QuestionState<O> {
    question: Question,
    question_number: usize,
    total_questions: usize,
    score: u32,
    time_budget: u32,
    time_remaining: u32,
    timer_active: bool,
    submission: Option<Submission>,
    output: O,
}

impl<O: GameOutput> QuestionState<O> {
    pub fn new(
        question: Question,
        question_number: usize,
        total_questions: usize,
        score: u32,
        time_budget: u32,
        output: O,
    ) -> Self {
        QuestionState {
            question,
            question_number,
            total_questions,
            score,
            time_budget,
            time_remaining: time_budget,
            timer_active: false,
            submission: None,
            output,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn question_number(&self) -> usize {
        self.question_number
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_timer_active(&self) -> bool {
        self.timer_active
    }

    /// Ends the question with the given selection. `None` stands for a
    /// timeout or a skipped question and is never correct.
    pub fn submit(&mut self, selection: Option<usize>) -> Result<Submission, QuizError> {
        if self.submission.is_some() {
            return Err(QuizError::InvalidState {
                operation: "submit an answer",
                state: "showing feedback",
            });
        }

        if let Some(index) = selection {
            let count = self.question.options().len();
            if index >= count {
                return Err(QuizError::InvalidSelection { index, count });
            }
        }

        self.timer_active = false;

        let submission = Submission {
            selection,
            is_correct: self.question.is_correct(selection),
        };
        self.submission = Some(submission.clone());

        self.output.say(&Message::Feedback {
            is_correct: submission.is_correct,
            correct_option: self.question.correct_option().to_owned(),
        });

        Ok(submission)
    }
}

impl<O: GameOutput> State for QuestionState<O> {
    fn on_begin(&mut self) {
        self.time_remaining = self.time_budget;
        self.timer_active = true;
        self.output.say(&Message::QuestionPresented {
            prompt: self.question.prompt().to_owned(),
            options: self.question.options().to_vec(),
            time_budget: self.time_budget,
            question_number: self.question_number,
            total_questions: self.total_questions,
            score: self.score,
        });
    }

    fn on_tick(&mut self) {
        if !self.timer_active {
            return;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.output.say(&Message::TimeUpdated(self.time_remaining));
        if self.time_remaining == 0 {
            self.timer_active = false;
            self.output.say(&Message::TimeExpired);
        }
    }

    fn is_over(&self) -> bool {
        self.submission.is_none() && self.time_remaining == 0
    }
}
