use crate::game::quiz::outcome::Outcome;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    Feedback {
        is_correct: bool,
        correct_option: String,
    },
    QuestionPresented {
        prompt: String,
        options: Vec<String>,
        time_budget: u32,
        question_number: usize,
        total_questions: usize,
        score: u32,
    },
    QuizFinished(Outcome),
    TimeExpired,
    TimeUpdated(u32),
    UnknownCommand(String),
    UnrecognizedAnswer(String),
    Welcome(u32),
}

/// Presentation surface the quiz reports to.
pub trait GameOutput {
    fn say(&self, message: &Message);
}
