use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// An operation was invoked while the quiz was not in a state that allows it.
    #[error("Cannot {operation} while the quiz is {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
    /// The question catalog or the settings cannot support a quiz.
    #[error("Invalid quiz setup: {0}")]
    Construction(String),
    #[error("Option {index} does not exist, the question only has {count} options")]
    InvalidSelection { index: usize, count: usize },
}
