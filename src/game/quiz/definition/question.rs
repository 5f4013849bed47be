use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use unidecode::unidecode;

use crate::game::quiz::error::QuizError;

pub const OPTIONS_PER_QUESTION: usize = 4;

lazy_static! {
    static ref FORBIDDEN_GUESS_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9]").unwrap();
}

fn sanitize(answer: &str) -> String {
    let answer = unidecode(answer);
    FORBIDDEN_GUESS_CHARACTERS_REGEX
        .replace_all(&answer.to_lowercase(), "")
        .into()
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawQuestion {
    pub prompt: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct: usize,
}

impl Question {
    pub fn new(prompt: String, options: Vec<String>, correct: usize) -> Result<Self, QuizError> {
        if prompt.trim().is_empty() {
            return Err(QuizError::Construction("question prompt is blank".into()));
        }
        if options.len() != OPTIONS_PER_QUESTION {
            return Err(QuizError::Construction(format!(
                "question {:?} has {} options instead of {}",
                prompt,
                options.len(),
                OPTIONS_PER_QUESTION
            )));
        }
        if options.iter().any(|o| o.trim().is_empty()) {
            return Err(QuizError::Construction(format!(
                "question {:?} has a blank option",
                prompt
            )));
        }
        if correct >= options.len() {
            return Err(QuizError::Construction(format!(
                "question {:?} points to option {} as its answer but only has {}",
                prompt,
                correct,
                options.len()
            )));
        }
        Ok(Question {
            prompt,
            options,
            correct,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct]
    }

    pub fn is_correct(&self, selection: Option<usize>) -> bool {
        selection == Some(self.correct)
    }

    /// Finds the option whose text matches a typed answer, ignoring case,
    /// accents and punctuation.
    pub fn find_option(&self, guess: &str) -> Option<usize> {
        let sanitized_guess = sanitize(guess);
        if sanitized_guess.is_empty() {
            return None;
        }
        self.options
            .iter()
            .position(|option| sanitize(option) == sanitized_guess)
    }
}

impl std::convert::TryFrom<RawQuestion> for Question {
    type Error = QuizError;

    fn try_from(raw_question: RawQuestion) -> Result<Self, Self::Error> {
        let options = vec![
            raw_question.option_a,
            raw_question.option_b,
            raw_question.option_c,
            raw_question.option_d,
        ];
        Question::new(raw_question.prompt, options, raw_question.correct)
    }
}
