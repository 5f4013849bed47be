use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::convert::TryFrom;

use crate::game::quiz::error::QuizError;

pub mod question;

pub use question::{Question, RawQuestion};

#[cfg(test)]
mod tests;

const BUILTIN_CATALOG: &str = include_str!("catalog.csv");

#[derive(Clone, Debug)]
pub struct QuizDefinition {
    questions: Vec<RawQuestion>,
}

impl QuizDefinition {
    pub fn new(questions: Vec<RawQuestion>) -> QuizDefinition {
        QuizDefinition { questions }
    }

    pub fn builtin() -> Result<QuizDefinition> {
        QuizDefinition::from_csv(BUILTIN_CATALOG).context("Could not read built-in question catalog")
    }

    pub fn from_csv(source: &str) -> Result<QuizDefinition> {
        let mut questions = Vec::new();
        let mut csv_reader = csv::Reader::from_reader(source.as_bytes());
        for question in csv_reader.deserialize() {
            let raw_question: RawQuestion = question?;
            questions.push(raw_question);
        }
        Ok(QuizDefinition { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Validates every catalog entry and returns them in a fresh random order.
    pub fn build_question_set<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Question>, QuizError> {
        if self.is_empty() {
            return Err(QuizError::Construction("question catalog is empty".into()));
        }
        let mut questions = self
            .questions
            .iter()
            .cloned()
            .map(Question::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        questions.shuffle(rng);
        Ok(questions)
    }
}
