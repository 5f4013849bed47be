use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use std::time::Duration;

pub mod quiz;

use crate::game::quiz::definition::{Question, QuizDefinition};
use crate::game::quiz::settings::Settings;
use crate::game::quiz::{QuizController, Status};
use crate::output::{GameOutput, Message};


lazy_static! {
    static ref OPTION_SELECTION_REGEX: Regex = Regex::new("^(?:([1-4])|([a-d]))$").unwrap();
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

fn is_quit_command(input: &str) -> bool {
    match input {
        "q" | "quit" | "exit" => true,
        _ => false,
    }
}

/// Maps `1`-`4`, `a`-`d` or the text of an option to an option index.
fn parse_selection(input: &str, question: &Question) -> Option<usize> {
    let lowercase = input.to_lowercase();
    if let Some(captures) = OPTION_SELECTION_REGEX.captures(&lowercase) {
        if let Some(number) = captures.get(1) {
            return number.as_str().parse::<usize>().ok().map(|n| n - 1);
        }
        if let Some(letter) = captures.get(2) {
            let letter = letter.as_str().as_bytes()[0];
            return Some((letter - b'a') as usize);
        }
    }
    question.find_option(input)
}

/// Connects a front end to the quiz: turns lines of user input into quiz
/// transitions and elapsed wall-clock time into whole ticks.
pub struct Game<O: GameOutput + Clone> {
    quiz: QuizController<O>,
    output: O,
    tick_interval: Duration,
    time_since_tick: Duration,
    last_question: Option<usize>,
}

impl<O: GameOutput + Clone> Game<O> {
    pub fn new(definition: QuizDefinition, settings: Settings, output: O) -> Game<O> {
        let tick_interval = settings.tick_interval;
        Game {
            quiz: QuizController::new(definition, settings, output.clone()),
            output,
            tick_interval,
            time_since_tick: Duration::default(),
            last_question: None,
        }
    }

    pub fn quiz(&self) -> &QuizController<O> {
        &self.quiz
    }

    pub fn time_until_tick(&self) -> Duration {
        self.tick_interval
            .checked_sub(self.time_since_tick)
            .unwrap_or_default()
    }

    pub fn tick(&mut self, dt: Duration) -> Result<()> {
        if self.quiz.status() != Status::AwaitingAnswer || self.tick_interval == Duration::default() {
            self.time_since_tick = Duration::default();
            return Ok(());
        }
        self.time_since_tick += dt;
        while self.time_since_tick >= self.tick_interval && self.quiz.is_timer_active() {
            self.time_since_tick -= self.tick_interval;
            self.quiz.tick()?;
            if self.sync_question() {
                break;
            }
        }
        Ok(())
    }

    pub fn handle_input(&mut self, input: &str) -> Result<Flow> {
        let input = input.trim();
        let command = input.to_lowercase();
        if is_quit_command(&command) {
            info!("Leaving quiz");
            return Ok(Flow::Quit);
        }

        match self.quiz.status() {
            Status::Idle => match command.as_str() {
                "" | "s" | "start" => self.quiz.start()?,
                _ => self.output.say(&Message::UnknownCommand(input.into())),
            },
            Status::AwaitingAnswer => {
                if input.is_empty() {
                    return Ok(Flow::Continue);
                }
                if command == "skip" || command == "pass" {
                    self.quiz.submit(None)?;
                } else {
                    let question = self
                        .quiz
                        .current_question()
                        .context("No question is being asked")?;
                    match parse_selection(input, question) {
                        Some(index) => {
                            debug!("Submitting option {} for {:?}", index, input);
                            self.quiz.submit(Some(index))?;
                        }
                        None => self
                            .output
                            .say(&Message::UnrecognizedAnswer(input.into())),
                    }
                }
            }
            Status::Finished => match command.as_str() {
                "p" | "play" | "again" | "play again" => self.quiz.start()?,
                "m" | "menu" | "main menu" => self.quiz.reset_to_idle()?,
                _ => self.output.say(&Message::UnknownCommand(input.into())),
            },
        }

        self.sync_question();
        Ok(Flow::Continue)
    }

    // Every new question starts from a fresh tick interval.
    fn sync_question(&mut self) -> bool {
        let question = self.quiz.question_number();
        let changed = question != self.last_question;
        if changed {
            self.last_question = question;
            self.time_since_tick = Duration::default();
        }
        changed
    }
}
