use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::io::BufRead;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

mod game;
mod output;

use crate::game::quiz::definition::QuizDefinition;
use crate::game::quiz::settings::Settings;
use crate::game::{Flow, Game};
use crate::output::terminal::TerminalOutput;

/// A multiple-choice trivia quiz played in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seconds allowed to answer each question
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    time_budget: Option<u32>,

    /// Length of one countdown second, in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: Option<u64>,

    /// Seed for the question order
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn into_settings(self) -> Settings {
        let mut settings = Settings::default();
        if let Some(time_budget) = self.time_budget {
            settings.time_budget = time_budget;
        }
        if let Some(tick_ms) = self.tick_ms {
            settings.tick_interval = Duration::from_millis(tick_ms);
        }
        settings.seed = self.seed;
        settings
    }
}

fn spawn_input_reader() -> mpsc::Receiver<String> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Could not read input: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

fn run(mut game: Game<TerminalOutput>) -> Result<()> {
    let input = spawn_input_reader();
    let mut last_update = Instant::now();
    loop {
        match input.recv_timeout(game.time_until_tick()) {
            Ok(line) => {
                if let Err(e) = game.tick(last_update.elapsed()) {
                    error!("{:#}", e);
                }
                last_update = Instant::now();
                match game.handle_input(&line) {
                    Ok(Flow::Quit) => break,
                    Ok(Flow::Continue) => (),
                    Err(e) => error!("{:#}", e),
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                let now = Instant::now();
                if let Err(e) = game.tick(now.duration_since(last_update)) {
                    error!("{:#}", e);
                }
                last_update = now;
            }
            Err(RecvTimeoutError::Disconnected) => {
                info!("Input closed");
                break;
            }
        }
    }
    info!("Final score: {}", game.quiz().score());
    Ok(())
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let settings = Args::parse().into_settings();

    let definition = QuizDefinition::builtin().context("Could not load questions")?;
    info!("Loaded {} questions", definition.len());

    let game = Game::new(definition, settings, TerminalOutput::new());
    run(game)
}
