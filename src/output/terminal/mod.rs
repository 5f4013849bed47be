use itertools::Itertools;

use crate::output::{GameOutput, Message};


const OPTION_LABELS: [char; 4] = ['a', 'b', 'c', 'd'];

/// Renders quiz messages as plain text on stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }

    fn interpret_message(&self, message: &Message) -> Option<String> {
        use Message::*;
        match message {
            Welcome(time_budget) => Some(format!(
                "Welcome to Quiz Game!\n\
                 Test your knowledge with this fun quiz game!\n\
                 You'll have {} seconds to answer each question.\n\n\
                 Press Enter to start the quiz, or type `quit` to leave.",
                time_budget
            )),
            QuestionPresented {
                prompt,
                options,
                time_budget,
                question_number,
                total_questions,
                score,
            } => {
                let options = options
                    .iter()
                    .enumerate()
                    .map(|(index, option)| {
                        let label = OPTION_LABELS.get(index).copied().unwrap_or('?');
                        format!("  {}) {}", label, option)
                    })
                    .join("\n");
                Some(format!(
                    "\nQuestion {} of {}    Score: {}    Time: {}s\n\n{}\n\n{}\n\n\
                     Answer with a letter, a number or the option itself (`skip` to pass).",
                    question_number, total_questions, score, time_budget, prompt, options
                ))
            }
            TimeUpdated(remaining) => {
                if *remaining == 10 || (*remaining > 0 && *remaining <= 5) {
                    Some(format!("⏳ {}s left", remaining))
                } else {
                    None
                }
            }
            TimeExpired => Some("⏰ Time's up! You ran out of time!".into()),
            Feedback {
                is_correct: true, ..
            } => Some("✅ Correct! Your answer is correct!".into()),
            Feedback {
                is_correct: false,
                correct_option,
            } => Some(format!("❌ Incorrect. The correct answer is: {}", correct_option)),
            QuizFinished(outcome) => Some(format!(
                "\nQuiz Results\n\nYour Score: {}/{} ({:.1}%)\n{}\n\n\
                 Type `play` to play again, `menu` for the main menu or `quit` to exit.",
                outcome.score,
                outcome.total,
                outcome.percentage,
                outcome.tier.remark()
            )),
            UnrecognizedAnswer(input) => Some(format!(
                "\"{}\" is not one of the options. Pick a, b, c or d.",
                input
            )),
            UnknownCommand(input) => Some(format!("Unknown command: \"{}\"", input)),
        }
    }
}

impl GameOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        if let Some(text) = self.interpret_message(message) {
            println!("{}", text);
        }
    }
}
