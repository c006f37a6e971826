//! Interactive game loop and play-again session
//!
//! Reads whitespace-separated guess tokens from stdin, feeds them to the
//! engine and renders the returned hints. Re-prompting on malformed input is
//! loop policy; the engine itself never retries.

use crate::core::GuessOutcome;
use crate::engine::{Game, GameError, Status};
use crate::output::format_hints;
use crate::source::PatternSource;
use colored::Colorize;
use std::io::{self, Write};

/// Options controlling one interactive session
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    /// Print the colorized hint line after each guess
    pub show_hints: bool,
    /// Print the hidden pattern when the game starts (debug)
    pub reveal_pattern: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            show_hints: true,
            reveal_pattern: false,
        }
    }
}

/// Run one game to completion and announce the result
///
/// # Errors
///
/// Returns an error if the pattern source fails to start the game or if
/// there's an I/O error reading user input.
pub fn run_game<S: PatternSource>(
    game: &mut Game<S>,
    options: &PlayOptions,
) -> Result<Status, String> {
    game.new_game().map_err(|e| e.to_string())?;

    if options.reveal_pattern {
        println!("Pattern to guess: {}", game.pattern());
    }

    while game.status() == Status::InProgress {
        println!("Guesses left: {}", game.remaining_guesses());
        let input = get_user_input("Please enter your guess separated by space (like 1 2 3 4)")?;

        if input.is_empty() {
            println!("Incorrect input. Please try again.\n");
            continue;
        }
        println!();

        let guess: Vec<String> = input.split_whitespace().map(ToString::to_string).collect();

        let result = match game.submit_guess(&guess) {
            Ok(result) => result,
            Err(err @ GameError::GuessLength { .. }) => {
                // No attempt consumed; just ask again.
                println!("{err}. Please try again.\n");
                continue;
            }
            Err(err) => return Err(err.to_string()),
        };

        match result.outcome() {
            GuessOutcome::FullMatch => {} // Win banner prints below.
            outcome => {
                println!("{}", outcome_message(outcome));
                if options.show_hints {
                    println!("{}", format_hints(&guess, &result));
                }
                println!();
            }
        }
    }

    let status = game.status();
    if status == Status::Won {
        println!("{}\n", "Congratulations, you WON!".bright_green().bold());
    } else {
        println!("{}\n", "You lost!".bright_red().bold());
    }

    Ok(status)
}

/// Run games until the player declines to continue, keeping a running tally
///
/// # Errors
///
/// Returns an error if a game cannot be started or on an input I/O error.
pub fn run_session<S: PatternSource>(
    game: &mut Game<S>,
    options: &PlayOptions,
) -> Result<(), String> {
    println!("{}", " WELCOME TO NORDLE!! ".black().on_white());
    println!();

    let mut played = 0u32;
    let mut won = 0u32;
    let mut lost = 0u32;

    loop {
        let status = run_game(game, options)?;
        played += 1;
        if status == Status::Won {
            won += 1;
        } else {
            lost += 1;
        }

        println!("Games played: {played}, Won: {won}, Lost: {lost}");

        if get_user_input("\nContinue y/n")?.to_lowercase() != "y" {
            break;
        }
        println!();
    }

    Ok(())
}

/// Player-facing message for a non-winning outcome
const fn outcome_message(outcome: GuessOutcome) -> &'static str {
    match outcome {
        GuessOutcome::NoMatch => "Your guess was incorrect.",
        GuessOutcome::ContentMatch => "You guessed a correct symbol!",
        GuessOutcome::PositionMatch => "You guessed a correct symbol and its correct location!",
        GuessOutcome::FullMatch => "You reproduced the whole pattern!",
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_messages_cover_every_variant() {
        assert!(outcome_message(GuessOutcome::NoMatch).contains("incorrect"));
        assert!(outcome_message(GuessOutcome::ContentMatch).contains("correct symbol"));
        assert!(outcome_message(GuessOutcome::PositionMatch).contains("correct location"));
    }
}
