//! Nordle - CLI
//!
//! Terminal code-breaking game: guess the hidden digit or letter pattern
//! within a fixed number of tries, with colorized hints after each guess.

use anyhow::Result;
use clap::Parser;
use nordle::{
    commands::{PlayOptions, run_session},
    engine::{Game, GameConfig},
    source::{LocalSource, SourceKind, SymbolMode},
};

#[derive(Parser)]
#[command(
    name = "nordle",
    about = "Guess the hidden pattern of digits or letters within a fixed number of tries",
    version,
    author
)]
struct Cli {
    /// Do not show colorized hints after each guess
    #[arg(short = 'n', long)]
    no_hints: bool,

    /// Show the hidden pattern at game start (debug)
    #[arg(short, long)]
    debug: bool,

    /// Maximum number of guesses per game
    #[arg(short, long, default_value_t = 10)]
    max_tries: usize,

    /// Number of symbols in the hidden pattern
    #[arg(short, long, default_value_t = 4)]
    pattern_length: usize,

    /// Largest digit value the pattern may contain (digit mode only)
    #[arg(long, default_value_t = 7)]
    max_value: u32,

    /// Switch to character (letter) mode
    #[arg(short, long)]
    character: bool,

    /// Pattern source: 'local' (default) or 'random-org'
    #[arg(short, long, default_value = "local")]
    source: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let symbol_max = if cli.character { 25 } else { cli.max_value };
    let config = GameConfig {
        max_guesses: cli.max_tries,
        pattern_length: cli.pattern_length,
        symbol_min: 0,
        symbol_max,
    };

    // The random.org API serves integers; letter mode always draws locally.
    let source = if cli.character {
        SourceKind::Local(LocalSource::new(SymbolMode::Letter))
    } else {
        SourceKind::from_name(&cli.source, SymbolMode::Digit)
    };

    let options = PlayOptions {
        show_hints: !cli.no_hints,
        reveal_pattern: cli.debug,
    };

    let mut game = Game::new(config, source);
    run_session(&mut game, &options).map_err(|e| anyhow::anyhow!(e))
}
