//! Wordle Game - CLI
//!
//! Play Wordle in a TUI or on plain stdin/stdout, or check a single guess.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{check_guess, run_simple},
    core::Word,
    game::GameEngine,
    output::print_check_result,
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for target selection, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Play against this word instead of a random one
    #[arg(short, long, global = true)]
    target: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the feedback a guess would get against a target
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => Dictionary::embedded(),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list '{path}'"))?;
            Dictionary::from_words(words)
        }
    };

    if dictionary.is_empty() {
        bail!("Word list '{wordlist}' contains no five-letter words");
    }
    info!(words = dictionary.len(), wordlist, "dictionary loaded");
    Ok(dictionary)
}

/// Pick the first game's target: `--target` if given, otherwise random
fn pick_target(cli: &Cli, dictionary: &Dictionary, rng: &mut StdRng) -> Result<Word> {
    if let Some(text) = &cli.target {
        return Word::new(text.as_str()).with_context(|| format!("Invalid target '{text}'"));
    }
    dictionary
        .choose_target(rng)
        .cloned()
        .context("Dictionary is empty")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if let Some(Commands::Check { guess, target }) = &cli.command {
        let result = check_guess(guess, target)?;
        print_check_result(&result);
        return Ok(());
    }

    let dictionary = load_dictionary(&cli.wordlist)?;
    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let target = pick_target(&cli, &dictionary, &mut rng)?;

    // Default to Play mode if no command given
    match cli.command {
        Some(Commands::Simple) => {
            let mut engine = GameEngine::new(target, &dictionary);
            run_simple(&mut engine).map_err(|e| anyhow::anyhow!(e))
        }
        _ => run_play_command(target, &dictionary, rng),
    }
}

fn run_play_command(target: Word, dictionary: &Dictionary, rng: StdRng) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(target, dictionary, rng);
    run_tui(app)
}
