//! Lingo Trainer - CLI
//!
//! Play Lingo in the terminal, or let a bot play many games for statistics.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use lingo_trainer::{
    commands::{SimulateConfig, analyze_word_list, run_play, run_simulation},
    logging::init_logging,
    output::{print_simulation_result, print_word_stats},
    wordlists::{WordList, embedded_words, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "lingo",
    about = "Lingo word-guessing trainer: 5, 6 and 7 letter rounds with hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Seed for word selection (random when omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play {
        /// Print progress as JSON instead of a colored board
        #[arg(long)]
        json: bool,
    },

    /// Let a bot play many games and report score statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Stop a game still alive after this many rounds
        #[arg(short = 'r', long, default_value = "30")]
        max_rounds: usize,
    },

    /// Show how many words of each length the word list holds
    Words,
}

/// Load the word list selected with -w
fn load_words(source: &str) -> Result<Vec<String>> {
    match source {
        "embedded" => Ok(embedded_words()),
        path => {
            let words =
                load_from_file(path).with_context(|| format!("failed to read word list {path}"))?;
            if words.is_empty() {
                bail!("word list {path} contains no usable words");
            }
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let words = load_words(&cli.words)?;
    let word_list = match cli.seed {
        Some(seed) => WordList::with_seed(words, seed),
        None => WordList::new(words),
    };
    log::debug!("loaded {} words", word_list.len());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { json: false });

    match command {
        Commands::Play { json } => run_play(word_list, json),
        Commands::Simulate { games, max_rounds } => {
            let config = SimulateConfig {
                max_rounds,
                show_progress: true,
                ..SimulateConfig::new(games, cli.seed.unwrap_or_else(rand::random))
            };
            println!("🎯 Simulating {games} games...");
            let result = run_simulation(&word_list, &config)?;
            print_simulation_result(&result);
            Ok(())
        }
        Commands::Words => {
            print_word_stats(&analyze_word_list(&word_list));
            Ok(())
        }
    }
}
