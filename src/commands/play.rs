//! Interactive play mode
//!
//! Text-based game loop over the application service.

use crate::core::{GameError, GameId, GameStatus, Progress};
use crate::output::display::{print_games, print_progress};
use crate::repository::InMemoryGameRepository;
use crate::service::GameService;
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayInput {
    Quit,
    /// Start the next round, or a new game after elimination
    Next,
    Progress,
    Games,
    Help,
    Guess(String),
}

impl PlayInput {
    /// Interpret one line of input; anything that is not a command is a guess
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(match trimmed.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "next" | "n" | "new" => Self::Next,
            "progress" | "p" => Self::Progress,
            "games" | "g" => Self::Games,
            "help" | "h" | "?" => Self::Help,
            _ => Self::Guess(trimmed.to_string()),
        })
    }
}

/// Run the interactive game loop on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure or when the word list cannot supply a
/// word for the next round.
pub fn run_play(words: WordList, json: bool) -> Result<()> {
    let mut service = GameService::new(InMemoryGameRepository::new(), words);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                        L I N G O                             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut id = start_game(&mut service, json)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", ">".bright_cyan().bold());
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line.context("failed to read input")?;

        let Some(input) = PlayInput::parse(&line) else {
            continue;
        };

        match input {
            PlayInput::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            PlayInput::Help => print_help(),
            PlayInput::Games => match service.all_games() {
                Ok(games) => print_games(&games),
                Err(e) => println!("{}", e.to_string().red()),
            },
            PlayInput::Progress => show(&service.progress(id)?, json)?,
            PlayInput::Next => {
                if service.progress(id)?.status == GameStatus::Eliminated {
                    id = start_game(&mut service, json)?;
                } else {
                    report(service.start_new_round(id), json)?;
                }
            }
            PlayInput::Guess(attempt) => {
                let progress = report(service.guess(id, &attempt), json)?;
                match progress.map(|p| p.status) {
                    Some(GameStatus::WaitingForRound) => {
                        println!("{}", "🎉 Correct! Type 'next' for the next round.".green().bold());
                    }
                    Some(GameStatus::Eliminated) => {
                        println!(
                            "{}",
                            "❌ Out of attempts, you are eliminated. Type 'next' for a new game."
                                .red()
                                .bold()
                        );
                    }
                    _ => {}
                }
            }
        }
    }
}

fn start_game(
    service: &mut GameService<InMemoryGameRepository, WordList>,
    json: bool,
) -> Result<GameId> {
    let id = service.start_game().id;
    println!("{}", format!("🔄 Game {id} started").bright_cyan());
    let progress = service
        .start_new_round(id)
        .context("failed to start the first round")?;
    show(&progress, json)?;
    Ok(id)
}

/// Show the progress, or the rule violation as a message
///
/// Client errors are part of normal play; anything else aborts.
fn report(result: Result<Progress, GameError>, json: bool) -> Result<Option<Progress>> {
    match result {
        Ok(progress) => {
            show(&progress, json)?;
            Ok(Some(progress))
        }
        Err(e) if e.is_client_error() => {
            println!("{}", format!("⚠ {e}").yellow());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn show(progress: &Progress, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(progress).context("failed to serialize progress")?
        );
    } else {
        print_progress(progress);
    }
    Ok(())
}

fn print_help() {
    println!("Guess the word. The first letter is given; every round the word grows");
    println!("by one letter (5, 6, 7, then back to 5). You have 5 attempts per round.\n");
    println!(
        "  {} right place   {} elsewhere in the word   {} not in the word",
        " A ".black().on_green(),
        " A ".black().on_yellow(),
        " A ".white().on_bright_black()
    );
    println!("\nCommands: 'next' next round / new game, 'progress', 'games', 'help', 'quit'\n");
}
