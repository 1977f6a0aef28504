//! Display functions for game state and command results

use super::formatters::{
    colored_attempt, create_progress_bar, marks_to_codes, marks_to_emoji, spaced_hint,
};
use crate::commands::{SimulationResult, WordListStats};
use crate::core::{Feedback, GameStatus, GameSummary, Progress};
use colored::Colorize;

fn colored_status(status: GameStatus) -> String {
    match status {
        GameStatus::WaitingForRound => status.label().yellow().to_string(),
        GameStatus::Playing => status.label().green().to_string(),
        GameStatus::Eliminated => status.label().red().bold().to_string(),
    }
}

/// Mark column of the board: emoji on color terminals, codes such as `++?--` otherwise
fn mark_column(feedback: &Feedback) -> String {
    if colored::control::SHOULD_COLORIZE.should_colorize() {
        marks_to_emoji(feedback.marks())
    } else {
        marks_to_codes(feedback.marks())
    }
}

/// Print the board of the current round
pub fn print_progress(progress: &Progress) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Game {}  Round {}  Score {}  {}",
        progress.id,
        progress.round_number,
        progress.score.to_string().bright_yellow().bold(),
        colored_status(progress.status)
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, feedback) in progress.feedback_history.iter().enumerate() {
        println!(
            "  {}. {}  {}",
            (i + 1).to_string().bright_black(),
            colored_attempt(feedback),
            mark_column(feedback)
        );
    }

    if progress.status == GameStatus::Playing {
        println!(
            "\n  Hint: {}   ({} attempts left)\n",
            spaced_hint(&progress.current_hint).bold(),
            progress.attempts_left
        );
    } else {
        println!();
    }
}

/// Print a listing of games
pub fn print_games(games: &[GameSummary]) {
    println!("\n{}", "Games".bright_cyan().bold());
    for game in games {
        println!(
            "  #{:<4} {:<20} score {:>4}  rounds {}",
            game.id,
            colored_status(game.status),
            game.score,
            game.rounds_played
        );
    }
    println!();
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Average score:    {}",
        format!("{:.1}", result.average_score).bright_yellow().bold()
    );
    println!("   Best score:       {}", result.best_score.to_string().green());
    println!("   Avg rounds won:   {:.2}", result.average_rounds_won);
    println!("   Eliminated:       {}", result.eliminated);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Rounds won:".bright_cyan().bold());
    for (&rounds, &count) in &result.rounds_distribution {
        let pct = if result.total_games == 0 {
            0.0
        } else {
            (count as f64 / result.total_games as f64) * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {rounds:>3}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print word list statistics
pub fn print_word_stats(stats: &WordListStats) {
    println!("\n{}", "Word list".bright_cyan().bold());
    println!("   Total words: {}", stats.total_words);

    for entry in &stats.by_length {
        let line = format!("   {:>2} letters: {:>6}", entry.length, entry.count);
        if entry.playable {
            println!("{line}");
        } else {
            println!("{}  (never asked for)", line.bright_black());
        }
    }

    if stats.is_complete() {
        println!("\n{}", "✅ Every round length is covered".green());
    } else {
        let missing: Vec<String> = stats.missing_lengths.iter().map(ToString::to_string).collect();
        println!(
            "\n{}",
            format!("❌ No words of length {}", missing.join(", ")).red().bold()
        );
    }
}
