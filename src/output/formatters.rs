//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::Colorize;

/// Format marks as emoji squares
#[must_use]
pub fn marks_to_emoji(marks: &[Mark]) -> String {
    marks
        .iter()
        .map(|mark| match mark {
            Mark::Correct => '🟩',
            Mark::Present => '🟨',
            Mark::Absent => '⬜',
            Mark::Invalid => '🟥',
        })
        .collect()
}

/// Format marks as their one-character codes, e.g. `++?--`
#[must_use]
pub fn marks_to_codes(marks: &[Mark]) -> String {
    marks.iter().map(|m| m.code()).collect()
}

/// Render the attempt with each letter colored by its mark
///
/// Invalid attempts are shown struck through in red as a whole.
#[must_use]
pub fn colored_attempt(feedback: &Feedback) -> String {
    if !feedback.is_attempt_valid() {
        return feedback.attempt().red().strikethrough().to_string();
    }

    feedback
        .attempt()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, mark)| {
            let tile = format!(" {letter} ");
            match mark {
                Mark::Correct => tile.black().on_green().bold().to_string(),
                Mark::Present => tile.black().on_yellow().bold().to_string(),
                Mark::Absent | Mark::Invalid => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Space out a hint so it lines up with colored tiles
#[must_use]
pub fn spaced_hint(hint: &str) -> String {
    hint.chars().map(|c| format!(" {c} ")).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
