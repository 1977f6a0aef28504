//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Every word is normalized to upper case; entries that are not purely
//! alphabetic are skipped.

use std::fs;
use std::io;
use std::path::Path;

/// Trim and upper-case `raw`, rejecting empty or non-alphabetic entries
///
/// # Examples
/// ```
/// use lingo_trainer::wordlists::loader::normalize_word;
///
/// assert_eq!(normalize_word("  baard "), Some("BAARD".to_string()));
/// assert_eq!(normalize_word("b4ard"), None);
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(trimmed.to_uppercase())
}

/// Load words from a file, one word per line
///
/// Returns the valid words, skipping blank and invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize_word).collect())
}

/// Convert embedded string slice to a normalized word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize_word(s)).collect()
}
