//! Word list statistics
//!
//! Reports which round lengths a word list can supply and how deep each
//! list is.

use crate::config::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::wordlists::WordList;

/// Words available for one length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthStats {
    pub length: usize,
    pub count: usize,
    /// Whether rounds ever ask for this length
    pub playable: bool,
}

/// Summary of a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListStats {
    pub total_words: usize,
    pub by_length: Vec<LengthStats>,
    /// Round lengths with no word; starting such a round fails
    pub missing_lengths: Vec<usize>,
}

impl WordListStats {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_lengths.is_empty()
    }
}

/// Count the words of every length in `words`
#[must_use]
pub fn analyze_word_list(words: &WordList) -> WordListStats {
    let playable = MIN_WORD_LENGTH..=MAX_WORD_LENGTH;

    let by_length = words
        .lengths()
        .into_iter()
        .map(|length| LengthStats {
            length,
            count: words.words_of_length(length).len(),
            playable: playable.contains(&length),
        })
        .collect();

    let missing_lengths = playable
        .clone()
        .filter(|&length| words.words_of_length(length).is_empty())
        .collect();

    WordListStats {
        total_words: words.len(),
        by_length,
        missing_lengths,
    }
}
