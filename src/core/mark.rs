//! Per-letter classification of an attempt

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single letter of an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mark {
    /// Letter is in the word at this position
    Correct,
    /// Letter is in the word at another position
    Present,
    /// Letter is not (or no longer) available in the word
    Absent,
    /// Attempt had the wrong length and carries no letter information
    Invalid,
}

impl Mark {
    /// Upper-case label used at the presentation boundary
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Correct => "CORRECT",
            Self::Present => "PRESENT",
            Self::Absent => "ABSENT",
            Self::Invalid => "INVALID",
        }
    }

    /// Single-character code: `+` correct, `?` present, `-` absent, `x` invalid
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => '+',
            Self::Present => '?',
            Self::Absent => '-',
            Self::Invalid => 'x',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
