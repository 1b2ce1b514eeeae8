//! A single submitted guess and its per-tile feedback

use crate::core::{LetterState, Tile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed guess length
pub const WORD_LENGTH: usize = 5;

/// Attempt budget per puzzle
pub const MAX_ATTEMPTS: usize = 6;

/// Error type for invalid guess words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Guess must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Guess must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for GuessError {}

/// One submitted guess: the word plus one tile per position
///
/// Created with every tile defaulted to `Absent`. Tiles are mutated in place
/// while the turn is the most recent one and the session is coloring; frozen
/// once the next turn is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub word: String,
    pub tiles: Vec<Tile>,
}

impl Turn {
    /// Create a turn from a submitted guess, all tiles `Absent`
    ///
    /// # Errors
    /// Returns `GuessError` if the word is not exactly [`WORD_LENGTH`] ASCII
    /// letters.
    pub fn new(word: impl Into<String>) -> Result<Self, GuessError> {
        let word: String = word.into().to_uppercase();

        if word.len() != WORD_LENGTH {
            return Err(GuessError::InvalidLength(word.len()));
        }
        if !word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(GuessError::InvalidCharacters);
        }

        let tiles = word
            .chars()
            .map(|ch| Tile::new(ch, LetterState::Absent))
            .collect();

        Ok(Self { word, tiles })
    }

    /// True when every tile has been marked `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.tiles.iter().all(|t| t.state == LetterState::Correct)
    }
}
