//! Per-letter feedback states and the keyboard-hint derivation
//!
//! A letter's feedback forms a closed vocabulary: `Empty` (nothing entered),
//! `Absent` (gray), `Present` (yellow), `Correct` (green). During the coloring
//! phase the user cycles a tile through `Absent -> Present -> Correct` and back;
//! `Empty` only appears on provisional typing-row tiles and never in history.

use crate::core::Turn;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Feedback state for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterState {
    Empty,
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Advance along the coloring cycle `Absent -> Present -> Correct -> Absent`
    ///
    /// `Empty` is not part of the cycle and maps to itself.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Absent => Self::Present,
            Self::Present => Self::Correct,
            Self::Correct => Self::Absent,
            Self::Empty => Self::Empty,
        }
    }

    /// Merge rank for keyboard hints: `Correct > Present > Absent > Empty`
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }
}

/// A single grid cell: a letter plus its feedback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    #[serde(rename = "char")]
    pub ch: char,
    pub state: LetterState,
}

impl Tile {
    #[must_use]
    pub const fn new(ch: char, state: LetterState) -> Self {
        Self { ch, state }
    }
}

/// Compute the best-known state for every letter seen so far
///
/// Walks the full history and keeps, per letter, the highest-ranked state
/// under `Correct > Present > Absent`. Letters that never occurred are simply
/// not in the map. Recomputed on demand; a pure function of history.
#[must_use]
pub fn letter_hints(history: &[Turn]) -> FxHashMap<char, LetterState> {
    let mut hints: FxHashMap<char, LetterState> = FxHashMap::default();

    for turn in history {
        for tile in &turn.tiles {
            let entry = hints.entry(tile.ch).or_insert(tile.state);
            if tile.state.rank() > entry.rank() {
                *entry = tile.state;
            }
        }
    }

    hints
}
