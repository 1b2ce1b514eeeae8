//! Turn history store
//!
//! Ordered, append-only log of submitted guesses. The only mutation ever
//! allowed after an append is cycling tile states on the most recent turn,
//! which is how the coloring phase records the puzzle's feedback. There is no
//! deletion; the store only grows until the session is reset.

use crate::core::{GuessError, MAX_ATTEMPTS, Turn, WORD_LENGTH};
use std::fmt;

/// Error type for rejected appends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    InvalidGuess(GuessError),
    AttemptsExhausted,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(e) => write!(f, "{e}"),
            Self::AttemptsExhausted => {
                write!(f, "All {MAX_ATTEMPTS} attempts have been used")
            }
        }
    }
}

impl std::error::Error for HistoryError {}

impl From<GuessError> for HistoryError {
    fn from(e: GuessError) -> Self {
        Self::InvalidGuess(e)
    }
}

/// Append-only log of turns, last element's tiles mutable until the next append
#[derive(Debug, Default, Clone)]
pub struct History {
    turns: Vec<Turn>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.turns.len() >= MAX_ATTEMPTS
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Append a submitted guess as a new turn with all tiles `Absent`
    ///
    /// Returns the index of the new turn.
    ///
    /// # Errors
    /// Rejects words that are not exactly [`WORD_LENGTH`] letters and appends
    /// past [`MAX_ATTEMPTS`].
    pub fn append(&mut self, word: &str) -> Result<usize, HistoryError> {
        if self.is_full() {
            return Err(HistoryError::AttemptsExhausted);
        }

        let turn = Turn::new(word)?;
        self.turns.push(turn);
        Ok(self.turns.len() - 1)
    }

    /// Cycle one tile's feedback state on the most recent turn
    ///
    /// Only the last turn is editable and only positions within the word.
    /// Returns whether the cycle was applied; anything else is a no-op.
    pub fn cycle_tile(&mut self, turn_index: usize, tile_index: usize) -> bool {
        if self.turns.is_empty() || turn_index != self.turns.len() - 1 {
            return false;
        }
        if tile_index >= WORD_LENGTH {
            return false;
        }

        // Index checked above; last() is non-empty
        if let Some(turn) = self.turns.last_mut()
            && let Some(tile) = turn.tiles.get_mut(tile_index)
        {
            tile.state = tile.state.cycle();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;

    #[test]
    fn append_returns_index() {
        let mut history = History::new();
        assert_eq!(history.append("CRANE").unwrap(), 0);
        assert_eq!(history.append("SLATE").unwrap(), 1);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn append_rejects_short_word() {
        let mut history = History::new();
        assert!(matches!(
            history.append("CAT"),
            Err(HistoryError::InvalidGuess(GuessError::InvalidLength(3)))
        ));
        assert!(history.is_empty());
    }

    #[test]
    fn append_respects_attempt_budget() {
        let mut history = History::new();
        for _ in 0..MAX_ATTEMPTS {
            history.append("CRANE").unwrap();
        }
        assert!(history.is_full());
        assert_eq!(
            history.append("SLATE"),
            Err(HistoryError::AttemptsExhausted)
        );
        assert_eq!(history.len(), MAX_ATTEMPTS);
    }

    #[test]
    fn cycle_tile_only_on_last_turn() {
        let mut history = History::new();
        history.append("CRANE").unwrap();
        history.append("SLATE").unwrap();

        assert!(!history.cycle_tile(0, 0));
        assert_eq!(history.turns()[0].tiles[0].state, LetterState::Absent);

        assert!(history.cycle_tile(1, 0));
        assert_eq!(history.turns()[1].tiles[0].state, LetterState::Present);
    }

    #[test]
    fn cycle_tile_rejects_out_of_range_index() {
        let mut history = History::new();
        history.append("CRANE").unwrap();

        assert!(!history.cycle_tile(0, WORD_LENGTH));
        assert!(!history.cycle_tile(5, 0));
        assert!(history.turns()[0]
            .tiles
            .iter()
            .all(|t| t.state == LetterState::Absent));
    }

    #[test]
    fn cycle_tile_on_empty_history_is_noop() {
        let mut history = History::new();
        assert!(!history.cycle_tile(0, 0));
    }

    #[test]
    fn cycle_tile_three_times_restores() {
        let mut history = History::new();
        history.append("CRANE").unwrap();

        for _ in 0..3 {
            assert!(history.cycle_tile(0, 2));
        }
        assert_eq!(history.turns()[0].tiles[2].state, LetterState::Absent);
    }

    #[test]
    fn cycle_tile_leaves_other_tiles_alone() {
        let mut history = History::new();
        history.append("CRANE").unwrap();
        history.cycle_tile(0, 1);

        let states: Vec<LetterState> =
            history.turns()[0].tiles.iter().map(|t| t.state).collect();
        assert_eq!(states[1], LetterState::Present);
        for (i, state) in states.iter().enumerate() {
            if i != 1 {
                assert_eq!(*state, LetterState::Absent);
            }
        }
    }
}
