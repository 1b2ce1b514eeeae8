//! Core domain types for the Wordle assistant
//!
//! This module contains the fundamental domain types with zero I/O
//! dependencies. All types here are pure, testable, and serialize to the
//! suggestion-engine wire format.

mod feedback;
mod turn;

pub use feedback::{LetterState, Tile, letter_hints};
pub use turn::{GuessError, MAX_ATTEMPTS, Turn, WORD_LENGTH};
