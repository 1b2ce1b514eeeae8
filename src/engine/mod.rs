//! Suggestion-engine boundary
//!
//! The engine is an opaque external collaborator: given the turn history it
//! returns an ordered list of `{word, reasoning}` suggestions, or fails. Its
//! internal scoring strategy is not this crate's concern. The trait exists so
//! the session core can be driven by a scripted engine in tests.

mod http;

pub use http::{DEFAULT_ENGINE_URL, HttpSuggestionEngine};

use crate::core::Turn;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A candidate next guess with a short rationale
///
/// Produced by the engine, or by the fixed opener/sentinel constructors.
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub reasoning: String,
}

impl Suggestion {
    #[must_use]
    pub fn new(word: impl Into<String>, reasoning: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            reasoning: reasoning.into(),
        }
    }
}

/// Failure modes at the engine boundary
///
/// Every variant is recoverable: the session surfaces an error sentinel and
/// returns to typing. Nothing here is allowed to crash the session.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("engine returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed engine response: {0}")]
    Malformed(String),

    #[error("suggestion task ended without reporting")]
    TaskLost,
}

/// External source of next-guess suggestions
#[async_trait]
pub trait SuggestionEngine: Send + Sync {
    /// Ask the engine for next-guess suggestions given the full history
    ///
    /// Receives a read-only snapshot; the caller cancels by dropping the
    /// returned future.
    ///
    /// # Errors
    /// Returns `EngineError` on transport failure, non-success status, or a
    /// response that does not match the expected shape.
    async fn suggest(&self, history: &[Turn]) -> Result<Vec<Suggestion>, EngineError>;
}

/// Pre-seeded opening suggestions shown before any guess is made
///
/// Fixed strategy picks, so the user has guidance without a network call.
#[must_use]
pub fn openers() -> Vec<Suggestion> {
    vec![
        Suggestion::new(
            "SALET",
            "Maximizes entropy. Tests high-frequency letters (S, A, L, E, T) \
             to statistically eliminate the most incorrect answers.",
        ),
        Suggestion::new(
            "CRANE",
            "Classic bot favorite. Offers an excellent balance of common \
             vowels (A, E) and consonants (C, R, N) in optimal positions.",
        ),
        Suggestion::new(
            "TRACE",
            "Strong positional opener. Helps identify common consonant \
             clusters early, often leaving manageable patterns.",
        ),
    ]
}

/// Terminal sentinel shown when the last guess came back all green
#[must_use]
pub fn win_sentinel() -> Suggestion {
    Suggestion::new("WINNER!", "Great job! You solved the puzzle.")
}

/// Terminal sentinel shown when the attempt budget is exhausted
#[must_use]
pub fn exhausted_sentinel() -> Suggestion {
    Suggestion::new("GAME OVER", "Better luck next time.")
}

/// Recoverable-failure sentinel installed when a request fails
#[must_use]
pub fn error_sentinel() -> Suggestion {
    Suggestion::new("ERROR", "Suggestion engine error. Try again.")
}
