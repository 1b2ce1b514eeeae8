//! Wordle Oracle
//!
//! A Wordle assistant: you play the puzzle wherever you like, enter each
//! guess and the feedback colors it produced, and an external suggestion
//! engine proposes your next guesses. The crate's core is the turn lifecycle
//! (typing, coloring, analyzing) and the cancellable request pipeline that
//! feeds it; the engine's own scoring strategy is out of scope.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_oracle::core::{LetterState, Turn};
//!
//! let mut turn = Turn::new("crane").unwrap();
//! assert_eq!(turn.tiles[0].state, LetterState::Absent);
//!
//! // Mark the first letter yellow, as the puzzle reported
//! turn.tiles[0].state = turn.tiles[0].state.cycle();
//! assert_eq!(turn.tiles[0].state, LetterState::Present);
//! ```

// Core domain types
pub mod core;

// Turn lifecycle: history, phase machine, request pipeline
pub mod session;

// External suggestion-engine boundary
pub mod engine;

// Raw key events -> state-machine actions
pub mod input;

// Command implementations
pub mod commands;

// Interactive TUI interface
pub mod interactive;
