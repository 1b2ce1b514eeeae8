//! Phase state machine for one puzzle session
//!
//! The session moves through four phases: `Typing` (the guess buffer accepts
//! letters), `Coloring` (the last turn's feedback tiles are editable),
//! `Analyzing` (a suggestion request is in flight, input locked except
//! cancel), and `GameOver` (terminal). A single overloaded advance action
//! drives the forward transitions, so the phase-dependent semantics live in
//! one place instead of being spread across input wiring.

use crate::core::{WORD_LENGTH, Tile, Turn, letter_hints};
use crate::engine::{
    Suggestion, SuggestionEngine, error_sentinel, exhausted_sentinel, openers, win_sentinel,
};
use crate::session::history::History;
use crate::session::pipeline::{Launch, RequestPipeline, Resolution};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long the "not enough letters" notice stays on screen
const NOTICE_TTL: Duration = Duration::from_secs(1);

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Coloring,
    Analyzing,
    GameOver,
}

/// A state-machine action, produced by the input router
///
/// Gating by phase happens here in the machine; the router stays pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Letter entry (typing phase only)
    Char(char),
    /// Remove the last buffered letter (typing phase only)
    Delete,
    /// The overloaded control: submit guess, launch analysis, or cancel
    Advance,
    /// Abort the in-flight request (analyzing phase only)
    Cancel,
    /// Cycle one tile's feedback on the last turn (coloring phase only)
    CycleTile(usize),
    /// Copy the top suggestion into the guess buffer (typing phase only)
    AdoptSuggestion,
    /// Discard everything and start a fresh puzzle
    NewGame,
    /// Leave the application; handled by the surface, not the session
    Quit,
}

struct Notice {
    text: String,
    expires_at: Instant,
}

/// All state for one puzzle session
///
/// Exclusively owned by its surface (TUI or simple mode); every mutation goes
/// through [`apply`](Session::apply) or [`poll`](Session::poll).
pub struct Session {
    history: History,
    buffer: String,
    phase: Phase,
    suggestions: Vec<Suggestion>,
    pipeline: RequestPipeline,
    notice: Option<Notice>,
}

impl Session {
    /// Start a session pre-seeded with the fixed opening suggestions
    #[must_use]
    pub fn new(engine: Arc<dyn SuggestionEngine>) -> Self {
        Self {
            history: History::new(),
            buffer: String::new(),
            phase: Phase::Typing,
            suggestions: openers(),
            pipeline: RequestPipeline::new(engine),
            notice: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        self.history.turns()
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.pipeline.is_in_flight()
    }

    /// The transient validation notice, if one is showing
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }

    /// Best-known feedback state per letter, for keyboard hinting
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<char, crate::core::LetterState> {
        letter_hints(self.history.turns())
    }

    /// Dispatch one action against the current phase
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Char(c) => self.push_char(c),
            Action::Delete => self.delete_char(),
            Action::Advance => self.advance(now),
            Action::Cancel => self.cancel(),
            Action::CycleTile(i) => self.cycle_tile(i),
            Action::AdoptSuggestion => self.adopt_suggestion(),
            Action::NewGame => self.reset(),
            Action::Quit => {}
        }
    }

    /// Drive time-dependent state: notice expiry and request resolution
    ///
    /// Call from the event loop on every tick. Applies at most the single
    /// outstanding request resolution.
    pub fn poll(&mut self, now: Instant) {
        if self
            .notice
            .as_ref()
            .is_some_and(|n| now >= n.expires_at)
        {
            self.notice = None;
        }

        if self.phase == Phase::Analyzing
            && let Some(resolution) = self.pipeline.poll()
        {
            self.resolve(resolution);
        }
    }

    /// Discard all session state and re-seed the opening suggestions
    pub fn reset(&mut self) {
        self.pipeline.cancel();
        self.history = History::new();
        self.buffer.clear();
        self.phase = Phase::Typing;
        self.suggestions = openers();
        self.notice = None;
    }

    fn push_char(&mut self, c: char) {
        if self.phase != Phase::Typing || self.history.is_full() {
            return;
        }
        if !c.is_ascii_alphabetic() {
            return;
        }
        if self.buffer.len() < WORD_LENGTH {
            self.buffer.push(c.to_ascii_uppercase());
        }
    }

    fn delete_char(&mut self) {
        if self.phase == Phase::Typing {
            self.buffer.pop();
        }
    }

    fn advance(&mut self, now: Instant) {
        match self.phase {
            Phase::Typing => self.submit_guess(now),
            Phase::Coloring => self.launch_analysis(),
            Phase::Analyzing => self.cancel(),
            Phase::GameOver => {}
        }
    }

    /// Typing -> Coloring: append the buffered guess with all-gray tiles
    fn submit_guess(&mut self, now: Instant) {
        if self.buffer.len() != WORD_LENGTH {
            self.notice = Some(Notice {
                text: "Not enough letters".to_string(),
                expires_at: now + NOTICE_TTL,
            });
            return;
        }

        match self.history.append(&self.buffer) {
            Ok(_) => {
                self.buffer.clear();
                self.phase = Phase::Coloring;
            }
            Err(e) => {
                // Unreachable through the supported transitions; surface it
                // as a notice rather than corrupting state.
                self.notice = Some(Notice {
                    text: e.to_string(),
                    expires_at: now + NOTICE_TTL,
                });
            }
        }
    }

    /// Coloring -> Analyzing: the tile states are final, query the engine
    fn launch_analysis(&mut self) {
        self.phase = Phase::Analyzing;
        match self.pipeline.begin(self.history.turns()) {
            Launch::Immediate(resolution) => self.resolve(resolution),
            Launch::InFlight => {}
        }
    }

    fn cancel(&mut self) {
        if self.phase == Phase::Analyzing && self.pipeline.cancel() {
            // Suggestions and history stay exactly as they were
            self.phase = Phase::Typing;
        }
    }

    fn cycle_tile(&mut self, tile_index: usize) {
        if self.phase != Phase::Coloring || self.history.is_empty() {
            return;
        }
        self.history.cycle_tile(self.history.len() - 1, tile_index);
    }

    fn adopt_suggestion(&mut self) {
        if self.phase != Phase::Typing {
            return;
        }
        if let Some(top) = self.suggestions.first()
            && top.word.len() == WORD_LENGTH
            && top.word.chars().all(|c| c.is_ascii_alphabetic())
        {
            self.buffer = top.word.to_uppercase();
        }
    }

    fn resolve(&mut self, resolution: Resolution) {
        match resolution {
            Resolution::Win => {
                self.suggestions = vec![win_sentinel()];
                self.phase = Phase::GameOver;
            }
            Resolution::Exhausted => {
                self.suggestions = vec![exhausted_sentinel()];
                self.phase = Phase::GameOver;
            }
            Resolution::Success(suggestions) => {
                self.suggestions = suggestions;
                self.phase = Phase::Typing;
            }
            Resolution::Failed(e) => {
                tracing::warn!(error = %e, "suggestion request failed");
                self.suggestions = vec![error_sentinel()];
                self.phase = Phase::Typing;
            }
        }
    }

    /// Provisional tiles for the row currently being typed
    #[must_use]
    pub fn typing_row(&self) -> Vec<Tile> {
        self.buffer
            .chars()
            .map(|c| Tile::new(c, crate::core::LetterState::Empty))
            .collect()
    }
}
