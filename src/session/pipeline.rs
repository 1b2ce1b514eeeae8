//! Cancellable suggestion-request pipeline
//!
//! At most one request is ever outstanding; that single-request invariant is
//! the entire concurrency discipline. A request runs as a spawned tokio task
//! wrapped in [`Abortable`]; its outcome travels back over an unbounded mpsc
//! channel that the event loop drains with [`RequestPipeline::poll`].
//! Cancelling aborts the task and drops the receiver, so a settlement that
//! races the abort has nowhere to land; cancellation is authoritative.

use crate::core::{MAX_ATTEMPTS, Turn};
use crate::engine::{EngineError, Suggestion, SuggestionEngine};
use futures::future::{AbortHandle, Abortable};
use std::sync::Arc;
use tokio::sync::mpsc;

/// How an analysis round resolved
#[derive(Debug)]
pub enum Resolution {
    /// Last turn was all green; no external call was made
    Win,
    /// Attempt budget spent without a win; no external call was made
    Exhausted,
    /// Engine replied; the new list replaces the old one wholesale
    Success(Vec<Suggestion>),
    /// Engine call failed; recoverable
    Failed(EngineError),
}

/// Outcome of [`RequestPipeline::begin`]
#[derive(Debug)]
pub enum Launch {
    /// Resolved without any external call (win/exhaustion, or misuse)
    Immediate(Resolution),
    /// A request was spawned; watch [`RequestPipeline::poll`]
    InFlight,
}

struct ActiveRequest {
    rx: mpsc::UnboundedReceiver<Result<Vec<Suggestion>, EngineError>>,
    abort: AbortHandle,
}

/// Issues one cancellable engine request at a time
pub struct RequestPipeline {
    engine: Arc<dyn SuggestionEngine>,
    active: Option<ActiveRequest>,
}

impl RequestPipeline {
    #[must_use]
    pub fn new(engine: Arc<dyn SuggestionEngine>) -> Self {
        Self {
            engine,
            active: None,
        }
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.active.is_some()
    }

    /// Start an analysis round for the given history
    ///
    /// Win and exhaustion are evaluated first and resolve immediately with no
    /// external call. Otherwise the engine call is spawned and its outcome
    /// becomes available through [`poll`](Self::poll).
    ///
    /// The state machine locks input during analysis, so `begin` while a
    /// request is outstanding cannot happen through any supported entry
    /// point; it resolves as a failure rather than spawning a second task.
    pub fn begin(&mut self, history: &[Turn]) -> Launch {
        if self.active.is_some() {
            tracing::warn!("begin called while a request is outstanding");
            return Launch::Immediate(Resolution::Failed(EngineError::TaskLost));
        }

        if history.last().is_some_and(Turn::is_win) {
            return Launch::Immediate(Resolution::Win);
        }
        if history.len() >= MAX_ATTEMPTS {
            return Launch::Immediate(Resolution::Exhausted);
        }

        let engine = Arc::clone(&self.engine);
        let snapshot: Vec<Turn> = history.to_vec();
        let (tx, rx) = mpsc::unbounded_channel();
        let (abort, registration) = AbortHandle::new_pair();

        let task = async move {
            let result = engine.suggest(&snapshot).await;
            let _ = tx.send(result);
        };
        tokio::spawn(async move {
            // Aborted task never sends; the dropped sender closes the channel
            let _ = Abortable::new(task, registration).await;
        });

        self.active = Some(ActiveRequest { rx, abort });
        Launch::InFlight
    }

    /// Non-blocking check for the outstanding request's outcome
    ///
    /// Returns at most one resolution and clears the in-flight state when it
    /// does. Returns `None` while the request is still pending, and also
    /// after cancellation (nothing is outstanding anymore).
    pub fn poll(&mut self) -> Option<Resolution> {
        let active = self.active.as_mut()?;

        let resolution = match active.rx.try_recv() {
            Ok(Ok(suggestions)) => Resolution::Success(suggestions),
            Ok(Err(e)) => Resolution::Failed(e),
            Err(mpsc::error::TryRecvError::Empty) => return None,
            // Task dropped its sender without reporting. Analyzing must not
            // be allowed to hang, so surface it as a failure.
            Err(mpsc::error::TryRecvError::Disconnected) => {
                Resolution::Failed(EngineError::TaskLost)
            }
        };

        self.active = None;
        Some(resolution)
    }

    /// Abort the outstanding request, if any
    ///
    /// Returns whether a request was actually cancelled. The receiver is
    /// dropped with the active entry, so a late settlement of the underlying
    /// call is discarded rather than applied.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                active.abort.abort();
                tracing::debug!("suggestion request cancelled");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use crate::session::testing::ScriptedEngine;

    fn colored_turn(word: &str, states: [LetterState; 5]) -> Turn {
        let mut turn = Turn::new(word).unwrap();
        for (tile, state) in turn.tiles.iter_mut().zip(states) {
            tile.state = state;
        }
        turn
    }

    fn all_correct(word: &str) -> Turn {
        colored_turn(word, [LetterState::Correct; 5])
    }

    async fn settle(pipeline: &mut RequestPipeline) -> Resolution {
        for _ in 0..1000 {
            if let Some(resolution) = pipeline.poll() {
                return resolution;
            }
            tokio::task::yield_now().await;
        }
        panic!("pipeline never resolved");
    }

    #[test]
    fn win_resolves_without_external_call() {
        let engine = ScriptedEngine::replying(vec![]);
        let mut pipeline = RequestPipeline::new(engine.clone());

        let history = vec![all_correct("CRANE")];
        let launch = pipeline.begin(&history);

        assert!(matches!(launch, Launch::Immediate(Resolution::Win)));
        assert_eq!(engine.calls(), 0);
        assert!(!pipeline.is_in_flight());
    }

    #[test]
    fn exhaustion_resolves_without_external_call() {
        let engine = ScriptedEngine::replying(vec![]);
        let mut pipeline = RequestPipeline::new(engine.clone());

        let history: Vec<Turn> = (0..MAX_ATTEMPTS)
            .map(|_| Turn::new("CRANE").unwrap())
            .collect();
        let launch = pipeline.begin(&history);

        assert!(matches!(launch, Launch::Immediate(Resolution::Exhausted)));
        assert_eq!(engine.calls(), 0);
    }

    #[test]
    fn win_takes_priority_over_exhaustion() {
        let engine = ScriptedEngine::replying(vec![]);
        let mut pipeline = RequestPipeline::new(engine);

        let mut history: Vec<Turn> = (0..MAX_ATTEMPTS - 1)
            .map(|_| Turn::new("CRANE").unwrap())
            .collect();
        history.push(all_correct("SLATE"));

        assert!(matches!(
            pipeline.begin(&history),
            Launch::Immediate(Resolution::Win)
        ));
    }

    #[tokio::test]
    async fn successful_request_delivers_suggestions() {
        let expected = vec![Suggestion::new("SLATE", "Good coverage.")];
        let engine = ScriptedEngine::replying(expected.clone());
        let mut pipeline = RequestPipeline::new(engine.clone());

        let history = vec![Turn::new("CRANE").unwrap()];
        assert!(matches!(pipeline.begin(&history), Launch::InFlight));
        assert!(pipeline.is_in_flight());

        match settle(&mut pipeline).await {
            Resolution::Success(suggestions) => assert_eq!(suggestions, expected),
            other => panic!("expected success, got {other:?}"),
        }
        assert!(!pipeline.is_in_flight());
        assert_eq!(engine.calls(), 1);
    }

    #[tokio::test]
    async fn failed_request_reports_failure() {
        let engine = ScriptedEngine::failing();
        let mut pipeline = RequestPipeline::new(engine);

        let history = vec![Turn::new("CRANE").unwrap()];
        assert!(matches!(pipeline.begin(&history), Launch::InFlight));

        match settle(&mut pipeline).await {
            Resolution::Failed(EngineError::Malformed(_)) => {}
            other => panic!("expected malformed failure, got {other:?}"),
        }
        assert!(!pipeline.is_in_flight());
    }

    #[tokio::test]
    async fn cancel_discards_result_already_in_the_channel() {
        let engine = ScriptedEngine::replying(vec![Suggestion::new("SLATE", "Coverage.")]);
        let mut pipeline = RequestPipeline::new(engine.clone());

        let history = vec![Turn::new("CRANE").unwrap()];
        assert!(matches!(pipeline.begin(&history), Launch::InFlight));

        // Let the task settle so its reply is buffered before cancel fires
        for _ in 0..50 {
            tokio::task::yield_now().await;
        }
        assert_eq!(engine.calls(), 1);

        assert!(pipeline.cancel());
        assert!(!pipeline.is_in_flight());

        // The buffered reply went down with the receiver
        for _ in 0..10 {
            tokio::task::yield_now().await;
            assert!(pipeline.poll().is_none());
        }
    }

    #[tokio::test]
    async fn cancel_clears_in_flight_and_discards_late_results() {
        let engine = ScriptedEngine::hanging();
        let mut pipeline = RequestPipeline::new(engine);

        let history = vec![Turn::new("CRANE").unwrap()];
        assert!(matches!(pipeline.begin(&history), Launch::InFlight));

        assert!(pipeline.cancel());
        assert!(!pipeline.is_in_flight());

        // Nothing outstanding anymore; poll never produces a stale result
        for _ in 0..10 {
            tokio::task::yield_now().await;
            assert!(pipeline.poll().is_none());
        }

        // Cancelling again is a no-op
        assert!(!pipeline.cancel());
    }

    #[tokio::test]
    async fn begin_while_outstanding_is_rejected() {
        let engine = ScriptedEngine::hanging();
        let mut pipeline = RequestPipeline::new(engine.clone());

        let history = vec![Turn::new("CRANE").unwrap()];
        assert!(matches!(pipeline.begin(&history), Launch::InFlight));

        // Second begin fails immediately and does not spawn another call
        assert!(matches!(
            pipeline.begin(&history),
            Launch::Immediate(Resolution::Failed(EngineError::TaskLost))
        ));
        assert!(pipeline.is_in_flight());
    }
}
