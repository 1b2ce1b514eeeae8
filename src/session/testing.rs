//! Scripted suggestion engine for session tests

use crate::core::Turn;
use crate::engine::{EngineError, Suggestion, SuggestionEngine};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Test engine with a canned outcome and a call counter
pub(crate) struct ScriptedEngine {
    calls: AtomicUsize,
    outcome: ScriptedOutcome,
}

enum ScriptedOutcome {
    Reply(Vec<Suggestion>),
    Fail,
    Hang,
}

impl ScriptedEngine {
    /// Engine that replies immediately with the given suggestions
    pub(crate) fn replying(suggestions: Vec<Suggestion>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: ScriptedOutcome::Reply(suggestions),
        })
    }

    /// Engine whose every call fails with a malformed-response error
    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: ScriptedOutcome::Fail,
        })
    }

    /// Engine whose calls never resolve
    pub(crate) fn hanging() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: ScriptedOutcome::Hang,
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuggestionEngine for ScriptedEngine {
    async fn suggest(&self, _history: &[Turn]) -> Result<Vec<Suggestion>, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            ScriptedOutcome::Reply(suggestions) => Ok(suggestions.clone()),
            ScriptedOutcome::Fail => Err(EngineError::Malformed("not a suggestion list".into())),
            ScriptedOutcome::Hang => std::future::pending().await,
        }
    }
}
