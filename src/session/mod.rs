//! Turn lifecycle: history store, phase state machine, request pipeline
//!
//! This is the core of the assistant. One `Session` value owns everything for
//! a single puzzle; the surfaces (TUI, simple mode) drive it exclusively
//! through `Action` dispatch and periodic polling.

mod history;
mod machine;
mod pipeline;

#[cfg(test)]
pub(crate) mod testing;

pub use history::{History, HistoryError};
pub use machine::{Action, Phase, Session};
pub use pipeline::{Launch, RequestPipeline, Resolution};
