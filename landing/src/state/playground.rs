//! Playground widget state: editable buffer plus one analysis cycle at a time.
//!
//! DESIGN
//! ======
//! The loading flag and the held result live in one `AnalysisPhase`, so the
//! widget can only ever be idle, loading, failed, or showing a report.
//! Every submission takes a ticket with a fresh sequence number; a settlement
//! carrying anything but the latest number is dropped, which makes
//! overlapping clicks resolve as last-issued-wins.
//!
//! `run_analysis` drives a full cycle against any [`PlaygroundStore`] and any
//! request future, so the component and the tests share the same code path.

#[cfg(test)]
#[path = "playground_test.rs"]
mod playground_test;

use std::cell::RefCell;
use std::future::Future;

use leptos::prelude::{RwSignal, Update};

use crate::net::ApiError;
use crate::net::types::{AnalysisReport, AnalysisRequest, AnalysisResult};

/// Snippet loaded into the editor on mount.
pub const SAMPLE_CODE: &str = "const greet = (name) => {\n  const el = document.getElementById('app')\n  // Warning: using innerHTML\n  el.innerHTML = `Hello ${name}`\n}\n";

/// Where the widget is in its request cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    /// Waiting on the submission with this sequence number.
    Loading { seq: u64 },
    Settled(AnalysisResult),
}

/// What the output pane should show. Pure projection of [`PlaygroundState`].
#[derive(Clone, Debug, PartialEq)]
pub enum PlaygroundView {
    Idle,
    Loading,
    Error(String),
    Report(AnalysisReport),
}

/// A submission that has cleared the previous result and is ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisTicket {
    pub seq: u64,
    pub request: AnalysisRequest,
}

/// State owned by one playground instance.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaygroundState {
    pub code: String,
    pub phase: AnalysisPhase,
    last_seq: u64,
}

impl Default for PlaygroundState {
    fn default() -> Self {
        Self::new(SAMPLE_CODE)
    }
}

impl PlaygroundState {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into(), phase: AnalysisPhase::Idle, last_seq: 0 }
    }

    /// Replace the buffer verbatim. Leaves the phase alone.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.code = text.into();
    }

    /// Clear any held result, enter loading, and hand back the request to send.
    pub fn begin_analysis(&mut self) -> AnalysisTicket {
        self.last_seq += 1;
        let seq = self.last_seq;
        self.phase = AnalysisPhase::Loading { seq };
        AnalysisTicket { seq, request: AnalysisRequest::new(self.code.clone()) }
    }

    /// Record the outcome of submission `seq`.
    ///
    /// Returns `false` (and changes nothing) when a newer submission has been
    /// issued since.
    pub fn settle(&mut self, seq: u64, outcome: Result<AnalysisResult, ApiError>) -> bool {
        if seq != self.last_seq {
            return false;
        }
        let result = outcome.unwrap_or_else(|err| AnalysisResult::Error(err.to_string()));
        self.phase = AnalysisPhase::Settled(result);
        true
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, AnalysisPhase::Loading { .. })
    }

    /// The held result, if the latest submission has settled.
    #[must_use]
    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            AnalysisPhase::Settled(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn view(&self) -> PlaygroundView {
        match &self.phase {
            AnalysisPhase::Idle => PlaygroundView::Idle,
            AnalysisPhase::Loading { .. } => PlaygroundView::Loading,
            AnalysisPhase::Settled(AnalysisResult::Error(message)) => PlaygroundView::Error(message.clone()),
            AnalysisPhase::Settled(AnalysisResult::Report(report)) => PlaygroundView::Report(report.clone()),
        }
    }
}

/// Somewhere a [`PlaygroundState`] lives.
///
/// `modify` returns `None` once the store is gone (e.g. the owning component
/// was unmounted), which ends the cycle without writing.
pub trait PlaygroundStore {
    fn modify<R>(&self, f: impl FnOnce(&mut PlaygroundState) -> R) -> Option<R>;
}

impl PlaygroundStore for RwSignal<PlaygroundState> {
    fn modify<R>(&self, f: impl FnOnce(&mut PlaygroundState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl PlaygroundStore for RefCell<PlaygroundState> {
    fn modify<R>(&self, f: impl FnOnce(&mut PlaygroundState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: PlaygroundStore + ?Sized> PlaygroundStore for &T {
    fn modify<R>(&self, f: impl FnOnce(&mut PlaygroundState) -> R) -> Option<R> {
        (**self).modify(f)
    }
}

/// Start one analysis cycle.
///
/// The previous result is cleared and the loading phase entered before this
/// function returns; the returned future awaits `send` and settles. Settling
/// always leaves the widget out of the loading phase unless a newer
/// submission is still outstanding.
pub fn run_analysis<S, F, Fut>(store: S, send: F) -> impl Future<Output = ()>
where
    S: PlaygroundStore,
    F: FnOnce(AnalysisRequest) -> Fut,
    Fut: Future<Output = Result<AnalysisResult, ApiError>>,
{
    let pending = store
        .modify(PlaygroundState::begin_analysis)
        .map(|ticket| (ticket.seq, send(ticket.request)));
    async move {
        let Some((seq, request)) = pending else {
            return;
        };
        let outcome = request.await;
        let _ = store.modify(|state| state.settle(seq, outcome));
    }
}
