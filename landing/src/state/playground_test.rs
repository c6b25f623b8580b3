use super::*;
use crate::net::types::{Finding, Step};
use futures::channel::oneshot;
use futures::executor::block_on;
use std::pin::pin;

// =============================================================
// Helpers
// =============================================================

fn empty_report(score: f64) -> AnalysisReport {
    AnalysisReport { score: Some(score), findings: Vec::new(), steps: Vec::new() }
}

fn xss_report() -> AnalysisReport {
    AnalysisReport {
        score: Some(42.0),
        findings: vec![Finding {
            severity: "HIGH".to_owned(),
            title: "XSS".to_owned(),
            line: Some(3),
            description: "innerHTML with user input".to_owned(),
            recommendation: "use textContent".to_owned(),
        }],
        steps: vec![Step { agent: "Scanner".to_owned(), action: "scan".to_owned(), elapsed_ms: 120 }],
    }
}

// =============================================================
// Defaults / edit
// =============================================================

#[test]
fn default_state_is_idle_with_sample_code() {
    let state = PlaygroundState::default();
    assert_eq!(state.code, SAMPLE_CODE);
    assert!(!state.is_loading());
    assert_eq!(state.result(), None);
    assert_eq!(state.view(), PlaygroundView::Idle);
}

#[test]
fn edit_replaces_buffer_verbatim() {
    let mut state = PlaygroundState::default();
    let mut typed = String::new();
    for ch in "fn main() {\n\t\u{1F600}  }".chars() {
        typed.push(ch);
        state.edit(typed.clone());
        assert_eq!(state.code, typed);
    }
    state.edit("");
    assert_eq!(state.code, "");
}

#[test]
fn edit_does_not_touch_result() {
    let mut state = PlaygroundState::default();
    let ticket = state.begin_analysis();
    state.settle(ticket.seq, Ok(AnalysisResult::Report(empty_report(7.0))));
    state.edit("something else");
    assert_eq!(state.view(), PlaygroundView::Report(empty_report(7.0)));
}

// =============================================================
// begin / settle
// =============================================================

#[test]
fn begin_clears_result_and_enters_loading() {
    let mut state = PlaygroundState::new("let a = 1");
    let first = state.begin_analysis();
    state.settle(first.seq, Ok(AnalysisResult::Error("boom".to_owned())));

    let ticket = state.begin_analysis();
    assert!(state.is_loading());
    assert_eq!(state.result(), None);
    assert_eq!(state.view(), PlaygroundView::Loading);
    assert_eq!(ticket.request, AnalysisRequest::new("let a = 1"));
}

#[test]
fn settle_maps_api_error_to_error_record() {
    let mut state = PlaygroundState::default();
    let ticket = state.begin_analysis();
    assert!(state.settle(ticket.seq, Err(ApiError::Transport("Failed to fetch".to_owned()))));
    assert!(!state.is_loading());
    assert_eq!(state.result(), Some(&AnalysisResult::Error("Failed to fetch".to_owned())));
    assert_eq!(state.view(), PlaygroundView::Error("Failed to fetch".to_owned()));
}

#[test]
fn stale_settlement_is_ignored() {
    let mut state = PlaygroundState::default();
    let first = state.begin_analysis();
    let second = state.begin_analysis();

    assert!(!state.settle(first.seq, Ok(AnalysisResult::Report(empty_report(1.0)))));
    assert!(state.is_loading());

    assert!(state.settle(second.seq, Ok(AnalysisResult::Report(empty_report(2.0)))));
    assert_eq!(state.view(), PlaygroundView::Report(empty_report(2.0)));

    assert!(!state.settle(first.seq, Err(ApiError::Transport("late".to_owned()))));
    assert_eq!(state.view(), PlaygroundView::Report(empty_report(2.0)));
}

// =============================================================
// run_analysis
// =============================================================

#[test]
fn run_analysis_marks_loading_before_request_resolves() {
    let store = RefCell::new(PlaygroundState::default());
    let (tx, rx) = oneshot::channel::<Result<AnalysisResult, ApiError>>();

    let cycle = run_analysis(&store, |_req| async move {
        rx.await.unwrap_or(Err(ApiError::Transport("dropped".to_owned())))
    });
    // Synchronous part has already run.
    assert!(store.borrow().is_loading());
    assert_eq!(store.borrow().result(), None);

    block_on(async {
        let mut cycle = pin!(cycle);
        assert!(futures::poll!(cycle.as_mut()).is_pending());
        assert!(store.borrow().is_loading());

        tx.send(Ok(AnalysisResult::Report(xss_report()))).unwrap();
        cycle.await;
    });

    assert!(!store.borrow().is_loading());
    assert_eq!(store.borrow().view(), PlaygroundView::Report(xss_report()));
}

#[test]
fn run_analysis_sends_current_code_as_javascript() {
    let store = RefCell::new(PlaygroundState::new("eval(input)"));
    let seen = RefCell::new(None);
    block_on(run_analysis(&store, |req| {
        *seen.borrow_mut() = Some(req);
        async { Ok(AnalysisResult::Report(empty_report(0.0))) }
    }));
    let req = seen.into_inner().expect("request should be sent");
    assert_eq!(req.code, "eval(input)");
    assert_eq!(req.language, "javascript");
}

#[test]
fn run_analysis_clears_loading_on_failure() {
    let store = RefCell::new(PlaygroundState::default());
    block_on(run_analysis(&store, |_req| async {
        Err(ApiError::Transport("connection refused".to_owned()))
    }));
    let state = store.borrow();
    assert!(!state.is_loading());
    assert_eq!(state.view(), PlaygroundView::Error("connection refused".to_owned()));
}

#[test]
fn run_analysis_clears_loading_on_success() {
    let store = RefCell::new(PlaygroundState::default());
    block_on(run_analysis(&store, |_req| async { Ok(AnalysisResult::Report(empty_report(7.0))) }));
    assert!(!store.borrow().is_loading());
    assert_eq!(store.borrow().view(), PlaygroundView::Report(empty_report(7.0)));
}

#[test]
fn sequential_runs_fully_overwrite() {
    let store = RefCell::new(PlaygroundState::new("same input"));
    block_on(run_analysis(&store, |_req| async { Ok(AnalysisResult::Report(xss_report())) }));
    assert_eq!(store.borrow().view(), PlaygroundView::Report(xss_report()));

    block_on(run_analysis(&store, |_req| async { Err(ApiError::Decode("expected value".to_owned())) }));
    assert_eq!(store.borrow().view(), PlaygroundView::Error("expected value".to_owned()));

    block_on(run_analysis(&store, |_req| async { Ok(AnalysisResult::Report(empty_report(7.0))) }));
    assert_eq!(store.borrow().view(), PlaygroundView::Report(empty_report(7.0)));
}

#[test]
fn overlapping_runs_keep_the_latest_issue() {
    let store = RefCell::new(PlaygroundState::default());
    let (tx_first, rx_first) = oneshot::channel::<Result<AnalysisResult, ApiError>>();
    let (tx_second, rx_second) = oneshot::channel::<Result<AnalysisResult, ApiError>>();

    let first = run_analysis(&store, |_req| async move { rx_first.await.unwrap() });
    let second = run_analysis(&store, |_req| async move { rx_second.await.unwrap() });

    block_on(async {
        let mut first = pin!(first);
        let mut second = pin!(second);
        assert!(futures::poll!(first.as_mut()).is_pending());
        assert!(futures::poll!(second.as_mut()).is_pending());

        tx_second.send(Ok(AnalysisResult::Report(empty_report(2.0)))).unwrap();
        second.await;
        tx_first.send(Ok(AnalysisResult::Report(empty_report(1.0)))).unwrap();
        first.await;
    });

    assert_eq!(store.borrow().view(), PlaygroundView::Report(empty_report(2.0)));
}
