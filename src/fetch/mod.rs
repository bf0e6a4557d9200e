// src/fetch/mod.rs
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use chrono::Local;
use thiserror::Error;

use crate::model::AnalyticsRecord;
use crate::state::AppState;

pub mod source;

pub use source::{AnalyticsSource, HttpAnalyticsSource, SampleAnalyticsSource};

#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("retrieval failed: {0}")]
    Retrieval(String),
    #[error("application identifier is empty")]
    EmptyIdentifier,
}

struct FetchOutcome {
    seq: u64,
    app_id: String,
    result: Result<AnalyticsRecord, FetchError>,
}

/// Runs analytics retrieval off the UI thread.
///
/// Every request is tagged with a monotonically increasing sequence number
/// and only the most recently issued request's outcome is applied, so an
/// overlapping refresh cannot be overwritten by a slower predecessor.
/// Failures never reach the view as errors: the previous record stays on
/// screen and the failure is logged.
pub struct FetchController {
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
    next_seq: u64,
    pending_seq: Option<u64>,
}

impl FetchController {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            next_seq: 0,
            pending_seq: None,
        }
    }

    /// Starts a fetch for `app_id`. Sets `is_loading` before returning.
    pub fn request_analytics(
        &mut self,
        source: &Arc<dyn AnalyticsSource>,
        app_id: &str,
        state: &mut AppState,
    ) {
        let app_id = app_id.trim().to_string();
        if app_id.is_empty() {
            log::warn!("refresh requested without an application identifier");
            state.last_error = Some(FetchError::EmptyIdentifier.to_string());
            return;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending_seq = Some(seq);

        state.is_loading = true;
        state.last_error = None;

        log::info!("fetching analytics for {} (request #{})", app_id, seq);
        let tx = self.tx.clone();
        let source = Arc::clone(source);
        thread::spawn(move || {
            let result = source.fetch_analytics(&app_id);
            // The receiver only disappears on shutdown.
            let _ = tx.send(FetchOutcome { seq, app_id, result });
        });
    }

    /// Drains finished requests. Called once per frame on the UI thread.
    pub fn poll(&mut self, state: &mut AppState) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.apply(outcome, state);
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.pending_seq.is_some()
    }

    fn apply(&mut self, outcome: FetchOutcome, state: &mut AppState) {
        if self.pending_seq != Some(outcome.seq) {
            log::debug!(
                "dropping superseded response #{} for {}",
                outcome.seq,
                outcome.app_id
            );
            return;
        }
        self.pending_seq = None;
        state.is_loading = false;

        match outcome.result {
            Ok(record) => {
                state.record = Some(record);
                state.last_updated = Some(Local::now());
            }
            Err(e) => {
                log::warn!("analytics fetch for {} failed: {}", outcome.app_id, e);
                state.last_error = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::source::sample_record;
    use super::*;
    use crate::projection::{sentiment_slices, severity_slices};

    struct FailingSource;

    impl AnalyticsSource for FailingSource {
        fn fetch_analytics(&self, _app_id: &str) -> Result<AnalyticsRecord, FetchError> {
            Err(FetchError::Retrieval("backend unreachable".to_string()))
        }
    }

    fn wait_until_idle(controller: &mut FetchController, state: &mut AppState) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while controller.is_in_flight() {
            assert!(Instant::now() < deadline, "fetch did not settle in time");
            controller.poll(state);
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn successful_fetch_replaces_the_record() {
        let mut controller = FetchController::new();
        let mut state = AppState::new("com.itau.investimentos");
        let source: Arc<dyn AnalyticsSource> = Arc::new(SampleAnalyticsSource);

        controller.request_analytics(&source, "com.itau.investimentos", &mut state);
        assert!(state.is_loading);

        wait_until_idle(&mut controller, &mut state);
        assert!(!state.is_loading);
        assert!(state.last_error.is_none());
        assert!(state.last_updated.is_some());
        assert_eq!(
            state.record.as_ref().map(|r| r.app_info.version.as_str()),
            Some("2.80.0")
        );
    }

    #[test]
    fn failed_fetch_preserves_the_previous_record() {
        let mut controller = FetchController::new();
        let mut state = AppState::new("com.itau.investimentos");
        state.record = Some(sample_record());
        let source: Arc<dyn AnalyticsSource> = Arc::new(FailingSource);

        controller.request_analytics(&source, "com.itau.investimentos", &mut state);
        assert!(state.is_loading);

        wait_until_idle(&mut controller, &mut state);
        assert!(!state.is_loading);
        assert!(state.last_error.is_some());
        assert_eq!(state.record, Some(sample_record()));
    }

    #[test]
    fn superseded_outcomes_are_dropped() {
        let mut controller = FetchController::new();
        let mut state = AppState::new("com.itau.investimentos");
        controller.next_seq = 2;
        controller.pending_seq = Some(1);
        state.is_loading = true;

        // A slow response from an earlier request arrives after a newer
        // request was issued: it must not be applied.
        let mut stale = sample_record();
        stale.app_info.version = "stale".to_string();
        controller.apply(
            FetchOutcome {
                seq: 0,
                app_id: "com.itau.investimentos".to_string(),
                result: Ok(stale),
            },
            &mut state,
        );
        assert!(state.is_loading);
        assert!(state.record.is_none());

        controller.apply(
            FetchOutcome {
                seq: 1,
                app_id: "com.itau.investimentos".to_string(),
                result: Ok(sample_record()),
            },
            &mut state,
        );
        assert!(!state.is_loading);
        assert_eq!(
            state.record.as_ref().map(|r| r.app_info.version.as_str()),
            Some("2.80.0")
        );
    }

    #[test]
    fn empty_identifier_is_rejected_without_a_request() {
        let mut controller = FetchController::new();
        let mut state = AppState::new("com.itau.investimentos");
        let source: Arc<dyn AnalyticsSource> = Arc::new(SampleAnalyticsSource);

        controller.request_analytics(&source, "   ", &mut state);
        assert!(!controller.is_in_flight());
        assert!(!state.is_loading);
        assert!(state.last_error.is_some());
    }

    #[test]
    fn initial_fetch_feeds_the_overview_projections() {
        let mut controller = FetchController::new();
        let mut state = AppState::new("com.itau.investimentos");
        let source: Arc<dyn AnalyticsSource> = Arc::new(SampleAnalyticsSource);

        controller.request_analytics(&source, &state.app_id_input.clone(), &mut state);
        wait_until_idle(&mut controller, &mut state);

        let sentiment = sentiment_slices(state.record.as_ref());
        assert_eq!(
            sentiment.iter().map(|s| (s.label, s.value)).collect::<Vec<_>>(),
            [("Positive", 65.0), ("Neutral", 25.0), ("Negative", 10.0)]
        );
        let severity = severity_slices(state.record.as_ref());
        assert_eq!(
            severity.iter().map(|s| (s.label, s.value)).collect::<Vec<_>>(),
            [("High", 5.0), ("Medium", 15.0), ("Low", 80.0)]
        );
    }
}
