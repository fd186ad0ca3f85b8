use dnsping_application::ports::ProbeReporter;
use dnsping_domain::{ProbeConfig, ProbeOutcome, RunStatistics};
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Keeps every outcome. Optionally cancels the run after `cancel_after` probes.
#[derive(Default)]
pub struct RecordingReporter {
    outcomes: Mutex<Vec<ProbeOutcome>>,
    finished: Mutex<Option<RunStatistics>>,
    cancel: Option<(usize, CancellationToken)>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancelling_after(limit: usize, token: CancellationToken) -> Self {
        Self {
            cancel: Some((limit, token)),
            ..Self::default()
        }
    }

    pub fn outcomes(&self) -> Vec<ProbeOutcome> {
        self.outcomes.lock().unwrap().clone()
    }

    pub fn finished(&self) -> Option<RunStatistics> {
        self.finished.lock().unwrap().clone()
    }
}

impl ProbeReporter for RecordingReporter {
    fn on_probe(&self, _config: &ProbeConfig, outcome: &ProbeOutcome) {
        let mut outcomes = self.outcomes.lock().unwrap();
        outcomes.push(outcome.clone());
        if let Some((limit, token)) = &self.cancel {
            if outcomes.len() >= *limit {
                token.cancel();
            }
        }
    }

    fn on_finish(&self, _config: &ProbeConfig, stats: &RunStatistics) {
        *self.finished.lock().unwrap() = Some(stats.clone());
    }
}
