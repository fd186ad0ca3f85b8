use crate::ProbeOutcome;
use std::time::Duration;

/// Counters accumulated over a probe run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    pub sent: u64,
    pub errored: u64,
    rtt_min: Option<Duration>,
    rtt_max: Option<Duration>,
    rtt_total: Duration,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one completed probe. Round-trip times are only kept for answered probes.
    pub fn record(&mut self, outcome: &ProbeOutcome) {
        self.sent += 1;

        if outcome.result.is_failure() {
            self.errored += 1;
            return;
        }

        let rtt = outcome.elapsed;
        self.rtt_min = Some(self.rtt_min.map_or(rtt, |current| current.min(rtt)));
        self.rtt_max = Some(self.rtt_max.map_or(rtt, |current| current.max(rtt)));
        self.rtt_total += rtt;
    }

    pub fn received(&self) -> u64 {
        self.sent - self.errored
    }

    /// `100 * errored / sent`, or `None` before anything was sent.
    pub fn error_percentage(&self) -> Option<f64> {
        if self.sent == 0 {
            return None;
        }
        Some(100.0 * self.errored as f64 / self.sent as f64)
    }

    pub fn rtt_min(&self) -> Option<Duration> {
        self.rtt_min
    }

    pub fn rtt_max(&self) -> Option<Duration> {
        self.rtt_max
    }

    pub fn rtt_avg(&self) -> Option<Duration> {
        let received = self.received();
        if received == 0 {
            return None;
        }
        Some(self.rtt_total.div_f64(received as f64))
    }
}
