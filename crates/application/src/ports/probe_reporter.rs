use dnsping_domain::{ProbeConfig, ProbeOutcome, RunStatistics};

/// Sink for probe results. Carries nothing back into the loop.
pub trait ProbeReporter: Send + Sync {
    fn on_start(&self, _config: &ProbeConfig) {}

    fn on_probe(&self, config: &ProbeConfig, outcome: &ProbeOutcome);

    fn on_finish(&self, _config: &ProbeConfig, _stats: &RunStatistics) {}
}
