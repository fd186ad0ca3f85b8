//! Console rendering of a probe run.

use dnsping_application::ports::ProbeReporter;
use dnsping_domain::{ProbeConfig, ProbeOutcome, RunStatistics};
use std::time::Duration;

/// Prints one line per probe and the run summary to stdout.
pub struct ConsoleReporter;

impl ProbeReporter for ConsoleReporter {
    fn on_start(&self, config: &ProbeConfig) {
        println!("{}", format_banner(config));
    }

    fn on_probe(&self, config: &ProbeConfig, outcome: &ProbeOutcome) {
        println!("{}", format_probe_line(config, outcome));
    }

    fn on_finish(&self, _config: &ProbeConfig, stats: &RunStatistics) {
        println!("{}", format_summary(stats));
        if let Some(line) = format_rtt_line(stats) {
            println!("{}", line);
        }
    }
}

pub fn format_banner(config: &ProbeConfig) -> String {
    format!(
        "Pinging resolver {} with domain {}",
        config.resolver, config.domain
    )
}

pub fn format_probe_line(config: &ProbeConfig, outcome: &ProbeOutcome) -> String {
    let prefix = format!(
        "ping {} with {} {}: {:.3}ms",
        config.resolver,
        config.record_type,
        config.domain,
        outcome.elapsed_ms()
    );

    match outcome.result.error() {
        None => format!("{} {}", prefix, outcome.address_label()),
        Some(error) if config.verbose => format!("{} error ({})", prefix, error),
        Some(_) => format!("{} error", prefix),
    }
}

pub fn format_summary(stats: &RunStatistics) -> String {
    format!(
        "Statistics: {} requests sent, {} received ({:.0}% error)",
        stats.sent,
        stats.received(),
        stats.error_percentage().unwrap_or(0.0)
    )
}

/// `None` until at least one probe got an answer.
pub fn format_rtt_line(stats: &RunStatistics) -> Option<String> {
    let (min, avg, max) = (stats.rtt_min()?, stats.rtt_avg()?, stats.rtt_max()?);
    Some(format!(
        "rtt min/avg/max = {:.3}/{:.3}/{:.3} ms",
        as_ms(min),
        as_ms(avg),
        as_ms(max)
    ))
}

fn as_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
