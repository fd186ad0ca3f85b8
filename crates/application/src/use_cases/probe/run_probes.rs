use crate::ports::{DnsExchanger, ProbeReporter};
use dnsping_domain::{IdPolicy, ProbeConfig, ProbeOutcome, ProbeQuery, ProbeResult, RunStatistics};
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// The probe loop.
///
/// Probes run strictly one after another. A failed probe is counted and
/// reported, never retried, and never stops the run. With `count == 0` the
/// loop only ends through the cancellation token; without a token it runs
/// forever.
pub struct RunProbesUseCase {
    exchanger: Arc<dyn DnsExchanger>,
    reporter: Arc<dyn ProbeReporter>,
    shutdown: Option<CancellationToken>,
    seed: Option<u64>,
}

impl RunProbesUseCase {
    pub fn new(exchanger: Arc<dyn DnsExchanger>, reporter: Arc<dyn ProbeReporter>) -> Self {
        Self {
            exchanger,
            reporter,
            shutdown: None,
            seed: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    /// Fixes the transaction id sequence used with [`IdPolicy::RandomPerProbe`].
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub async fn execute(&self, config: &ProbeConfig) -> RunStatistics {
        let mut rng = match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let mut query = ProbeQuery::from_config(config);
        let mut stats = RunStatistics::new();

        info!(
            resolver = %config.resolver,
            domain = %config.domain,
            count = config.count,
            interval_ms = config.interval.as_millis() as u64,
            recursion_desired = query.recursion_desired,
            "Starting probe run"
        );
        self.reporter.on_start(config);

        let mut seq = 0u64;
        while config.should_continue(seq) {
            if self.is_cancelled() {
                break;
            }

            if config.id_policy == IdPolicy::RandomPerProbe {
                query.set_id(rng.u16(..));
            }

            let outcome = self.probe_once(config, &query, seq).await;
            stats.record(&outcome);
            self.reporter.on_probe(config, &outcome);

            if config.is_last(seq) {
                break;
            }
            seq += 1;

            if !self.pause(config).await {
                break;
            }
        }

        info!(
            sent = stats.sent,
            errored = stats.errored,
            "Probe run finished"
        );
        self.reporter.on_finish(config, &stats);
        stats
    }

    async fn probe_once(&self, config: &ProbeConfig, query: &ProbeQuery, seq: u64) -> ProbeOutcome {
        let start = Instant::now();
        let exchange = self
            .exchanger
            .exchange(&config.resolver, query, config.timeout)
            .await;
        let elapsed = start.elapsed();

        let result = match exchange {
            Ok(answer) => {
                debug!(
                    seq,
                    id = query.id,
                    rcode = answer.rcode,
                    answers = answer.answer_count,
                    truncated = answer.truncated,
                    elapsed_us = elapsed.as_micros() as u64,
                    "Probe answered"
                );
                ProbeResult::Answered {
                    address: answer.address,
                    rcode: answer.rcode,
                }
            }
            Err(error) => {
                warn!(
                    seq,
                    id = query.id,
                    resolver = %config.resolver,
                    error = %error,
                    "Probe failed"
                );
                ProbeResult::Failed { error }
            }
        };

        ProbeOutcome::new(seq, elapsed, result)
    }

    /// Sleeps for the configured interval. Returns `false` if the run was
    /// cancelled meanwhile.
    async fn pause(&self, config: &ProbeConfig) -> bool {
        match &self.shutdown {
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => false,
                    _ = tokio::time::sleep(config.interval) => true,
                }
            }
            None => {
                tokio::time::sleep(config.interval).await;
                true
            }
        }
    }

    fn is_cancelled(&self) -> bool {
        self.shutdown
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}
