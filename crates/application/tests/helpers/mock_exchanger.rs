#![allow(dead_code)]

use async_trait::async_trait;
use dnsping_application::ports::{DnsAnswer, DnsExchanger, ProbeReporter};
use dnsping_domain::{
    DomainError, ProbeConfig, ProbeOutcome, ProbeQuery, ResolverAddr, RunStatistics,
};
use std::collections::VecDeque;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Exchanger returning scripted results and recording every query it saw.
///
/// Once the script runs out, the fallback result is repeated.
#[derive(Clone)]
pub struct MockDnsExchanger {
    script: Arc<Mutex<VecDeque<Result<DnsAnswer, DomainError>>>>,
    fallback: Result<DnsAnswer, DomainError>,
    queries: Arc<Mutex<Vec<ProbeQuery>>>,
}

impl MockDnsExchanger {
    pub fn answering(address: &str) -> Self {
        let ip: IpAddr = address.parse().unwrap();
        Self::with_fallback(Ok(DnsAnswer::new(Some(ip), "NOERROR")))
    }

    pub fn empty_answers() -> Self {
        Self::with_fallback(Ok(DnsAnswer::new(None, "NOERROR")))
    }

    pub fn failing() -> Self {
        Self::with_fallback(Err(DomainError::TransportConnectionRefused {
            server: "127.0.0.1:53".to_string(),
        }))
    }

    pub fn with_fallback(fallback: Result<DnsAnswer, DomainError>) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            fallback,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn then(self, result: Result<DnsAnswer, DomainError>) -> Self {
        self.script.lock().unwrap().push_back(result);
        self
    }

    pub fn queries(&self) -> Vec<ProbeQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsExchanger for MockDnsExchanger {
    async fn exchange(
        &self,
        _resolver: &ResolverAddr,
        query: &ProbeQuery,
        _timeout: Duration,
    ) -> Result<DnsAnswer, DomainError> {
        self.queries.lock().unwrap().push(query.clone());
        let scripted = self.script.lock().unwrap().pop_front();
        scripted.unwrap_or_else(|| self.fallback.clone())
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    started: Mutex<bool>,
    outcomes: Mutex<Vec<ProbeOutcome>>,
    finished: Mutex<Option<RunStatistics>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> bool {
        *self.started.lock().unwrap()
    }

    pub fn outcomes(&self) -> Vec<ProbeOutcome> {
        self.outcomes.lock().unwrap().clone()
    }

    pub fn finished(&self) -> Option<RunStatistics> {
        self.finished.lock().unwrap().clone()
    }
}

impl ProbeReporter for RecordingReporter {
    fn on_start(&self, _config: &ProbeConfig) {
        *self.started.lock().unwrap() = true;
    }

    fn on_probe(&self, _config: &ProbeConfig, outcome: &ProbeOutcome) {
        self.outcomes.lock().unwrap().push(outcome.clone());
    }

    fn on_finish(&self, _config: &ProbeConfig, stats: &RunStatistics) {
        *self.finished.lock().unwrap() = Some(stats.clone());
    }
}
