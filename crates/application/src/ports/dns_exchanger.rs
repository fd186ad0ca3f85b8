use async_trait::async_trait;
use dnsping_domain::{DomainError, ProbeQuery, ResolverAddr};
use std::net::IpAddr;
use std::time::Duration;

/// Decoded reply to a probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    /// First address record in the answer section.
    pub address: Option<IpAddr>,
    pub rcode: &'static str,
    pub answer_count: usize,
    pub truncated: bool,
}

impl DnsAnswer {
    pub fn new(address: Option<IpAddr>, rcode: &'static str) -> Self {
        Self {
            address,
            rcode,
            answer_count: usize::from(address.is_some()),
            truncated: false,
        }
    }
}

/// One complete request/response transaction against a resolver.
///
/// Implementations must not retry and must release whatever they opened
/// before returning, on both the success and the error path.
#[async_trait]
pub trait DnsExchanger: Send + Sync {
    async fn exchange(
        &self,
        resolver: &ResolverAddr,
        query: &ProbeQuery,
        timeout: Duration,
    ) -> Result<DnsAnswer, DomainError>;
}
