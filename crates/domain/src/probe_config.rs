use crate::{DomainError, RecordType, ResolverAddr};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

/// RFC 1035 limits, in bytes, without the trailing root label.
pub(crate) const MAX_LABEL_LEN: usize = 63;
pub(crate) const MAX_NAME_LEN: usize = 253;

/// Whether queries ask the resolver to recurse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecursionMode {
    /// RD set. The normal mode against recursive resolvers.
    #[default]
    Recursive,
    /// RD cleared, for probing authoritative servers.
    Iterative,
}

impl RecursionMode {
    pub fn recursion_desired(&self) -> bool {
        matches!(self, RecursionMode::Recursive)
    }
}

/// How the transaction id evolves across probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// One id for the whole run (the codec default, 0).
    #[default]
    Fixed,
    /// A fresh uniformly random id before every send. Some resolvers drop
    /// what looks like a retransmission of the same id.
    RandomPerProbe,
}

/// Immutable settings of one probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub resolver: ResolverAddr,
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub recursion: RecursionMode,
    pub id_policy: IdPolicy,
    pub interval: Duration,
    /// Number of probes to send. 0 means run until cancelled.
    pub count: u64,
    pub verbose: bool,
    pub timeout: Duration,
}

impl ProbeConfig {
    /// Creates a config with default pacing for `domain`, which is
    /// normalized to a fully-qualified name.
    pub fn new(resolver: ResolverAddr, domain: &str) -> Result<Self, DomainError> {
        Ok(Self {
            resolver,
            domain: normalize_domain(domain)?,
            record_type: RecordType::A,
            recursion: RecursionMode::Recursive,
            id_policy: IdPolicy::Fixed,
            interval: DEFAULT_INTERVAL,
            count: 0,
            verbose: false,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_recursion(mut self, recursion: RecursionMode) -> Self {
        self.recursion = recursion;
        self
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.count == 0
    }

    /// Loop condition: an unbounded run never stops on its own.
    pub fn should_continue(&self, seq: u64) -> bool {
        self.is_unbounded() || seq < self.count
    }

    pub fn is_last(&self, seq: u64) -> bool {
        !self.is_unbounded() && seq + 1 >= self.count
    }
}

/// Returns `domain` terminated by the root label.
pub fn normalize_domain(domain: &str) -> Result<Arc<str>, DomainError> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "Target domain cannot be empty".to_string(),
        ));
    }
    if trimmed.contains(char::is_whitespace) {
        return Err(DomainError::InvalidDomainName(format!(
            "Target domain '{}' contains whitespace",
            trimmed
        )));
    }
    if trimmed != "." && trimmed.split('.').rev().skip(1).any(str::is_empty) {
        return Err(DomainError::InvalidDomainName(format!(
            "Target domain '{}' has an empty label",
            trimmed
        )));
    }

    let name = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if name.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "Target domain is {} bytes long, the limit is {}",
            name.len(),
            MAX_NAME_LEN
        )));
    }
    if let Some(label) = name.split('.').find(|label| label.len() > MAX_LABEL_LEN) {
        return Err(DomainError::InvalidDomainName(format!(
            "Label '{}' exceeds {} bytes",
            label, MAX_LABEL_LEN
        )));
    }

    if trimmed.ends_with('.') {
        Ok(Arc::from(trimmed))
    } else {
        Ok(Arc::from(format!("{}.", trimmed)))
    }
}
