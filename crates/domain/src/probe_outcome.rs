use crate::DomainError;
use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

/// Printed in place of an address when the resolver answered without one.
pub const NO_ADDRESS: &str = "?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    /// The resolver replied. `address` is the first address record, if any.
    Answered {
        address: Option<IpAddr>,
        rcode: &'static str,
    },
    Failed { error: DomainError },
}

impl ProbeResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, ProbeResult::Failed { .. })
    }

    pub fn address(&self) -> Option<IpAddr> {
        match self {
            ProbeResult::Answered { address, .. } => *address,
            ProbeResult::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&DomainError> {
        match self {
            ProbeResult::Failed { error } => Some(error),
            ProbeResult::Answered { .. } => None,
        }
    }
}

/// Result of a single probe. Built once per iteration and handed to the reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub seq: u64,
    pub elapsed: Duration,
    pub result: ProbeResult,
}

impl ProbeOutcome {
    pub fn new(seq: u64, elapsed: Duration, result: ProbeResult) -> Self {
        Self {
            seq,
            elapsed,
            result,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn address_label(&self) -> AddressLabel<'_> {
        AddressLabel(&self.result)
    }
}

/// Display adapter yielding the address or the [`NO_ADDRESS`] sentinel.
pub struct AddressLabel<'a>(&'a ProbeResult);

impl fmt::Display for AddressLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.address() {
            Some(addr) => write!(f, "{}", addr),
            None => f.write_str(NO_ADDRESS),
        }
    }
}
