mod dns_exchanger;
mod probe_reporter;

pub use dns_exchanger::{DnsAnswer, DnsExchanger};
pub use probe_reporter::ProbeReporter;

// Re-export for convenience
pub use dnsping_domain::{ProbeQuery, ResolverAddr};
