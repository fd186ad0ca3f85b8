//! dnsping Domain Layer
pub mod config;
pub mod errors;
pub mod probe_config;
pub mod probe_outcome;
pub mod probe_query;
pub mod record_type;
pub mod resolver_addr;
pub mod run_statistics;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use probe_config::{normalize_domain, IdPolicy, ProbeConfig, RecursionMode};
pub use probe_outcome::{ProbeOutcome, ProbeResult, NO_ADDRESS};
pub use probe_query::ProbeQuery;
pub use record_type::RecordType;
pub use resolver_addr::ResolverAddr;
pub use run_statistics::RunStatistics;
