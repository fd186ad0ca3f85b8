//! Configuration module for dnsping
//!
//! - `root`: main configuration, file loading and CLI overrides
//! - `probe`: probe defaults (resolver, pacing, flags)
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod probe;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use probe::ProbeSettings;
pub use root::{CliOverrides, Config};
