use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::probe::ProbeSettings;
use crate::probe_config::{IdPolicy, ProbeConfig, RecursionMode};
use crate::ResolverAddr;

const LOCAL_CONFIG_PATH: &str = "dnsping.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsping/config.toml";

/// Main configuration structure for dnsping
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Probe defaults (resolver, pacing, query flags)
    #[serde(default)]
    pub probe: ProbeSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsping.toml in current directory
    /// 3. /etc/dnsping/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    ///
    /// Boolean flags can only switch a setting on, they never turn off
    /// what the file enabled.
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(resolver) = overrides.resolver {
            self.probe.resolver = resolver;
        }
        if let Some(interval) = overrides.interval_ms {
            self.probe.interval_ms = interval;
        }
        if let Some(timeout) = overrides.timeout_ms {
            self.probe.timeout_ms = timeout;
        }
        if let Some(count) = overrides.count {
            self.probe.count = count;
        }
        if overrides.random_ids {
            self.probe.random_ids = true;
        }
        if overrides.iterative {
            self.probe.iterative = true;
        }
        if overrides.verbose {
            self.probe.verbose = true;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.probe
            .resolver
            .parse::<ResolverAddr>()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        if self.probe.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Timeout must be greater than 0 ms".to_string(),
            ));
        }

        if !self.logging.is_valid_level() {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Build the immutable run configuration for `domain`.
    pub fn probe_config(&self, domain: &str) -> Result<ProbeConfig, ConfigError> {
        let resolver = self
            .probe
            .resolver
            .parse::<ResolverAddr>()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        let recursion = if self.probe.iterative {
            RecursionMode::Iterative
        } else {
            RecursionMode::Recursive
        };
        let id_policy = if self.probe.random_ids {
            IdPolicy::RandomPerProbe
        } else {
            IdPolicy::Fixed
        };

        let config = ProbeConfig::new(resolver, domain)
            .map_err(|e| ConfigError::Validation(e.to_string()))?
            .with_recursion(recursion)
            .with_id_policy(id_policy)
            .with_interval(Duration::from_millis(self.probe.interval_ms))
            .with_timeout(Duration::from_millis(self.probe.timeout_ms))
            .with_count(self.probe.count)
            .with_verbose(self.probe.verbose);

        Ok(config)
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub resolver: Option<String>,
    pub interval_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub count: Option<u64>,
    pub random_ids: bool,
    pub iterative: bool,
    pub verbose: bool,
    pub log_level: Option<String>,
}
