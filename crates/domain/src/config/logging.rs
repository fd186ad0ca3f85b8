use serde::{Deserialize, Serialize};

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// One of `LOG_LEVELS`. Logs go to stderr; probe lines go to stdout.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn is_valid_level(&self) -> bool {
        LOG_LEVELS.contains(&self.level.to_lowercase().as_str())
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
