use serde::{Deserialize, Serialize};

/// Probe defaults read from the `[probe]` table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeSettings {
    #[serde(default = "default_resolver")]
    pub resolver: String,

    /// Wait between two probes, in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Read timeout for one exchange, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// 0 means unbounded.
    #[serde(default)]
    pub count: u64,

    #[serde(default)]
    pub random_ids: bool,

    #[serde(default)]
    pub iterative: bool,

    #[serde(default)]
    pub verbose: bool,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            resolver: default_resolver(),
            interval_ms: default_interval_ms(),
            timeout_ms: default_timeout_ms(),
            count: 0,
            random_ids: false,
            iterative: false,
            verbose: false,
        }
    }
}

fn default_resolver() -> String {
    "127.0.0.1:53".to_string()
}

fn default_interval_ms() -> u64 {
    1000
}

fn default_timeout_ms() -> u64 {
    2000
}
