use dnsping_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        resolver = %config.probe.resolver,
        interval_ms = config.probe.interval_ms,
        timeout_ms = config.probe.timeout_ms,
        count = config.probe.count,
        "Configuration loaded"
    );

    Ok(config)
}
