use clap::Parser;
use dnsping_application::use_cases::RunProbesUseCase;
use dnsping_domain::CliOverrides;
use dnsping_infrastructure::dns::UdpExchanger;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod report;

use report::ConsoleReporter;

#[derive(Parser)]
#[command(name = "dnsping")]
#[command(version)]
#[command(about = "dnsping - monitor response time for DNS servers")]
#[command(
    long_about = "Send DNS requests periodically to monitor a DNS server response time."
)]
struct Cli {
    /// Domain to query (an A record is requested)
    #[arg(value_name = "DOMAIN")]
    domain: String,

    /// Interval between requests in milliseconds
    #[arg(short = 'd', long, value_name = "MS")]
    interval: Option<u64>,

    /// Print error details for failed requests
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Stop after this many requests (0 = run until interrupted)
    #[arg(long, value_name = "N")]
    count: Option<u64>,

    /// Use a fresh random transaction id for every request
    #[arg(long)]
    random: bool,

    /// Send iterative queries (recursion desired cleared) to stress authoritative servers
    #[arg(short = 'i', long)]
    iterative: bool,

    /// Resolver to test against
    #[arg(short = 'r', long, value_name = "HOST:PORT")]
    resolver: Option<String>,

    /// How long to wait for each response in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    timeout: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        resolver: cli.resolver.clone(),
        interval_ms: cli.interval,
        timeout_ms: cli.timeout,
        count: cli.count,
        random_ids: cli.random,
        iterative: cli.iterative,
        verbose: cli.verbose,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let probe_config = config.probe_config(&cli.domain)?;

    println!("dnsping - monitor response time for DNS servers");

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Interrupt received, finishing run"),
            Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C"),
        }
        signal_token.cancel();
    });

    let use_case = RunProbesUseCase::new(Arc::new(UdpExchanger::new()), Arc::new(ConsoleReporter))
        .with_cancellation(shutdown);

    use_case.execute(&probe_config).await;
    Ok(())
}
