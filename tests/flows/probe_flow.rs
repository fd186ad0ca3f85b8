//! Full probe runs: use case, UDP exchanger and a resolver on loopback.

#[path = "../common/mod.rs"]
mod common;

use common::{unused_port, MockResolver, RecordingReporter};
use dnsping_application::use_cases::RunProbesUseCase;
use dnsping_domain::{IdPolicy, ProbeConfig, RecursionMode, ResolverAddr, NO_ADDRESS};
use dnsping_infrastructure::dns::UdpExchanger;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const ANSWER: Ipv4Addr = Ipv4Addr::new(192, 0, 2, 10);

fn config(addr: SocketAddr, count: u64) -> ProbeConfig {
    ProbeConfig::new(ResolverAddr::Resolved(addr), "example.com")
        .unwrap()
        .with_count(count)
        .with_interval(Duration::ZERO)
        .with_timeout(Duration::from_millis(500))
}

fn use_case(reporter: Arc<RecordingReporter>) -> RunProbesUseCase {
    RunProbesUseCase::new(Arc::new(UdpExchanger::new()), reporter)
}

#[tokio::test]
async fn test_answering_resolver_has_no_errors() {
    let resolver = MockResolver::start(ANSWER).await;
    let reporter = Arc::new(RecordingReporter::new());

    let stats = use_case(reporter.clone())
        .execute(&config(resolver.addr(), 5))
        .await;

    assert_eq!(stats.sent, 5);
    assert_eq!(stats.errored, 0);
    assert_eq!(stats.error_percentage(), Some(0.0));
    assert!(stats.rtt_min().is_some());

    let outcomes = reporter.outcomes();
    assert_eq!(outcomes.len(), 5);
    for outcome in &outcomes {
        assert_eq!(outcome.result.address(), Some(IpAddr::V4(ANSWER)));
        assert_ne!(outcome.address_label().to_string(), NO_ADDRESS);
    }
    assert_eq!(reporter.finished(), Some(stats));
}

#[tokio::test]
async fn test_unreachable_resolver_counts_every_probe_as_error() {
    let addr = unused_port().await;
    let reporter = Arc::new(RecordingReporter::new());
    let config = config(addr, 3).with_timeout(Duration::from_millis(200));

    let stats = use_case(reporter.clone()).execute(&config).await;

    assert_eq!(stats.sent, 3);
    assert_eq!(stats.errored, 3);
    assert_eq!(stats.received(), 0);
    assert_eq!(stats.error_percentage(), Some(100.0));
    assert!(stats.rtt_avg().is_none());
    assert!(reporter
        .outcomes()
        .iter()
        .all(|outcome| outcome.result.is_failure()));
}

#[tokio::test]
async fn test_random_ids_reach_the_wire() {
    let resolver = MockResolver::start(ANSWER).await;
    let reporter = Arc::new(RecordingReporter::new());
    let config = config(resolver.addr(), 8).with_id_policy(IdPolicy::RandomPerProbe);

    use_case(reporter).with_seed(42).execute(&config).await;

    let ids = resolver.query_ids();
    assert_eq!(ids.len(), 8);
    assert!(
        ids.windows(2).any(|pair| pair[0] != pair[1]),
        "ids never changed: {:?}",
        ids
    );
}

#[tokio::test]
async fn test_fixed_id_is_reused() {
    let resolver = MockResolver::start(ANSWER).await;
    let reporter = Arc::new(RecordingReporter::new());

    use_case(reporter)
        .execute(&config(resolver.addr(), 3))
        .await;

    assert_eq!(resolver.query_ids(), vec![0, 0, 0]);
}

#[tokio::test]
async fn test_iterative_mode_clears_recursion_desired() {
    let resolver = MockResolver::start(ANSWER).await;
    let reporter = Arc::new(RecordingReporter::new());
    let config = config(resolver.addr(), 2).with_recursion(RecursionMode::Iterative);

    let stats = use_case(reporter).execute(&config).await;

    assert_eq!(stats.errored, 0);
    assert_eq!(resolver.recursion_flags(), vec![false, false]);
}

#[tokio::test]
async fn test_recursive_mode_sets_recursion_desired() {
    let resolver = MockResolver::start(ANSWER).await;
    let reporter = Arc::new(RecordingReporter::new());

    use_case(reporter)
        .execute(&config(resolver.addr(), 2))
        .await;

    assert_eq!(resolver.recursion_flags(), vec![true, true]);
}

#[tokio::test]
async fn test_unbounded_run_stops_on_cancellation() {
    let resolver = MockResolver::start(ANSWER).await;
    let token = CancellationToken::new();
    let reporter = Arc::new(RecordingReporter::cancelling_after(4, token.clone()));
    let config = config(resolver.addr(), 0).with_interval(Duration::from_millis(5));

    let stats = tokio::time::timeout(
        Duration::from_secs(5),
        use_case(reporter.clone())
            .with_cancellation(token)
            .execute(&config),
    )
    .await
    .expect("cancelled run should return");

    assert_eq!(stats.sent, 4);
    assert_eq!(stats.errored, 0);
    assert_eq!(reporter.finished(), Some(stats));
}
