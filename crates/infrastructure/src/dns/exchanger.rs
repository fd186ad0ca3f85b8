use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::udp::UdpTransport;
use async_trait::async_trait;
use dnsping_application::ports::{DnsAnswer, DnsExchanger};
use dnsping_domain::{DomainError, ProbeQuery, ResolverAddr};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use tracing::debug;

/// [`DnsExchanger`] doing one plain UDP round trip per call.
///
/// Stateless: every exchange resolves the resolver address, opens its own
/// socket and closes it again. Nothing is pooled between probes. The lookup,
/// the write and the read all count against one deadline.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpExchanger;

impl UdpExchanger {
    pub fn new() -> Self {
        Self
    }

    async fn resolve(resolver: &ResolverAddr, deadline: Instant) -> Result<SocketAddr, DomainError> {
        if let Some(addr) = resolver.socket_addr() {
            return Ok(addr);
        }

        let Some((host, port)) = resolver.unresolved_parts() else {
            return Err(DomainError::InvalidResolverAddress(resolver.to_string()));
        };

        let mut addrs = timeout_at(deadline, tokio::net::lookup_host((host, port)))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: resolver.to_string(),
            })?
            .map_err(|e| {
                DomainError::InvalidResolverAddress(format!(
                    "Failed to resolve {}: {}",
                    resolver, e
                ))
            })?;

        let addr = addrs.next().ok_or_else(|| {
            DomainError::InvalidResolverAddress(format!("{} resolved to no address", resolver))
        })?;

        debug!(resolver = %resolver, resolved = %addr, "Resolver hostname resolved");
        Ok(addr)
    }
}

#[async_trait]
impl DnsExchanger for UdpExchanger {
    async fn exchange(
        &self,
        resolver: &ResolverAddr,
        query: &ProbeQuery,
        timeout: Duration,
    ) -> Result<DnsAnswer, DomainError> {
        let deadline = Instant::now() + timeout;
        let server = Self::resolve(resolver, deadline).await?;
        let message_bytes = MessageBuilder::build_query(query)?;

        let transport = UdpTransport::new(server);
        let response = transport.send(&message_bytes, deadline).await?;

        let parsed = ResponseParser::parse(&response)?;
        if parsed.truncated {
            debug!(
                server = %transport.server_addr(),
                "Truncated response, using answers as received"
            );
        }

        Ok(DnsAnswer {
            address: parsed.first_address(),
            rcode: ResponseParser::rcode_to_status(parsed.rcode),
            answer_count: parsed.answer_count,
            truncated: parsed.truncated,
        })
    }
}
