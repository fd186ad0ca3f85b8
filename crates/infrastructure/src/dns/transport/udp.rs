//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). Each call owns one ephemeral
//! socket, connected to the resolver so that ICMP errors surface as
//! `ConnectionRefused` and datagrams from other peers are dropped by the
//! kernel. Truncated responses are returned as they are; there is no TCP
//! fallback.

use dnsping_domain::DomainError;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};
use tracing::debug;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    /// Send one query and return the raw response. Write and read share
    /// `deadline`. The socket is dropped before returning on every path.
    pub async fn send(
        &self,
        message_bytes: &[u8],
        deadline: Instant,
    ) -> Result<Vec<u8>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| map_io_error(e, self.server_addr))?;

        let bytes_sent = timeout_at(deadline, socket.send(message_bytes))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server_addr.to_string(),
            })?
            .map_err(|e| map_io_error(e, self.server_addr))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let bytes_received = timeout_at(deadline, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.server_addr.to_string(),
            })?
            .map_err(|e| map_io_error(e, self.server_addr))?;

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        validate_response_id(message_bytes, &recv_buf, self.server_addr)?;

        Ok(recv_buf)
    }
}

fn map_io_error(error: io::Error, server: SocketAddr) -> DomainError {
    match error.kind() {
        io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
            server: server.to_string(),
        },
        io::ErrorKind::ConnectionReset => DomainError::TransportConnectionReset {
            server: server.to_string(),
        },
        _ => DomainError::IoError(format!("UDP exchange with {} failed: {}", server, error)),
    }
}

/// The first two bytes of query and response must carry the same id.
fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Message from {} too short to carry an id ({} bytes)",
            server,
            response.len()
        )));
    }

    let sent = u16::from_be_bytes([query[0], query[1]]);
    let received = u16::from_be_bytes([response[0], response[1]]);
    if sent != received {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Response id mismatch from {}: sent {}, received {}",
            server, sent, received
        )));
    }

    Ok(())
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
