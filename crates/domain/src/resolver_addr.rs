use crate::probe_config::{MAX_LABEL_LEN, MAX_NAME_LEN};
use crate::DomainError;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

/// Resolver address as given on the command line.
///
/// IP literals are parsed up front. Hostnames are kept as-is and looked up
/// on every exchange, so a resolver behind a changing name is followed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolverAddr {
    Resolved(SocketAddr),
    Unresolved { hostname: Arc<str>, port: u16 },
}

impl ResolverAddr {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            ResolverAddr::Resolved(addr) => Some(*addr),
            ResolverAddr::Unresolved { .. } => None,
        }
    }

    pub fn port(&self) -> u16 {
        match self {
            ResolverAddr::Resolved(addr) => addr.port(),
            ResolverAddr::Unresolved { port, .. } => *port,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, ResolverAddr::Unresolved { .. })
    }

    /// Returns (hostname, port) if this address still needs a lookup.
    pub fn unresolved_parts(&self) -> Option<(&str, u16)> {
        match self {
            ResolverAddr::Unresolved { hostname, port } => Some((hostname, *port)),
            ResolverAddr::Resolved(_) => None,
        }
    }
}

impl Default for ResolverAddr {
    fn default() -> Self {
        ResolverAddr::Resolved(SocketAddr::from(([127, 0, 0, 1], 53)))
    }
}

impl fmt::Display for ResolverAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolverAddr::Resolved(addr) => write!(f, "{}", addr),
            ResolverAddr::Unresolved { hostname, port } => write!(f, "{}:{}", hostname, port),
        }
    }
}

fn parse_host_port(s: &str) -> Option<(&str, u16)> {
    if s.starts_with('[') {
        let end = s.find(']')?;
        let host = &s[1..end];
        let rest = &s[end + 1..];
        let port_str = rest.strip_prefix(':')?;
        let port = port_str.parse::<u16>().ok()?;
        Some((host, port))
    } else {
        let (host, port_str) = s.rsplit_once(':')?;
        // A second colon means an unbracketed IPv6 literal, which is ambiguous.
        if host.contains(':') {
            return None;
        }
        let port = port_str.parse::<u16>().ok()?;
        Some((host, port))
    }
}

fn is_valid_hostname(host: &str) -> bool {
    !host.is_empty()
        && host.len() <= MAX_NAME_LEN
        && host.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= MAX_LABEL_LEN
                && label
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
}

fn reject_port_zero(port: u16, input: &str) -> Result<(), DomainError> {
    if port == 0 {
        return Err(DomainError::InvalidResolverAddress(format!(
            "Port 0 in '{}' cannot reach a resolver",
            input
        )));
    }
    Ok(())
}

impl FromStr for ResolverAddr {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(addr) = s.parse::<SocketAddr>() {
            return reject_port_zero(addr.port(), s).map(|()| ResolverAddr::Resolved(addr));
        }

        let (host, port) = parse_host_port(s).ok_or_else(|| {
            DomainError::InvalidResolverAddress(format!(
                "'{}' is not a HOST:PORT pair",
                s
            ))
        })?;

        reject_port_zero(port, s)?;

        if !is_valid_hostname(host) {
            return Err(DomainError::InvalidResolverAddress(format!(
                "Invalid host '{}' in '{}'",
                host, s
            )));
        }

        Ok(ResolverAddr::Unresolved {
            hostname: host.into(),
            port,
        })
    }
}
