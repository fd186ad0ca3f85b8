//! dnsping Infrastructure Layer
//!
//! Adapters behind the application ports: the UDP exchanger and the
//! hickory-proto based wire codec it uses.
pub mod dns;
