//! dnsping Application Layer
//!
//! Ports describe what the probe loop needs from the outside world; the
//! use case drives the loop against them.
pub mod ports;
pub mod use_cases;
