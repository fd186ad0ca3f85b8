pub mod exchanger;
pub mod forwarding;
pub mod transport;

pub use exchanger::UdpExchanger;
pub use forwarding::{DnsResponse, MessageBuilder, ResponseParser};
pub use transport::udp::UdpTransport;
