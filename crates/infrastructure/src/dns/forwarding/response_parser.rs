use dnsping_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use std::net::IpAddr;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    /// Address records of the answer section, in wire order.
    pub addresses: Vec<IpAddr>,

    pub rcode: ResponseCode,

    pub truncated: bool,

    pub answer_count: usize,
}

impl DnsResponse {
    pub fn first_address(&self) -> Option<IpAddr> {
        self.addresses.first().copied()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();
        let answer_count = message.answers().len();

        let mut addresses = Vec::with_capacity(answer_count.min(8));
        for record in message.answers() {
            match record.data() {
                RData::A(a) => addresses.push(IpAddr::V4(a.0)),
                RData::AAAA(aaaa) => addresses.push(IpAddr::V6(aaaa.0)),
                _ => {}
            }
        }

        debug!(
            rcode = ?rcode,
            answers = answer_count,
            addresses = addresses.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            addresses,
            rcode,
            truncated,
            answer_count,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
