//! DNS Message Builder
//!
//! Turns a [`ProbeQuery`] into a wire-format DNS message using `hickory-proto`.
//! The query id and the RD flag are taken from the probe query as-is; id
//! randomisation is the probe loop's business.

use dnsping_domain::{DomainError, ProbeQuery, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType as HickoryRecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a single-question query and serialize it to wire format bytes
    ///
    /// # Arguments
    /// * `query` - name, type, RD flag and transaction id to encode
    ///
    /// # Returns
    /// Serialized DNS message bytes ready to send over UDP
    pub fn build_query(query: &ProbeQuery) -> Result<Vec<u8>, DomainError> {
        let message = Self::build_message(query)?;
        Self::serialize_message(&message)
    }

    /// Build the `Message` without serializing it
    pub fn build_message(query: &ProbeQuery) -> Result<Message, DomainError> {
        let name = Name::from_str(&query.name).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", query.name, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(Self::to_hickory(&query.record_type));
        question.set_query_class(DNSClass::IN);

        let mut message = Message::new(query.id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(query.recursion_desired);
        message.add_query(question);

        Ok(message)
    }

    fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
        }
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
