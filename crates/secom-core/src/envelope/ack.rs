//! Acknowledgement envelope: delivery and read confirmation of an upload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attributes::{AttributeSeq, SignableAttributes};
use crate::error::CoreError;
use crate::types::{AckType, NackType};
use crate::version::ProtocolVersion;

use super::EnvelopeSeal;

/// The signable fields of an acknowledgement.
///
/// Attribute order (frozen, identical across versions): createdAt,
/// transactionIdentifier, ackType, nackType, seal. A positive
/// acknowledgement leaves `nack_type` unset, which encodes as an empty
/// segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AckEnvelope {
    /// When the acknowledged event occurred at the consumer.
    #[serde(with = "crate::wire::strict_time")]
    pub created_at: DateTime<Utc>,

    /// Transaction of the upload being acknowledged.
    pub transaction_identifier: Uuid,

    /// Positive acknowledgement kind.
    pub ack_type: AckType,

    /// Negative acknowledgement kind, when the event is a nack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nack_type: Option<NackType>,

    /// Signer identification.
    #[serde(flatten)]
    pub seal: EnvelopeSeal,
}

impl AckEnvelope {
    /// Whether this acknowledgement is negative.
    pub fn is_nack(&self) -> bool {
        self.nack_type.is_some()
    }
}

impl SignableAttributes for AckEnvelope {
    fn append_attributes(
        &self,
        version: ProtocolVersion,
        seq: &mut AttributeSeq,
    ) -> Result<(), CoreError> {
        seq.push_time(self.created_at);
        seq.push_text(&self.transaction_identifier.to_string());
        seq.push_code(self.ack_type.code());
        seq.push_optional_code(self.nack_type.map(NackType::code));
        seq.splice(&self.seal, version)
    }
}
