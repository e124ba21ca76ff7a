//! Access envelopes: requesting access to protected data and notifying
//! the requester of the decision.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attributes::{AttributeSeq, SignableAttributes};
use crate::error::CoreError;
use crate::version::ProtocolVersion;

use super::EnvelopeSeal;

/// The signable fields of an access request.
///
/// Attribute order (frozen): dataReference, publicCertificate, seal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequestEnvelope {
    /// The data item access is requested for.
    pub data_reference: Uuid,

    /// The requester's certificate.
    pub public_certificate: String,

    /// Signer identification.
    #[serde(flatten)]
    pub seal: EnvelopeSeal,
}

impl SignableAttributes for AccessRequestEnvelope {
    fn append_attributes(
        &self,
        version: ProtocolVersion,
        seq: &mut AttributeSeq,
    ) -> Result<(), CoreError> {
        seq.push_text(&self.data_reference.to_string());
        seq.push_text(&self.public_certificate);
        seq.splice(&self.seal, version)
    }
}

/// The signable fields of an access decision notification.
///
/// Attribute order (frozen): accessGranted, dataReference, seal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessNotificationEnvelope {
    /// Whether access was granted.
    pub access_granted: bool,

    /// The data item the decision concerns.
    pub data_reference: Uuid,

    /// Signer identification.
    #[serde(flatten)]
    pub seal: EnvelopeSeal,
}

impl SignableAttributes for AccessNotificationEnvelope {
    fn append_attributes(
        &self,
        version: ProtocolVersion,
        seq: &mut AttributeSeq,
    ) -> Result<(), CoreError> {
        seq.push_bool(self.access_granted);
        seq.push_text(&self.data_reference.to_string());
        seq.splice(&self.seal, version)
    }
}
