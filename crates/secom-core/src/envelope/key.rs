//! Encryption key envelopes: requesting and delivering payload keys.
//!
//! When a payload is encrypted, the consumer asks for the content key with
//! a key-request envelope; the producer answers with a key-notification
//! envelope carrying the wrapped key material. The key bytes themselves
//! are opaque here; wrapping and unwrapping happen outside the core.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attributes::{AttributeSeq, SignableAttributes};
use crate::error::CoreError;
use crate::version::ProtocolVersion;

use super::EnvelopeSeal;

/// The signable fields of an encryption key request.
///
/// Attribute order (frozen): dataReference, publicCertificate, seal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyRequestEnvelope {
    /// The protected data item the key is requested for.
    pub data_reference: Uuid,

    /// The requester's certificate; the key will be wrapped to it.
    pub public_certificate: String,

    /// Signer identification.
    #[serde(flatten)]
    pub seal: EnvelopeSeal,
}

impl SignableAttributes for KeyRequestEnvelope {
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

/// The signable fields of an encryption key notification.
///
/// Attribute order (frozen): dataReference, encryptionKey, iv,
/// transactionIdentifier, seal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyNotificationEnvelope {
    /// The protected data item the key belongs to.
    pub data_reference: Uuid,

    /// The wrapped content key.
    #[serde(with = "crate::wire::base64_bytes")]
    pub encryption_key: Bytes,

    /// Initialisation vector for the payload cipher.
    #[serde(with = "crate::wire::base64_bytes")]
    pub iv: Bytes,

    /// Transaction this notification answers.
    pub transaction_identifier: Uuid,

    /// Signer identification.
    #[serde(flatten)]
    pub seal: EnvelopeSeal,
}

impl SignableAttributes for KeyNotificationEnvelope {
    fn append_attributes(
        &self,
        version: ProtocolVersion,
        seq: &mut AttributeSeq,
    ) -> Result<(), CoreError> {
        seq.push_text(&self.data_reference.to_string());
        seq.push_bytes(&self.encryption_key);
        seq.push_bytes(&self.iv);
        seq.push_text(&self.transaction_identifier.to_string());
        seq.splice(&self.seal, version)
    }
}
