//! Encryption key transport objects.

use serde::{Deserialize, Serialize};

use secom_core::{KeyNotificationEnvelope, KeyRequestEnvelope};

/// Request for the content key of a protected data item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionKeyRequestObject {
    pub envelope: KeyRequestEnvelope,

    /// Hex signature over the envelope's canonical payload.
    pub envelope_signature: String,
}

/// Delivery of wrapped key material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptionKeyObject {
    pub envelope: KeyNotificationEnvelope,
    pub envelope_signature: String,
}
