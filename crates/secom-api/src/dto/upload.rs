//! Upload, upload-link, and public-key transport objects.

use serde::{Deserialize, Serialize};

use secom_core::{LinkEnvelope, PublicKeyEnvelope, UploadEnvelope};

/// An upload request: the signable envelope plus its signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadObject {
    /// The signable subset of the message.
    pub envelope: UploadEnvelope,

    /// Hex signature over the envelope's canonical payload.
    pub envelope_signature: String,
}

/// An upload-by-reference request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadLinkObject {
    pub envelope: LinkEnvelope,
    pub envelope_signature: String,
}

/// A public key exchange message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyObject {
    pub envelope: PublicKeyEnvelope,
    pub envelope_signature: String,
}
