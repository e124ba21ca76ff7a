//! Acknowledgement transport object.

use serde::{Deserialize, Serialize};

use secom_core::AckEnvelope;

/// An acknowledgement message: the signable envelope plus its signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcknowledgementObject {
    pub envelope: AckEnvelope,

    /// Hex signature over the envelope's canonical payload.
    pub envelope_signature: String,
}
