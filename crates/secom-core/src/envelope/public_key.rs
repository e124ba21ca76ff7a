//! Public key envelope: certificate exchange between endpoints.

use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeSeq, SignableAttributes};
use crate::error::CoreError;
use crate::types::PublicCertificate;
use crate::version::ProtocolVersion;

use super::EnvelopeSeal;

/// The signable fields of a public key exchange.
///
/// Attribute order (frozen): publicCertificate, rootCertificateThumbprint,
/// seal. The certificate field is the one place the legacy multi-entry
/// chain form still appears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyEnvelope {
    /// The published certificate (single, or legacy chain).
    pub public_certificate: PublicCertificate,

    /// Thumbprint of the issuing root certificate.
    pub root_certificate_thumbprint: String,

    /// Signer identification.
    #[serde(flatten)]
    pub seal: EnvelopeSeal,
}

impl SignableAttributes for PublicKeyEnvelope {
    fn append_attributes(
        &self,
        version: ProtocolVersion,
        seq: &mut AttributeSeq,
    ) -> Result<(), CoreError> {
        seq.push_text(&self.public_certificate.canonical_text());
        seq.push_text(&self.root_certificate_thumbprint);
        seq.splice(&self.seal, version)
    }
}
