//! The envelope family: the signable subset of each protocol message.
//!
//! Every variant is an immutable value object constructed immediately
//! before signing, transmitted once, and discarded after verification.
//! Each declares a frozen field order per protocol version; the shared
//! seal (signer certificate, root thumbprint, signature time) always
//! contributes the final three segments.

mod access;
mod ack;
mod key;
mod link;
mod public_key;
mod upload;

pub use access::{AccessNotificationEnvelope, AccessRequestEnvelope};
pub use ack::AckEnvelope;
pub use key::{KeyNotificationEnvelope, KeyRequestEnvelope};
pub use link::LinkEnvelope;
pub use public_key::PublicKeyEnvelope;
pub use upload::UploadEnvelope;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeSeq, SignableAttributes};
use crate::encode::truncate_to_second;
use crate::error::CoreError;
use crate::version::ProtocolVersion;

/// The signer identification every envelope ends with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeSeal {
    /// The envelope signer's certificate (PEM).
    ///
    /// The legacy generation named this field `envelopeCertificate` on the
    /// wire; the alias keeps old documents parseable.
    #[serde(
        rename = "envelopeSignatureCertificate",
        alias = "envelopeCertificate"
    )]
    pub signature_certificate: String,

    /// Thumbprint of the signer's root certificate.
    #[serde(rename = "envelopeRootCertificateThumbprint")]
    pub root_certificate_thumbprint: String,

    /// When the envelope signature was produced.
    #[serde(rename = "envelopeSignatureTime", with = "crate::wire::strict_time")]
    pub signature_time: DateTime<Utc>,
}

impl EnvelopeSeal {
    /// Create a seal. The signature time is truncated to whole seconds so
    /// the producer signs exactly what every verifier will recompute.
    pub fn new(
        signature_certificate: impl Into<String>,
        root_certificate_thumbprint: impl Into<String>,
        signature_time: DateTime<Utc>,
    ) -> Self {
        Self {
            signature_certificate: signature_certificate.into(),
            root_certificate_thumbprint: root_certificate_thumbprint.into(),
            signature_time: truncate_to_second(signature_time),
        }
    }
}

impl SignableAttributes for EnvelopeSeal {
    fn append_attributes(
        &self,
        _version: ProtocolVersion,
        seq: &mut AttributeSeq,
    ) -> Result<(), CoreError> {
        seq.push_text(&self.signature_certificate);
        seq.push_text(&self.root_certificate_thumbprint);
        seq.push_time(self.signature_time);
        Ok(())
    }
}

/// Discriminator for the envelope variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnvelopeKind {
    Upload,
    Link,
    Ack,
    KeyRequest,
    KeyNotification,
    AccessRequest,
    AccessNotification,
    PublicKey,
}

/// The closed set of envelope variants.
///
/// Generic signing and verification code dispatches through this sum type;
/// each variant keeps its own field struct and frozen attribute order.
/// Transport objects carry the concrete envelope types; the tag here is
/// in-process only (several variants share a field layout, so shape alone
/// cannot discriminate them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Envelope {
    Upload(UploadEnvelope),
    Link(LinkEnvelope),
    Ack(AckEnvelope),
    KeyRequest(KeyRequestEnvelope),
    KeyNotification(KeyNotificationEnvelope),
    AccessRequest(AccessRequestEnvelope),
    AccessNotification(AccessNotificationEnvelope),
    PublicKey(PublicKeyEnvelope),
}

impl Envelope {
    /// The variant discriminator.
    pub fn kind(&self) -> EnvelopeKind {
        match self {
            Envelope::Upload(_) => EnvelopeKind::Upload,
            Envelope::Link(_) => EnvelopeKind::Link,
            Envelope::Ack(_) => EnvelopeKind::Ack,
            Envelope::KeyRequest(_) => EnvelopeKind::KeyRequest,
            Envelope::KeyNotification(_) => EnvelopeKind::KeyNotification,
            Envelope::AccessRequest(_) => EnvelopeKind::AccessRequest,
            Envelope::AccessNotification(_) => EnvelopeKind::AccessNotification,
            Envelope::PublicKey(_) => EnvelopeKind::PublicKey,
        }
    }

    /// The seal shared by every variant.
    pub fn seal(&self) -> &EnvelopeSeal {
        match self {
            Envelope::Upload(e) => &e.seal,
            Envelope::Link(e) => &e.seal,
            Envelope::Ack(e) => &e.seal,
            Envelope::KeyRequest(e) => &e.seal,
            Envelope::KeyNotification(e) => &e.seal,
            Envelope::AccessRequest(e) => &e.seal,
            Envelope::AccessNotification(e) => &e.seal,
            Envelope::PublicKey(e) => &e.seal,
        }
    }
}

impl SignableAttributes for Envelope {
    fn append_attributes(
        &self,
        version: ProtocolVersion,
        seq: &mut AttributeSeq,
    ) -> Result<(), CoreError> {
        match self {
            Envelope::Upload(e) => e.append_attributes(version, seq),
            Envelope::Link(e) => e.append_attributes(version, seq),
            Envelope::Ack(e) => e.append_attributes(version, seq),
            Envelope::KeyRequest(e) => e.append_attributes(version, seq),
            Envelope::KeyNotification(e) => e.append_attributes(version, seq),
            Envelope::AccessRequest(e) => e.append_attributes(version, seq),
            Envelope::AccessNotification(e) => e.append_attributes(version, seq),
            Envelope::PublicKey(e) => e.append_attributes(version, seq),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::canonical_payload;
    use chrono::TimeZone;

    fn seal() -> EnvelopeSeal {
        EnvelopeSeal::new(
            "envelopeCertificate",
            "envelopeThumbprint",
            Utc.timestamp_opt(1_705_316_100, 0).unwrap(),
        )
    }

    #[test]
    fn test_seal_truncates_signature_time() {
        let precise = Utc.timestamp_opt(1_705_316_100, 987_000_000).unwrap();
        let seal = EnvelopeSeal::new("cert", "thumb", precise);
        assert_eq!(seal.signature_time.timestamp_subsec_nanos(), 0);
        assert_eq!(seal.signature_time.timestamp(), 1_705_316_100);
    }

    #[test]
    fn test_seal_contributes_three_segments() {
        let payload = canonical_payload(&seal(), ProtocolVersion::V2).unwrap();
        assert_eq!(
            payload,
            "envelopeCertificate.envelopeThumbprint.1705316100"
        );
    }

    #[test]
    fn test_seal_legacy_wire_alias() {
        let json = r#"{
            "envelopeCertificate": "cert",
            "envelopeRootCertificateThumbprint": "thumb",
            "envelopeSignatureTime": "2024-01-15T11:35:00Z"
        }"#;
        let seal: EnvelopeSeal = serde_json::from_str(json).unwrap();
        assert_eq!(seal.signature_certificate, "cert");

        // Emission always uses the current name.
        let out = serde_json::to_value(&seal).unwrap();
        assert!(out.get("envelopeSignatureCertificate").is_some());
        assert!(out.get("envelopeCertificate").is_none());
    }
}
