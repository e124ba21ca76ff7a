//! Exchange metadata: protection, compression, and signature-algorithm
//! state attached to a data payload.
//!
//! Exchange metadata is itself a nested signable object: wherever an
//! envelope declares it, its seven attributes are spliced into the
//! envelope's canonical string at that position.

use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeSeq, SignableAttributes};
use crate::error::CoreError;
use crate::types::{DigitalSignatureReference, PublicCertificate};
use crate::version::ProtocolVersion;

/// Protection, compression, and signature state of a data payload.
///
/// Once `data_protection` is asserted, the protection scheme, signature
/// reference, and signature value (with its signature text) all become
/// mandatory; canonicalizing without them fails fast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeMetadata {
    /// Whether the payload is protected.
    pub data_protection: bool,

    /// Name of the protection scheme (e.g. "SECOM").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection_scheme: Option<String>,

    /// Signature algorithm used over the payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_signature_reference: Option<DigitalSignatureReference>,

    /// The payload signature and its certificate material.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_signature_value: Option<DigitalSignatureValue>,

    /// Whether the payload is compressed.
    pub compression_flag: bool,
}

impl ExchangeMetadata {
    /// Metadata for an unprotected, uncompressed payload.
    pub fn unprotected() -> Self {
        Self {
            data_protection: false,
            protection_scheme: None,
            digital_signature_reference: None,
            digital_signature_value: None,
            compression_flag: false,
        }
    }

    /// Check the protection invariant: all signature fields must be set
    /// once data protection is asserted.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.data_protection {
            return Ok(());
        }
        if self.protection_scheme.is_none() {
            return Err(CoreError::ProtectionFieldMissing {
                field: "protectionScheme",
            });
        }
        if self.digital_signature_reference.is_none() {
            return Err(CoreError::ProtectionFieldMissing {
                field: "digitalSignatureReference",
            });
        }
        match &self.digital_signature_value {
            None => Err(CoreError::ProtectionFieldMissing {
                field: "digitalSignatureValue",
            }),
            Some(value) if value.digital_signature.is_none() => {
                Err(CoreError::ProtectionFieldMissing {
                    field: "digitalSignature",
                })
            }
            Some(_) => Ok(()),
        }
    }
}

impl SignableAttributes for ExchangeMetadata {
    fn append_attributes(
        &self,
        version: ProtocolVersion,
        seq: &mut AttributeSeq,
    ) -> Result<(), CoreError> {
        self.validate()?;

        seq.push_bool(self.data_protection);
        seq.push_optional_text(self.protection_scheme.as_deref());
        seq.push_optional_text(
            self.digital_signature_reference
                .map(DigitalSignatureReference::canonical_name),
        );
        match &self.digital_signature_value {
            Some(value) => seq.splice(value, version)?,
            None => {
                // Segment arity must not vary with optionality: an absent
                // signature value still occupies its three positions.
                seq.push_absent();
                seq.push_absent();
                seq.push_absent();
            }
        }
        seq.push_bool(self.compression_flag);
        Ok(())
    }
}

/// Certificate material and signature text over a data payload.
///
/// Pure value object with no independent lifecycle; it lives inside the
/// exchange metadata that describes its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalSignatureValue {
    /// Thumbprint of the root certificate, when pinned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_root_certificate_thumbprint: Option<String>,

    /// The signer's public certificate (single, or legacy chain).
    pub public_certificate: PublicCertificate,

    /// Hex signature text; set once the payload has been signed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_signature: Option<String>,
}

impl DigitalSignatureValue {
    /// A value carrying certificate material but no signature yet.
    pub fn unsigned(certificate: impl Into<PublicCertificate>) -> Self {
        Self {
            public_root_certificate_thumbprint: None,
            public_certificate: certificate.into(),
            digital_signature: None,
        }
    }
}

impl SignableAttributes for DigitalSignatureValue {
    fn append_attributes(
        &self,
        _version: ProtocolVersion,
        seq: &mut AttributeSeq,
    ) -> Result<(), CoreError> {
        seq.push_optional_text(self.public_root_certificate_thumbprint.as_deref());
        seq.push_text(&self.public_certificate.canonical_text());
        seq.push_optional_text(self.digital_signature.as_deref());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::canonical_payload;

    fn protected_metadata() -> ExchangeMetadata {
        ExchangeMetadata {
            data_protection: true,
            protection_scheme: Some("SECOM".to_string()),
            digital_signature_reference: Some(DigitalSignatureReference::Dsa),
            digital_signature_value: Some(DigitalSignatureValue {
                public_root_certificate_thumbprint: Some("thumbprint".to_string()),
                public_certificate: "certificate".into(),
                digital_signature: Some("signature".to_string()),
            }),
            compression_flag: false,
        }
    }

    #[test]
    fn test_protected_canonical_order() {
        let payload = canonical_payload(&protected_metadata(), ProtocolVersion::V2).unwrap();
        assert_eq!(payload, "true.SECOM.dsa.thumbprint.certificate.signature.false");
    }

    #[test]
    fn test_unprotected_arity_is_stable() {
        // Seven segments with or without a signature value.
        let payload =
            canonical_payload(&ExchangeMetadata::unprotected(), ProtocolVersion::V2).unwrap();
        assert_eq!(payload, "false......false");
        assert_eq!(payload.split('.').count(), 7);
    }

    #[test]
    fn test_protection_requires_scheme() {
        let mut meta = protected_metadata();
        meta.protection_scheme = None;
        assert!(matches!(
            meta.validate(),
            Err(CoreError::ProtectionFieldMissing {
                field: "protectionScheme"
            })
        ));
    }

    #[test]
    fn test_protection_requires_signature_value() {
        let mut meta = protected_metadata();
        meta.digital_signature_value = None;
        assert!(matches!(
            meta.validate(),
            Err(CoreError::ProtectionFieldMissing {
                field: "digitalSignatureValue"
            })
        ));
    }

    #[test]
    fn test_protection_requires_signature_text() {
        let mut meta = protected_metadata();
        meta.digital_signature_value = Some(DigitalSignatureValue::unsigned("certificate"));
        assert!(matches!(
            meta.validate(),
            Err(CoreError::ProtectionFieldMissing {
                field: "digitalSignature"
            })
        ));
    }

    #[test]
    fn test_canonicalization_fails_fast_on_degraded_metadata() {
        let mut meta = protected_metadata();
        meta.digital_signature_reference = None;
        assert!(canonical_payload(&meta, ProtocolVersion::V2).is_err());
    }

    #[test]
    fn test_chain_certificate_keeps_legacy_rendering() {
        let mut meta = protected_metadata();
        meta.digital_signature_value = Some(DigitalSignatureValue {
            public_root_certificate_thumbprint: Some("thumbprint".to_string()),
            public_certificate: PublicCertificate::Chain(vec![
                "certA".to_string(),
                "certB".to_string(),
            ]),
            digital_signature: Some("signature".to_string()),
        });

        let payload = canonical_payload(&meta, ProtocolVersion::V1).unwrap();
        assert_eq!(
            payload,
            "true.SECOM.dsa.thumbprint.[certA, certB].signature.false"
        );
    }

    #[test]
    fn test_metadata_json_shape() {
        let json = serde_json::to_value(protected_metadata()).unwrap();
        assert_eq!(json["dataProtection"], true);
        assert_eq!(json["protectionScheme"], "SECOM");
        assert_eq!(json["digitalSignatureReference"], "dsa");
        assert_eq!(
            json["digitalSignatureValue"]["publicCertificate"],
            "certificate"
        );
        assert_eq!(json["compressionFlag"], false);
    }
}
