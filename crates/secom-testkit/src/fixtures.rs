//! Test fixtures: deterministic envelopes, metadata, and signers.

use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use secom_core::{
    AckEnvelope, AckRequest, AckType, ContainerType, DataProductType, DigitalSignatureReference,
    DigitalSignatureValue, Ed25519Signer, EnvelopeSeal, ExchangeMetadata, UploadEnvelope,
};

/// A deterministic test scenario: fixed signer, fixed clock, fixed ids.
pub struct TestFixture {
    pub signer: Ed25519Signer,
    pub signature_time: DateTime<Utc>,
    pub transaction_identifier: Uuid,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Fixture with the standard deterministic seed and clock.
    pub fn new() -> Self {
        Self {
            signer: Ed25519Signer::from_seed(&[0x42; 32]),
            signature_time: Utc.timestamp_opt(1_705_316_100, 0).unwrap(),
            transaction_identifier: Uuid::from_u128(0x1234_5678_9abc_def0_1234_5678_9abc_def0),
        }
    }

    /// The seal every fixture envelope carries.
    pub fn seal(&self) -> EnvelopeSeal {
        EnvelopeSeal::new(
            "envelopeCertificate",
            "envelopeThumbprint",
            self.signature_time,
        )
    }

    /// Protected metadata with the fixture's well-known signature value.
    pub fn protected_metadata(&self) -> ExchangeMetadata {
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

    /// The reference upload envelope used across the golden vectors.
    pub fn upload_envelope(&self) -> UploadEnvelope {
        UploadEnvelope {
            data: Bytes::from_static(b"data"),
            container_type: ContainerType::S100ExchangeSet,
            data_product_type: DataProductType::S101,
            exchange_metadata: self.protected_metadata(),
            from_subscription: false,
            ack_request: AckRequest::NoAck,
            ack_endpoint: None,
            transaction_identifier: self.transaction_identifier,
            seal: self.seal(),
        }
    }

    /// A positive delivery acknowledgement for the fixture transaction.
    pub fn ack_envelope(&self) -> AckEnvelope {
        AckEnvelope {
            created_at: Utc.timestamp_opt(1_705_316_000, 0).unwrap(),
            transaction_identifier: self.transaction_identifier,
            ack_type: AckType::Delivered,
            nack_type: None,
            seal: self.seal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secom_core::{canonical_payload, ProtocolVersion, SecomSigner};

    #[test]
    fn test_fixture_is_deterministic() {
        let f1 = TestFixture::new();
        let f2 = TestFixture::new();

        assert_eq!(f1.signer.certificate(), f2.signer.certificate());
        assert_eq!(
            canonical_payload(&f1.upload_envelope(), ProtocolVersion::V2).unwrap(),
            canonical_payload(&f2.upload_envelope(), ProtocolVersion::V2).unwrap()
        );
    }

    #[test]
    fn test_fixture_metadata_validates() {
        assert!(TestFixture::new().protected_metadata().validate().is_ok());
    }
}
