//! Golden vectors for cross-implementation verification.
//!
//! Every implementation must render these envelopes to the exact expected
//! canonical string. The vectors pin field order, null handling, time
//! truncation, base64 form, and the legacy chain rendering.

use bytes::Bytes;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use secom_core::{
    canonical_payload, AckEnvelope, AckRequest, AckType, ContainerType, DataProductType,
    DigitalSignatureReference, DigitalSignatureValue, Envelope, EnvelopeSeal, ExchangeMetadata,
    NackType, ProtocolVersion, PublicCertificate, PublicKeyEnvelope, UploadEnvelope,
};

/// A golden test vector: one envelope and its expected canonical string.
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The protocol version the envelope was produced under.
    pub version: ProtocolVersion,
    /// The envelope under test.
    pub envelope: Envelope,
    /// The exact canonical string every implementation must produce.
    pub expected_payload: &'static str,
}

impl GoldenVector {
    /// Render the vector's envelope to its canonical payload.
    pub fn canonical_payload(&self) -> String {
        canonical_payload(&self.envelope, self.version).expect("golden vectors canonicalize")
    }
}

fn seal() -> EnvelopeSeal {
    EnvelopeSeal::new(
        "envelopeCertificate",
        "envelopeThumbprint",
        Utc.timestamp_opt(1_705_316_100, 0).unwrap(),
    )
}

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

fn upload_envelope() -> UploadEnvelope {
    UploadEnvelope {
        data: Bytes::from_static(b"data"),
        container_type: ContainerType::S100ExchangeSet,
        data_product_type: DataProductType::S101,
        exchange_metadata: protected_metadata(),
        from_subscription: false,
        ack_request: AckRequest::NoAck,
        ack_endpoint: None,
        transaction_identifier: Uuid::from_u128(0x1234_5678_9abc_def0_1234_5678_9abc_def0),
        seal: seal(),
    }
}

/// Get all golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        // The 16-segment reference upload.
        GoldenVector {
            name: "upload_v2_protected",
            version: ProtocolVersion::V2,
            envelope: Envelope::Upload(upload_envelope()),
            expected_payload: "ZGF0YQ==.1.S101.true.SECOM.dsa.thumbprint.certificate.signature.false.false.0.12345678-9abc-def0-1234-56789abcdef0.envelopeCertificate.envelopeThumbprint.1705316100",
        },
        // Same envelope under the legacy layout: one extra empty segment
        // where ackEndpoint would sit.
        GoldenVector {
            name: "upload_v1_no_ack_endpoint",
            version: ProtocolVersion::V1,
            envelope: Envelope::Upload(upload_envelope()),
            expected_payload: "ZGF0YQ==.1.S101.true.SECOM.dsa.thumbprint.certificate.signature.false.false.0..12345678-9abc-def0-1234-56789abcdef0.envelopeCertificate.envelopeThumbprint.1705316100",
        },
        // Positive ack: unset nackType is an empty segment, never a word.
        GoldenVector {
            name: "ack_delivered",
            version: ProtocolVersion::V2,
            envelope: Envelope::Ack(AckEnvelope {
                created_at: Utc.timestamp_opt(1_705_316_000, 0).unwrap(),
                transaction_identifier: Uuid::from_u128(0x42),
                ack_type: AckType::Delivered,
                nack_type: None,
                seal: seal(),
            }),
            expected_payload: "1705316000.00000000-0000-0000-0000-000000000042.1..envelopeCertificate.envelopeThumbprint.1705316100",
        },
        // Nack with a schema error code.
        GoldenVector {
            name: "nack_schema_error",
            version: ProtocolVersion::V2,
            envelope: Envelope::Ack(AckEnvelope {
                created_at: Utc.timestamp_opt(1_705_316_000, 0).unwrap(),
                transaction_identifier: Uuid::from_u128(0x42),
                ack_type: AckType::Opened,
                nack_type: Some(NackType::SchemaValidationError),
                seal: seal(),
            }),
            expected_payload: "1705316000.00000000-0000-0000-0000-000000000042.2.3.envelopeCertificate.envelopeThumbprint.1705316100",
        },
        // Legacy certificate chain keeps the bracketed rendering.
        GoldenVector {
            name: "public_key_legacy_chain",
            version: ProtocolVersion::V1,
            envelope: Envelope::PublicKey(PublicKeyEnvelope {
                public_certificate: PublicCertificate::Chain(vec![
                    "certA".to_string(),
                    "certB".to_string(),
                ]),
                root_certificate_thumbprint: "rootThumbprint".to_string(),
                seal: seal(),
            }),
            expected_payload: "[certA, certB].rootThumbprint.envelopeCertificate.envelopeThumbprint.1705316100",
        },
    ]
}
