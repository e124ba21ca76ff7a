//! Golden tests for cross-implementation verification.
//!
//! Every implementation of the exchange protocol must produce identical
//! canonical payloads for these envelopes, and a signature computed over a
//! canonical payload must verify against the payload recomputed from the
//! received fields.

use bytes::Bytes;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use secom::core::{
    AckRequest, ContainerType, DataProductType, Ed25519Signer, Ed25519Verifier, EnvelopeSeal,
    SecomSigner,
};
use secom::{
    canonical_payload, sign_envelope, verify_envelope, Error, ProtocolVersion, UploadEnvelope,
};
use secom_testkit::{all_vectors, TestFixture};

#[test]
fn golden_vectors_render_expected_payloads() {
    for vector in all_vectors() {
        assert_eq!(
            vector.canonical_payload(),
            vector.expected_payload,
            "canonical payload mismatch for '{}'",
            vector.name
        );
    }
}

#[test]
fn reference_upload_is_sixteen_segments_in_order() {
    let fixture = TestFixture::new();
    let payload = canonical_payload(&fixture.upload_envelope(), ProtocolVersion::V2).unwrap();

    let segments: Vec<&str> = payload.split('.').collect();
    assert_eq!(segments.len(), 16);
    assert_eq!(
        segments,
        vec![
            "ZGF0YQ==",
            "1",
            "S101",
            "true",
            "SECOM",
            "dsa",
            "thumbprint",
            "certificate",
            "signature",
            "false",
            "false",
            "0",
            "12345678-9abc-def0-1234-56789abcdef0",
            "envelopeCertificate",
            "envelopeThumbprint",
            "1705316100",
        ]
    );
}

#[test]
fn signature_stability_for_every_vector() {
    // The required law: sign(canonicalize(x)) verifies against
    // canonicalize(x). Round-tripping the envelope itself is not claimed.
    let signer = Ed25519Signer::from_seed(&[0x42; 32]);

    for vector in all_vectors() {
        let signature = sign_envelope(&vector.envelope, vector.version, &signer)
            .unwrap_or_else(|e| panic!("signing '{}' failed: {e}", vector.name));

        verify_envelope(
            &vector.envelope,
            vector.version,
            &Ed25519Verifier,
            &signature,
            signer.certificate(),
        )
        .unwrap_or_else(|e| panic!("verifying '{}' failed: {e}", vector.name));
    }
}

#[test]
fn tampered_field_fails_verification() {
    let fixture = TestFixture::new();
    let envelope = fixture.upload_envelope();
    let signature = sign_envelope(&envelope, ProtocolVersion::V2, &fixture.signer).unwrap();

    let mut tampered = envelope.clone();
    tampered.data = Bytes::from_static(b"tampered");

    let result = verify_envelope(
        &tampered,
        ProtocolVersion::V2,
        &Ed25519Verifier,
        &signature,
        fixture.signer.certificate(),
    );
    assert!(matches!(result, Err(Error::SignatureVerificationFailed)));
}

#[test]
fn version_mismatch_fails_verification() {
    // A verifier using the wrong field-order table recomputes a different
    // canonical payload; the mismatch surfaces as a verification failure,
    // not a parse error.
    let fixture = TestFixture::new();
    let envelope = fixture.upload_envelope();
    let signature = sign_envelope(&envelope, ProtocolVersion::V2, &fixture.signer).unwrap();

    let result = verify_envelope(
        &envelope,
        ProtocolVersion::V1,
        &Ed25519Verifier,
        &signature,
        fixture.signer.certificate(),
    );
    assert!(matches!(result, Err(Error::SignatureVerificationFailed)));
}

#[test]
fn signing_time_truncation_keeps_signatures_stable() {
    // Producer and verifier may hold the same instant at different
    // precision; whole-second truncation keeps the payloads identical.
    let fixture = TestFixture::new();
    let envelope = fixture.upload_envelope();

    let mut precise = envelope.clone();
    precise.seal = EnvelopeSeal::new(
        "envelopeCertificate",
        "envelopeThumbprint",
        Utc.timestamp_opt(1_705_316_100, 640_000_000).unwrap(),
    );

    assert_eq!(
        canonical_payload(&envelope, ProtocolVersion::V2).unwrap(),
        canonical_payload(&precise, ProtocolVersion::V2).unwrap()
    );
}

#[test]
fn degraded_envelope_is_never_signed() {
    // A protected envelope missing its payload signature must fail fast at
    // canonicalization, before any signing happens.
    let fixture = TestFixture::new();
    let mut envelope = fixture.upload_envelope();
    envelope
        .exchange_metadata
        .digital_signature_value
        .as_mut()
        .unwrap()
        .digital_signature = None;

    let result = sign_envelope(&envelope, ProtocolVersion::V2, &fixture.signer);
    assert!(matches!(result, Err(Error::Canonicalization(_))));
}

#[test]
fn construction_order_does_not_affect_payload() {
    // Order stability: the attribute order is declared by the schema, not
    // by the order fields were assigned.
    let fixture = TestFixture::new();
    let reference = fixture.upload_envelope();

    let mut rebuilt = UploadEnvelope {
        data: Bytes::new(),
        container_type: ContainerType::NoContainer,
        data_product_type: DataProductType::Other,
        exchange_metadata: secom::ExchangeMetadata::unprotected(),
        from_subscription: true,
        ack_request: AckRequest::DeliveredAck,
        ack_endpoint: None,
        transaction_identifier: Uuid::nil(),
        seal: fixture.seal(),
    };
    // Assign in reverse of the declared order.
    rebuilt.transaction_identifier = reference.transaction_identifier;
    rebuilt.ack_request = reference.ack_request;
    rebuilt.from_subscription = reference.from_subscription;
    rebuilt.exchange_metadata = reference.exchange_metadata.clone();
    rebuilt.data_product_type = reference.data_product_type;
    rebuilt.container_type = reference.container_type;
    rebuilt.data = reference.data.clone();

    assert_eq!(
        canonical_payload(&reference, ProtocolVersion::V2).unwrap(),
        canonical_payload(&rebuilt, ProtocolVersion::V2).unwrap()
    );
}
