//! Proptest generators for property-based testing.

use bytes::Bytes;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use uuid::Uuid;

use secom_core::{
    AckRequest, ContainerType, DataProductType, DigitalSignatureReference, DigitalSignatureValue,
    EnvelopeSeal, ExchangeMetadata, PublicCertificate, UploadEnvelope,
};

/// Generate a container type.
pub fn container_type() -> impl Strategy<Value = ContainerType> {
    prop_oneof![
        Just(ContainerType::S100DataSet),
        Just(ContainerType::S100ExchangeSet),
        Just(ContainerType::NoContainer),
    ]
}

/// Generate a data product type.
pub fn data_product_type() -> impl Strategy<Value = DataProductType> {
    prop_oneof![
        Just(DataProductType::S101),
        Just(DataProductType::S102),
        Just(DataProductType::S124),
        Just(DataProductType::S129),
        Just(DataProductType::Other),
    ]
}

/// Generate an ack request.
pub fn ack_request() -> impl Strategy<Value = AckRequest> {
    prop_oneof![
        Just(AckRequest::NoAck),
        Just(AckRequest::DeliveredAck),
        Just(AckRequest::OpenedAck),
        Just(AckRequest::DeliveredAndOpenedAck),
    ]
}

/// Generate a signature algorithm reference.
pub fn signature_reference() -> impl Strategy<Value = DigitalSignatureReference> {
    prop_oneof![
        Just(DigitalSignatureReference::Dsa),
        Just(DigitalSignatureReference::Ecdsa256Sha2256),
        Just(DigitalSignatureReference::Ecdsa384Sha2384),
        Just(DigitalSignatureReference::Ed25519),
    ]
}

/// Generate hex-looking text for thumbprints and signatures. Never
/// contains the canonical delimiter.
pub fn hex_text() -> impl Strategy<Value = String> {
    "[0-9a-f]{16,64}".prop_map(String::from)
}

/// Generate payload bytes up to the given length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a timestamp within the protocol's plausible range, with
/// sub-second precision to exercise truncation.
pub fn timestamp_with_subsec() -> impl Strategy<Value = (i64, u32)> {
    (0i64..=4_000_000_000i64, 0u32..1_000_000_000u32)
}

/// Generate protected exchange metadata.
pub fn protected_metadata() -> impl Strategy<Value = ExchangeMetadata> {
    (signature_reference(), hex_text(), hex_text(), any::<bool>()).prop_map(
        |(reference, thumbprint, signature, compression)| ExchangeMetadata {
            data_protection: true,
            protection_scheme: Some("SECOM".to_string()),
            digital_signature_reference: Some(reference),
            digital_signature_value: Some(DigitalSignatureValue {
                public_root_certificate_thumbprint: Some(thumbprint),
                public_certificate: PublicCertificate::Single("certificate".to_string()),
                digital_signature: Some(signature),
            }),
            compression_flag: compression,
        },
    )
}

/// Parameters for generating an upload envelope.
#[derive(Debug, Clone)]
pub struct UploadEnvelopeParams {
    pub payload: Vec<u8>,
    pub container_type: ContainerType,
    pub data_product_type: DataProductType,
    pub metadata: ExchangeMetadata,
    pub from_subscription: bool,
    pub ack_request: AckRequest,
    pub transaction: u128,
    pub signature_time_secs: i64,
    pub signature_time_nanos: u32,
}

impl Arbitrary for UploadEnvelopeParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            payload(256),
            container_type(),
            data_product_type(),
            protected_metadata(),
            any::<bool>(),
            ack_request(),
            any::<u128>(),
            timestamp_with_subsec(),
        )
            .prop_map(
                |(payload, container, product, metadata, from_sub, ack, txn, (secs, nanos))| {
                    UploadEnvelopeParams {
                        payload,
                        container_type: container,
                        data_product_type: product,
                        metadata,
                        from_subscription: from_sub,
                        ack_request: ack,
                        transaction: txn,
                        signature_time_secs: secs,
                        signature_time_nanos: nanos,
                    }
                },
            )
            .boxed()
    }
}

/// Build an upload envelope from generated parameters.
pub fn upload_envelope_from_params(params: &UploadEnvelopeParams) -> UploadEnvelope {
    let signature_time = Utc
        .timestamp_opt(params.signature_time_secs, params.signature_time_nanos)
        .single()
        .expect("generated timestamp is in range");

    UploadEnvelope {
        data: Bytes::from(params.payload.clone()),
        container_type: params.container_type,
        data_product_type: params.data_product_type,
        exchange_metadata: params.metadata.clone(),
        from_subscription: params.from_subscription,
        ack_request: params.ack_request,
        ack_endpoint: None,
        transaction_identifier: Uuid::from_u128(params.transaction),
        seal: EnvelopeSeal::new("envelopeCertificate", "envelopeThumbprint", signature_time),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secom_core::{canonical_payload, encode, ProtocolVersion};

    proptest! {
        #[test]
        fn test_canonical_payload_deterministic(params: UploadEnvelopeParams) {
            let e1 = upload_envelope_from_params(&params);
            let e2 = upload_envelope_from_params(&params);

            prop_assert_eq!(
                canonical_payload(&e1, ProtocolVersion::V2).unwrap(),
                canonical_payload(&e2, ProtocolVersion::V2).unwrap()
            );
        }

        #[test]
        fn test_v2_segment_arity_is_constant(params: UploadEnvelopeParams) {
            // The V2 upload layout is always 16 segments; optionality
            // never changes arity. Generated field values cannot contain
            // the delimiter.
            let envelope = upload_envelope_from_params(&params);
            let payload = canonical_payload(&envelope, ProtocolVersion::V2).unwrap();
            prop_assert_eq!(payload.split('.').count(), 16);
        }

        #[test]
        fn test_truncation_law((secs, nanos) in timestamp_with_subsec()) {
            let precise = Utc.timestamp_opt(secs, nanos).single().unwrap();
            let truncated = encode::truncate_to_second(precise);
            prop_assert_eq!(encode::encode_time(precise), encode::encode_time(truncated));
        }

        #[test]
        fn test_v1_layout_differs_only_by_ack_endpoint(params: UploadEnvelopeParams) {
            let envelope = upload_envelope_from_params(&params);
            let v1 = canonical_payload(&envelope, ProtocolVersion::V1).unwrap();
            let v2 = canonical_payload(&envelope, ProtocolVersion::V2).unwrap();

            // With no endpoint set, V1 inserts exactly one empty segment.
            prop_assert_eq!(v1.split('.').count(), 17);
            prop_assert_eq!(v2.split('.').count(), 16);
        }
    }

    proptest! {
        #[test]
        fn test_metadata_arity_constant(metadata in protected_metadata()) {
            let payload = canonical_payload(&metadata, ProtocolVersion::V2).unwrap();
            prop_assert_eq!(payload.split('.').count(), 7);
        }
    }
}
