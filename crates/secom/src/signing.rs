//! Generic signing and verification over exchange content.
//!
//! Written once against the attribute and bearer traits: the same code
//! signs an upload envelope, an acknowledgement, or a paginated data
//! response without knowing the concrete type.
//!
//! Two signatures exist per protected upload: the payload signature
//! (stored inside the exchange metadata, computed over the raw payload
//! bytes) and the envelope signature (computed over the envelope's
//! canonical payload, carried next to the envelope in the transport
//! object). The payload is signed first, because its signature is one of
//! the envelope's canonical attributes.

use secom_core::{
    canonical_payload, DigitalSignatureBearer, DigitalSignatureValue, ProtocolVersion,
    SecomSigner, SecomVerifier, SignableAttributes,
};

use crate::error::{Error, Result};

/// Sign a signable object's canonical payload.
///
/// Returns the hex signature carried next to the envelope on the wire.
pub fn sign_envelope(
    object: &impl SignableAttributes,
    version: ProtocolVersion,
    signer: &dyn SecomSigner,
) -> Result<String> {
    let payload = canonical_payload(object, version)?;
    let signature = signer.sign(payload.as_bytes())?;
    Ok(hex::encode(signature))
}

/// Recompute a signable object's canonical payload and verify its
/// signature.
pub fn verify_envelope(
    object: &impl SignableAttributes,
    version: ProtocolVersion,
    verifier: &dyn SecomVerifier,
    signature_hex: &str,
    certificate: &str,
) -> Result<()> {
    let payload = canonical_payload(object, version)?;
    let signature = hex::decode(signature_hex).map_err(|_| Error::SignatureVerificationFailed)?;

    verifier
        .verify(payload.as_bytes(), &signature, certificate)
        .map_err(|e| match e {
            secom_core::SignatureError::VerificationFailed
            | secom_core::SignatureError::MalformedSignature(_) => {
                tracing::debug!(version = %version, "envelope signature mismatch");
                Error::SignatureVerificationFailed
            }
            other => Error::Signature(other),
        })
}

/// Sign a bearer's payload, storing the signature in its exchange
/// metadata.
///
/// Asserts data protection on the metadata and fills the signature value
/// with the signer's algorithm and certificate.
pub fn sign_payload<B: DigitalSignatureBearer>(
    bearer: &mut B,
    signer: &dyn SecomSigner,
) -> Result<()> {
    let data = bearer.payload().cloned().ok_or(Error::MissingPayload)?;
    let signature = hex::encode(signer.sign(&data)?);

    let mut metadata = bearer
        .exchange_metadata()
        .cloned()
        .unwrap_or_else(secom_core::ExchangeMetadata::unprotected);
    metadata.data_protection = true;
    metadata.protection_scheme = Some("SECOM".to_string());
    metadata.digital_signature_reference = Some(signer.algorithm());
    metadata.digital_signature_value = Some(DigitalSignatureValue {
        public_root_certificate_thumbprint: metadata
            .digital_signature_value
            .as_ref()
            .and_then(|v| v.public_root_certificate_thumbprint.clone()),
        public_certificate: signer.certificate().into(),
        digital_signature: Some(signature),
    });
    bearer.set_exchange_metadata(metadata);
    Ok(())
}

/// Verify a bearer's payload against the signature in its exchange
/// metadata.
pub fn verify_payload<B: DigitalSignatureBearer>(
    bearer: &B,
    verifier: &dyn SecomVerifier,
) -> Result<()> {
    let data = bearer.payload().ok_or(Error::MissingPayload)?;
    let value = bearer
        .exchange_metadata()
        .and_then(|m| m.digital_signature_value.as_ref())
        .ok_or(Error::MissingPayloadSignature)?;
    let signature_hex = value
        .digital_signature
        .as_deref()
        .ok_or(Error::MissingPayloadSignature)?;
    let signature = hex::decode(signature_hex).map_err(|_| Error::SignatureVerificationFailed)?;

    verifier
        .verify(
            data,
            &signature,
            &value.public_certificate.canonical_text(),
        )
        .map_err(|e| match e {
            secom_core::SignatureError::VerificationFailed
            | secom_core::SignatureError::MalformedSignature(_) => {
                Error::SignatureVerificationFailed
            }
            other => Error::Signature(other),
        })
}
