//! The signing and verification capability.
//!
//! The cryptographic primitive is an injected collaborator: the core only
//! defines the message (the canonical payload) and the trait seam. A
//! production deployment plugs in an X.509/HSM-backed implementation;
//! implementations may block (remote keystores), so callers apply their
//! own timeout policy at this boundary. Canonicalization itself never
//! blocks.
//!
//! The reference implementation wraps Ed25519 and treats the certificate
//! string as the hex-encoded verifying key.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

use crate::error::SignatureError;
use crate::types::DigitalSignatureReference;

/// Produces signatures over canonical payloads.
pub trait SecomSigner: Send + Sync {
    /// Sign a canonical payload. Potentially blocking.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignatureError>;

    /// The algorithm this signer produces.
    fn algorithm(&self) -> DigitalSignatureReference;

    /// The signer's public certificate text.
    fn certificate(&self) -> &str;
}

/// Verifies signatures over canonical payloads.
pub trait SecomVerifier: Send + Sync {
    /// Verify `signature` over `message` against `certificate`.
    /// Potentially blocking.
    fn verify(
        &self,
        message: &[u8],
        signature: &[u8],
        certificate: &str,
    ) -> Result<(), SignatureError>;
}

/// Reference signer over Ed25519.
pub struct Ed25519Signer {
    signing_key: SigningKey,
    certificate: String,
}

impl Ed25519Signer {
    /// Generate a signer with a fresh random key.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self::from_signing_key(SigningKey::generate(&mut rng))
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self::from_signing_key(SigningKey::from_bytes(seed))
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let certificate = hex::encode(signing_key.verifying_key().to_bytes());
        Self {
            signing_key,
            certificate,
        }
    }

    /// The hex-encoded verifying key this signer advertises as its
    /// certificate.
    pub fn verifying_certificate(&self) -> &str {
        &self.certificate
    }
}

impl SecomSigner for Ed25519Signer {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignatureError> {
        Ok(self.signing_key.sign(message).to_bytes().to_vec())
    }

    fn algorithm(&self) -> DigitalSignatureReference {
        DigitalSignatureReference::Ed25519
    }

    fn certificate(&self) -> &str {
        &self.certificate
    }
}

/// Reference verifier over Ed25519.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ed25519Verifier;

impl SecomVerifier for Ed25519Verifier {
    fn verify(
        &self,
        message: &[u8],
        signature: &[u8],
        certificate: &str,
    ) -> Result<(), SignatureError> {
        let key_bytes: [u8; 32] = hex::decode(certificate)
            .map_err(|e| SignatureError::InvalidCertificate(e.to_string()))?
            .try_into()
            .map_err(|_| {
                SignatureError::InvalidCertificate("verifying key must be 32 bytes".into())
            })?;
        let verifying_key = VerifyingKey::from_bytes(&key_bytes)
            .map_err(|e| SignatureError::InvalidCertificate(e.to_string()))?;

        let sig_bytes: [u8; 64] = signature
            .try_into()
            .map_err(|_| SignatureError::MalformedSignature("signature must be 64 bytes".into()))?;
        let signature = Signature::from_bytes(&sig_bytes);

        verifying_key
            .verify(message, &signature)
            .map_err(|_| SignatureError::VerificationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_verify_roundtrip() {
        let signer = Ed25519Signer::from_seed(&[0x42; 32]);
        let message = b"canonical.payload.segments";

        let signature = signer.sign(message).unwrap();
        Ed25519Verifier
            .verify(message, &signature, signer.certificate())
            .expect("valid signature should verify");
    }

    #[test]
    fn test_tampered_message_fails() {
        let signer = Ed25519Signer::from_seed(&[0x42; 32]);
        let signature = signer.sign(b"canonical.payload").unwrap();

        let result = Ed25519Verifier.verify(b"canonical.payloaD", &signature, signer.certificate());
        assert!(matches!(result, Err(SignatureError::VerificationFailed)));
    }

    #[test]
    fn test_wrong_certificate_fails() {
        let signer = Ed25519Signer::from_seed(&[0x42; 32]);
        let other = Ed25519Signer::from_seed(&[0x43; 32]);
        let signature = signer.sign(b"message").unwrap();

        let result = Ed25519Verifier.verify(b"message", &signature, other.certificate());
        assert!(matches!(result, Err(SignatureError::VerificationFailed)));
    }

    #[test]
    fn test_malformed_certificate_rejected() {
        let result = Ed25519Verifier.verify(b"message", &[0u8; 64], "not-hex");
        assert!(matches!(result, Err(SignatureError::InvalidCertificate(_))));
    }

    #[test]
    fn test_malformed_signature_rejected() {
        let signer = Ed25519Signer::from_seed(&[0x42; 32]);
        let result = Ed25519Verifier.verify(b"message", &[0u8; 3], signer.certificate());
        assert!(matches!(result, Err(SignatureError::MalformedSignature(_))));
    }

    #[test]
    fn test_deterministic_from_seed() {
        let s1 = Ed25519Signer::from_seed(&[7; 32]);
        let s2 = Ed25519Signer::from_seed(&[7; 32]);
        assert_eq!(s1.certificate(), s2.certificate());
        assert_eq!(s1.sign(b"m").unwrap(), s2.sign(b"m").unwrap());
    }

    #[test]
    fn test_algorithm_reference() {
        let signer = Ed25519Signer::generate();
        assert_eq!(signer.algorithm(), DigitalSignatureReference::Ed25519);
    }
}
