//! Error types for the SECOM core.

use thiserror::Error;

/// Errors raised while building a canonical signature payload.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A schema-mandatory field was unset at canonicalization time.
    ///
    /// This is a producer-side programming error: a degraded payload must
    /// never be silently signed.
    #[error("mandatory field not set: {field}")]
    MandatoryFieldMissing { field: &'static str },

    /// Exchange metadata asserts data protection but is missing one of the
    /// fields that become mandatory under protection.
    #[error("data protection asserted but {field} is not set")]
    ProtectionFieldMissing { field: &'static str },
}

/// Errors raised by the signing/verification capability.
#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("signing failed: {0}")]
    Signing(String),

    #[error("signature verification failed")]
    VerificationFailed,

    #[error("invalid certificate: {0}")]
    InvalidCertificate(String),

    #[error("malformed signature: {0}")]
    MalformedSignature(String),
}
