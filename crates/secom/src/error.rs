//! Error types for the signing facade.

use thiserror::Error;

use secom_core::{CoreError, SignatureError};

/// Errors that can occur while signing or verifying exchange content.
#[derive(Debug, Error)]
pub enum Error {
    /// The object could not be canonicalized.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CoreError),

    /// The signer or verifier capability failed.
    #[error("signature error: {0}")]
    Signature(#[from] SignatureError),

    /// The recomputed canonical payload's signature did not verify.
    ///
    /// Never retried: a re-attempt with identical input reproduces the
    /// same failure.
    #[error("signature verification failed")]
    SignatureVerificationFailed,

    /// The bearer carries no payload to sign or verify.
    #[error("bearer has no payload")]
    MissingPayload,

    /// The bearer carries no metadata or no signature to verify against.
    #[error("bearer has no payload signature")]
    MissingPayloadSignature,
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, Error>;
