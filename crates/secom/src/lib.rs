//! # SECOM
//!
//! The unified API for SECOM data exchange: canonical signature payloads,
//! the envelope family, transport DTOs, and generic sign/verify
//! orchestration.
//!
//! ## Overview
//!
//! A producer builds an envelope, signs its canonical payload, and sends
//! envelope and signature together. A consumer recomputes the canonical
//! payload from the received fields and verifies the signature against it:
//! any field-order or encoding mismatch is a silent verification failure,
//! not a parse error. The canonicalization rules live in [`core`]; the
//! orchestration here is written once over the attribute and bearer
//! traits.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use secom::core::{Ed25519Signer, Ed25519Verifier, ProtocolVersion, SecomSigner};
//! use secom::{sign_envelope, verify_envelope};
//!
//! # fn example(envelope: secom::core::UploadEnvelope) -> secom::Result<()> {
//! let signer = Ed25519Signer::generate();
//!
//! let signature = sign_envelope(&envelope, ProtocolVersion::V2, &signer)?;
//! verify_envelope(
//!     &envelope,
//!     ProtocolVersion::V2,
//!     &Ed25519Verifier,
//!     &signature,
//!     signer.certificate(),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Re-exports
//!
//! - `secom::core` - canonicalization and the envelope data model
//! - `secom::api` - transport DTOs, service trait, exception classification

pub mod error;
pub mod signing;

// Re-export component crates
pub use secom_api as api;
pub use secom_core as core;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use signing::{sign_envelope, sign_payload, verify_envelope, verify_payload};

// Re-export commonly used core types
pub use secom_core::{
    canonical_payload, AckEnvelope, Envelope, EnvelopeKind, EnvelopeSeal, ExchangeMetadata,
    ProtocolVersion, SecomSigner, SecomVerifier, SignableAttributes, UploadEnvelope,
};
