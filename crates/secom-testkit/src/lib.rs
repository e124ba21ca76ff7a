//! # SECOM Testkit
//!
//! Testing utilities for SECOM data exchange.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: deterministic envelopes, metadata, and signers for test
//!   scenarios
//! - **Generators**: proptest strategies for property-based testing
//! - **Golden vectors**: known inputs with expected canonical strings for
//!   cross-implementation verification
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the canonical form: every implementation must
//! produce the identical string for the same envelope.
//!
//! ```rust
//! use secom_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     let payload = vector.canonical_payload();
//!     assert_eq!(payload, vector.expected_payload);
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::TestFixture;
pub use generators::{upload_envelope_from_params, UploadEnvelopeParams};
pub use vectors::{all_vectors, GoldenVector};
