//! # SECOM Core
//!
//! Pure primitives for SECOM data exchange: envelopes, exchange metadata,
//! and the canonical signature-payload algorithm.
//!
//! This crate contains no I/O and no transport types. It is pure
//! computation over immutable value objects: any number of threads may
//! canonicalize, sign, and verify concurrently with no shared state.
//!
//! ## Key Types
//!
//! - [`Envelope`] - The closed family of signable message shapes
//! - [`ExchangeMetadata`] - Protection/compression/signature state of a payload
//! - [`AttributeSeq`] - The ordered field sequence behind every signature
//! - [`ProtocolVersion`] - Selects the frozen field-order table
//!
//! ## Canonicalization
//!
//! Every signable object renders its fields, in a fixed declared order,
//! into a delimiter-joined string; the signature is computed over that
//! string and independently recomputed by every verifier. See [`encode`]
//! for the frozen field-encoding rules and [`attributes`] for the
//! sequence contract.

pub mod attributes;
pub mod bearer;
pub mod encode;
pub mod envelope;
pub mod error;
pub mod metadata;
pub mod signer;
pub mod types;
pub mod version;
pub mod wire;

pub use attributes::{canonical_payload, AttributeSeq, SignableAttributes};
pub use bearer::{DigitalSignatureBearer, DigitalSignatureCollectionBearer};
pub use encode::{truncate_to_second, DELIMITER};
pub use envelope::{
    AccessNotificationEnvelope, AccessRequestEnvelope, AckEnvelope, Envelope, EnvelopeKind,
    EnvelopeSeal, KeyNotificationEnvelope, KeyRequestEnvelope, LinkEnvelope, PublicKeyEnvelope,
    UploadEnvelope,
};
pub use error::{CoreError, SignatureError};
pub use metadata::{DigitalSignatureValue, ExchangeMetadata};
pub use signer::{Ed25519Signer, Ed25519Verifier, SecomSigner, SecomVerifier};
pub use types::{
    AckRequest, AckType, ContainerType, DataProductType, DigitalSignatureReference, NackType,
    PublicCertificate, SubscriptionEventType,
};
pub use version::ProtocolVersion;
