//! Attribute sequences: the ordered field list behind every signature.
//!
//! A signable object contributes its fields in a fixed declared order. The
//! sequence is ephemeral: computed on demand, never persisted, regenerated
//! identically by producer and consumer. Nested signable objects are
//! spliced in place, so canonical strings nest without extra delimiters.

use chrono::{DateTime, Utc};

use crate::encode;
use crate::error::CoreError;
use crate::version::ProtocolVersion;

/// A signable object: contributes its attribute fields, in declared order,
/// to a canonical sequence.
///
/// The declared order is a versioned schema contract. No field may be
/// reordered, added, or removed without minting a new protocol version,
/// because old signatures must remain verifiable against their original
/// layout.
pub trait SignableAttributes {
    /// Append this object's encoded attributes to `seq`.
    ///
    /// Fails fast when a schema-mandatory field is unset; a degraded
    /// payload is never silently signed.
    fn append_attributes(
        &self,
        version: ProtocolVersion,
        seq: &mut AttributeSeq,
    ) -> Result<(), CoreError>;
}

/// Build the canonical signature payload for a signable object.
///
/// Pure and deterministic: the same object and version always yield a
/// byte-identical string.
pub fn canonical_payload(
    object: &impl SignableAttributes,
    version: ProtocolVersion,
) -> Result<String, CoreError> {
    let mut seq = AttributeSeq::new();
    object.append_attributes(version, &mut seq)?;
    Ok(seq.into_payload())
}

/// The ordered, encoded attribute sequence of one canonicalization pass.
#[derive(Debug, Default)]
pub struct AttributeSeq {
    segments: Vec<String>,
}

impl AttributeSeq {
    /// Start an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a string field as-is.
    pub fn push_text(&mut self, value: &str) {
        self.segments.push(value.to_string());
    }

    /// Append an optional string field; absent encodes to an empty segment.
    pub fn push_optional_text(&mut self, value: Option<&str>) {
        match value {
            Some(v) => self.push_text(v),
            None => self.push_absent(),
        }
    }

    /// Append a mandatory string field, failing fast when unset.
    pub fn push_mandatory_text(
        &mut self,
        field: &'static str,
        value: Option<&str>,
    ) -> Result<(), CoreError> {
        match value {
            Some(v) => {
                self.push_text(v);
                Ok(())
            }
            None => Err(CoreError::MandatoryFieldMissing { field }),
        }
    }

    /// Append a boolean field.
    pub fn push_bool(&mut self, value: bool) {
        self.segments.push(encode::encode_bool(value));
    }

    /// Append a numeric enum code.
    pub fn push_code(&mut self, code: u16) {
        self.segments.push(encode::encode_code(code));
    }

    /// Append an optional numeric enum code.
    pub fn push_optional_code(&mut self, code: Option<u16>) {
        match code {
            Some(c) => self.push_code(c),
            None => self.push_absent(),
        }
    }

    /// Append an unsigned integer field.
    pub fn push_uint(&mut self, value: u64) {
        self.segments.push(encode::encode_uint(value));
    }

    /// Append a timestamp, truncated to whole seconds.
    pub fn push_time(&mut self, value: DateTime<Utc>) {
        self.segments.push(encode::encode_time(value));
    }

    /// Append an optional timestamp.
    pub fn push_optional_time(&mut self, value: Option<DateTime<Utc>>) {
        match value {
            Some(t) => self.push_time(t),
            None => self.push_absent(),
        }
    }

    /// Append a binary payload as base64.
    pub fn push_bytes(&mut self, value: &[u8]) {
        self.segments.push(encode::encode_bytes(value));
    }

    /// Append an empty segment for an absent optional field.
    pub fn push_absent(&mut self) {
        self.segments.push(encode::encode_absent());
    }

    /// Splice a nested signable object's attributes in place.
    ///
    /// The nested object contributes its own fields at this position; no
    /// wrapping delimiter pair is introduced.
    pub fn splice(
        &mut self,
        nested: &impl SignableAttributes,
        version: ProtocolVersion,
    ) -> Result<(), CoreError> {
        nested.append_attributes(version, self)
    }

    /// Number of segments appended so far.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the sequence is still empty.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The encoded segments, in declared order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Join the sequence into the final canonical string.
    pub fn into_payload(self) -> String {
        encode::assemble(&self.segments)
    }
}
