//! Canonical field encoding for deterministic signature payloads.
//!
//! Every attribute of a signable object is rendered to text with the rules
//! in this module, then joined with [`DELIMITER`]. The encoding is the
//! signature's message: any divergence (order, null handling, time
//! precision, delimiter) silently breaks cross-implementation verification
//! rather than producing a parse error.
//!
//! **CRITICAL**: These rules are FROZEN. Changes break all existing
//! signatures.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};

/// The segment delimiter of the canonical string.
///
/// The assembler performs no escaping: validated field types (hex
/// thumbprints, enum codes, base64) cannot contain the delimiter. Any
/// future field admitting arbitrary text must add escaping upstream.
pub const DELIMITER: char = '.';

/// Canonical form of an unset optional field: the empty segment, never a
/// textual "null".
pub fn encode_absent() -> String {
    String::new()
}

/// Canonical form of a boolean: lowercase textual form.
pub fn encode_bool(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

/// Canonical form of a numeric enum code: decimal.
pub fn encode_code(code: u16) -> String {
    code.to_string()
}

/// Canonical form of an unsigned integer: decimal.
pub fn encode_uint(value: u64) -> String {
    value.to_string()
}

/// Canonical form of a timestamp: whole seconds since the Unix epoch,
/// decimal, truncated (never rounded).
///
/// Producers must truncate before signing as well (see
/// [`truncate_to_second`]); signatures computed moments apart desynchronize
/// otherwise.
pub fn encode_time(value: DateTime<Utc>) -> String {
    value.timestamp().to_string()
}

/// Drop sub-second precision from a timestamp.
pub fn truncate_to_second(value: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_opt(value.timestamp(), 0)
        .single()
        .expect("whole-second timestamp is always representable")
}

/// Canonical form of a binary payload: standard base64, padded, no line
/// breaks.
pub fn encode_bytes(value: &[u8]) -> String {
    BASE64_STANDARD.encode(value)
}

/// Canonical form of the legacy certificate chain.
///
/// The legacy generation rendered the multi-certificate array with the
/// runtime's default collection-to-string form. Already-issued signatures
/// bake that rendering in, so it is preserved byte-for-byte.
pub fn encode_certificate_chain(certificates: &[String]) -> String {
    format!("[{}]", certificates.join(", "))
}

/// Join encoded segments into the final canonical string.
pub fn assemble(segments: &[String]) -> String {
    segments.join(&DELIMITER.to_string())
}
