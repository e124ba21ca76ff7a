//! Wire (JSON) field formats.
//!
//! Timestamps on the wire use one of two generation-specific text forms;
//! binary payloads travel as base64 strings. The canonical signature form
//! of a timestamp is epoch seconds (see [`crate::encode`]) and is
//! independent of the wire form by construction: re-serializing a payload
//! under either generation never changes its signature.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use bytes::Bytes;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Compact timestamp form of the legacy generation:
/// `yyyyMMdd'T'HHmmss` followed by `Z` or a `±hhmm` offset.
pub mod compact_time {
    use super::*;

    const FORMAT: &str = "%Y%m%dT%H%M%S";

    pub(super) fn format(value: &DateTime<Utc>) -> String {
        format!("{}Z", value.format(FORMAT))
    }

    pub(super) fn parse(text: &str) -> Result<DateTime<Utc>, String> {
        if let Some(naive) = text.strip_suffix('Z') {
            return NaiveDateTime::parse_from_str(naive, FORMAT)
                .map(|n| n.and_utc())
                .map_err(|e| e.to_string());
        }
        DateTime::parse_from_str(text, "%Y%m%dT%H%M%S%z")
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| e.to_string())
    }

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(de::Error::custom)
    }

    /// `Option<DateTime<Utc>>` variant.
    pub mod opt {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(t) => serializer.serialize_str(&format(t)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            let text: Option<String> = Option::deserialize(deserializer)?;
            text.map(|t| parse(&t).map_err(de::Error::custom))
                .transpose()
        }
    }
}

/// Strict timestamp form of the current generation:
/// `yyyy-MM-dd'T'HH:mm:ss'Z'`, UTC only.
pub mod strict_time {
    use super::*;

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub(super) fn format(value: &DateTime<Utc>) -> String {
        format!("{}Z", value.format(FORMAT))
    }

    pub(super) fn parse(text: &str) -> Result<DateTime<Utc>, String> {
        let naive = text
            .strip_suffix('Z')
            .ok_or_else(|| format!("timestamp must end in 'Z': {text}"))?;
        NaiveDateTime::parse_from_str(naive, FORMAT)
            .map(|n| n.and_utc())
            .map_err(|e| e.to_string())
    }

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(de::Error::custom)
    }

    /// `Option<DateTime<Utc>>` variant.
    pub mod opt {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(t) => serializer.serialize_str(&format(t)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            let text: Option<String> = Option::deserialize(deserializer)?;
            text.map(|t| parse(&t).map_err(de::Error::custom))
                .transpose()
        }
    }
}

/// Binary payload fields as base64 strings.
pub mod base64_bytes {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64_STANDARD.encode(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Bytes, D::Error> {
        let text = String::deserialize(deserializer)?;
        BASE64_STANDARD
            .decode(text.as_bytes())
            .map(Bytes::from)
            .map_err(de::Error::custom)
    }

    /// `Option<Bytes>` variant.
    pub mod opt {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<Bytes>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(b) => serializer.serialize_str(&BASE64_STANDARD.encode(b)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Bytes>, D::Error> {
            let text: Option<String> = Option::deserialize(deserializer)?;
            text.map(|t| {
                BASE64_STANDARD
                    .decode(t.as_bytes())
                    .map(Bytes::from)
                    .map_err(de::Error::custom)
            })
            .transpose()
        }
    }
}
