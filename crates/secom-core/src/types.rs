//! Protocol enumerations.
//!
//! The numeric-coded enums travel as their decimal code both on the wire
//! and in the canonical string; the name-coded enums travel by declared
//! name. Codes and names are frozen per protocol version.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Shape of the payload container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ContainerType {
    /// A single S-100 dataset.
    S100DataSet = 0,
    /// An S-100 exchange set.
    S100ExchangeSet = 1,
    /// Payload carried outside an S-100 container.
    NoContainer = 2,
}

impl ContainerType {
    /// The declared numeric code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Parse from a numeric code.
    pub fn from_code(value: u16) -> Option<Self> {
        match value {
            0 => Some(Self::S100DataSet),
            1 => Some(Self::S100ExchangeSet),
            2 => Some(Self::NoContainer),
            _ => None,
        }
    }
}

/// Acknowledgement behaviour requested by an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum AckRequest {
    /// No acknowledgement expected.
    #[default]
    NoAck = 0,
    /// Confirm delivery.
    DeliveredAck = 1,
    /// Confirm the payload was opened.
    OpenedAck = 2,
    /// Confirm both delivery and opening.
    DeliveredAndOpenedAck = 3,
}

impl AckRequest {
    /// The declared numeric code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Parse from a numeric code.
    pub fn from_code(value: u16) -> Option<Self> {
        match value {
            0 => Some(Self::NoAck),
            1 => Some(Self::DeliveredAck),
            2 => Some(Self::OpenedAck),
            3 => Some(Self::DeliveredAndOpenedAck),
            _ => None,
        }
    }
}

/// Positive acknowledgement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum AckType {
    /// The payload reached the consumer.
    Delivered = 1,
    /// The consumer opened the payload.
    Opened = 2,
}

impl AckType {
    /// The declared numeric code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Parse from a numeric code.
    pub fn from_code(value: u16) -> Option<Self> {
        match value {
            1 => Some(Self::Delivered),
            2 => Some(Self::Opened),
            _ => None,
        }
    }
}

/// Negative acknowledgement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum NackType {
    /// Unspecified failure.
    UnknownError = 0,
    /// The payload never reached the consumer.
    NotDelivered = 1,
    /// The consumer could not open the payload.
    NotOpened = 2,
    /// The payload failed schema validation.
    SchemaValidationError = 3,
}

impl NackType {
    /// The declared numeric code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Parse from a numeric code.
    pub fn from_code(value: u16) -> Option<Self> {
        match value {
            0 => Some(Self::UnknownError),
            1 => Some(Self::NotDelivered),
            2 => Some(Self::NotOpened),
            3 => Some(Self::SchemaValidationError),
            _ => None,
        }
    }
}

/// Subscription lifecycle event carried by a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum SubscriptionEventType {
    /// Subscription was created.
    Created = 1,
    /// Subscription was removed.
    Removed = 2,
}

impl SubscriptionEventType {
    /// The declared numeric code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Parse from a numeric code.
    pub fn from_code(value: u16) -> Option<Self> {
        match value {
            1 => Some(Self::Created),
            2 => Some(Self::Removed),
            _ => None,
        }
    }
}

/// S-100 data product family of a payload.
///
/// Encoded and serialized by declared name, original case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataProductType {
    S57,
    S100,
    S101,
    S102,
    S104,
    S111,
    S122,
    S123,
    S124,
    S125,
    S126,
    S127,
    S128,
    S129,
    S131,
    #[serde(rename = "OTHER")]
    Other,
}

impl DataProductType {
    /// The declared name used on the wire and in the canonical string.
    pub fn name(self) -> &'static str {
        match self {
            Self::S57 => "S57",
            Self::S100 => "S100",
            Self::S101 => "S101",
            Self::S102 => "S102",
            Self::S104 => "S104",
            Self::S111 => "S111",
            Self::S122 => "S122",
            Self::S123 => "S123",
            Self::S124 => "S124",
            Self::S125 => "S125",
            Self::S126 => "S126",
            Self::S127 => "S127",
            Self::S128 => "S128",
            Self::S129 => "S129",
            Self::S131 => "S131",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for DataProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signature algorithm reference.
///
/// All algorithm references are lower-case, in the canonical string and on
/// the wire alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigitalSignatureReference {
    #[serde(rename = "dsa")]
    Dsa,
    #[serde(rename = "ecdsa-256-sha2-256")]
    Ecdsa256Sha2256,
    #[serde(rename = "ecdsa-384-sha2-384")]
    Ecdsa384Sha2384,
    #[serde(rename = "cvc_ecdsa")]
    CvcEcdsa,
    #[serde(rename = "ed25519")]
    Ed25519,
}

impl DigitalSignatureReference {
    /// The lower-case canonical name.
    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::Dsa => "dsa",
            Self::Ecdsa256Sha2256 => "ecdsa-256-sha2-256",
            Self::Ecdsa384Sha2384 => "ecdsa-384-sha2-384",
            Self::CvcEcdsa => "cvc_ecdsa",
            Self::Ed25519 => "ed25519",
        }
    }
}

impl fmt::Display for DigitalSignatureReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// A public certificate: a single PEM string, or the legacy multi-entry
/// chain form still accepted for verification of old envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublicCertificate {
    /// One certificate.
    Single(String),
    /// Legacy certificate chain.
    Chain(Vec<String>),
}

impl PublicCertificate {
    /// Canonical text of the certificate field.
    ///
    /// A chain keeps the legacy bracketed rendering; already-issued
    /// signatures depend on it byte-for-byte.
    pub fn canonical_text(&self) -> String {
        match self {
            Self::Single(cert) => cert.clone(),
            Self::Chain(certs) => crate::encode::encode_certificate_chain(certs),
        }
    }
}

impl From<String> for PublicCertificate {
    fn from(cert: String) -> Self {
        Self::Single(cert)
    }
}

impl From<&str> for PublicCertificate {
    fn from(cert: &str) -> Self {
        Self::Single(cert.to_string())
    }
}

// Numeric-coded enums travel as their decimal code in JSON. Serde is
// written out against code()/from_code so the wire form and the canonical
// form can never drift apart.
macro_rules! numeric_code_serde {
    ($ty:ident) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u16(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = u16::deserialize(deserializer)?;
                $ty::from_code(code).ok_or_else(|| {
                    de::Error::custom(format!(
                        concat!("invalid ", stringify!($ty), " code: {}"),
                        code
                    ))
                })
            }
        }
    };
}

numeric_code_serde!(ContainerType);
numeric_code_serde!(AckRequest);
numeric_code_serde!(AckType);
numeric_code_serde!(NackType);
numeric_code_serde!(SubscriptionEventType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for ct in [
            ContainerType::S100DataSet,
            ContainerType::S100ExchangeSet,
            ContainerType::NoContainer,
        ] {
            assert_eq!(ContainerType::from_code(ct.code()), Some(ct));
        }
        for ar in [
            AckRequest::NoAck,
            AckRequest::DeliveredAck,
            AckRequest::OpenedAck,
            AckRequest::DeliveredAndOpenedAck,
        ] {
            assert_eq!(AckRequest::from_code(ar.code()), Some(ar));
        }
        for nt in [
            NackType::UnknownError,
            NackType::NotDelivered,
            NackType::NotOpened,
            NackType::SchemaValidationError,
        ] {
            assert_eq!(NackType::from_code(nt.code()), Some(nt));
        }
    }

    #[test]
    fn test_unknown_codes_rejected() {
        assert_eq!(ContainerType::from_code(99), None);
        assert_eq!(AckType::from_code(0), None);
        assert_eq!(SubscriptionEventType::from_code(3), None);
    }

    #[test]
    fn test_numeric_wire_form() {
        let json = serde_json::to_string(&ContainerType::S100ExchangeSet).unwrap();
        assert_eq!(json, "1");

        let parsed: AckRequest = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, AckRequest::DeliveredAndOpenedAck);

        let bad: Result<NackType, _> = serde_json::from_str("42");
        assert!(bad.is_err());
    }

    #[test]
    fn test_data_product_name_wire_form() {
        let json = serde_json::to_string(&DataProductType::S101).unwrap();
        assert_eq!(json, "\"S101\"");

        let parsed: DataProductType = serde_json::from_str("\"OTHER\"").unwrap();
        assert_eq!(parsed, DataProductType::Other);
    }

    #[test]
    fn test_signature_reference_lower_case() {
        assert_eq!(DigitalSignatureReference::Dsa.canonical_name(), "dsa");
        assert_eq!(
            DigitalSignatureReference::Ecdsa256Sha2256.canonical_name(),
            "ecdsa-256-sha2-256"
        );

        let json = serde_json::to_string(&DigitalSignatureReference::CvcEcdsa).unwrap();
        assert_eq!(json, "\"cvc_ecdsa\"");
    }

    #[test]
    fn test_certificate_single_canonical_text() {
        let cert = PublicCertificate::from("certificate");
        assert_eq!(cert.canonical_text(), "certificate");
    }

    #[test]
    fn test_certificate_chain_legacy_rendering() {
        let chain = PublicCertificate::Chain(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(chain.canonical_text(), "[a, b]");
    }

    #[test]
    fn test_certificate_untagged_serde() {
        let single: PublicCertificate = serde_json::from_str("\"cert\"").unwrap();
        assert_eq!(single, PublicCertificate::Single("cert".to_string()));

        let chain: PublicCertificate = serde_json::from_str("[\"a\",\"b\"]").unwrap();
        assert_eq!(
            chain,
            PublicCertificate::Chain(vec!["a".to_string(), "b".to_string()])
        );
    }
}
