//! Protocol versioning.
//!
//! Two envelope field layouts exist in the wild. A verifier must know which
//! version produced an envelope to select the correct field-order table;
//! this is negotiated out of band (capability exchange), never inferred
//! from the payload itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The protocol generation an envelope was produced under.
///
/// The field order each version declares is frozen: previously issued
/// signatures must stay reproducible for the lifetime of the version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolVersion {
    /// Legacy generation. Upload and link envelopes carry `ackEndpoint`;
    /// wire timestamps use the compact form.
    V1,
    /// Current generation. `ackEndpoint` is gone; wire timestamps use the
    /// strict ISO form.
    V2,
}

impl ProtocolVersion {
    /// Whether this is the legacy generation.
    pub fn is_legacy(self) -> bool {
        matches!(self, ProtocolVersion::V1)
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolVersion::V1 => write!(f, "v1"),
            ProtocolVersion::V2 => write!(f, "v2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_flag() {
        assert!(ProtocolVersion::V1.is_legacy());
        assert!(!ProtocolVersion::V2.is_legacy());
    }

    #[test]
    fn test_display() {
        assert_eq!(ProtocolVersion::V1.to_string(), "v1");
        assert_eq!(ProtocolVersion::V2.to_string(), "v2");
    }
}
