//! Access request/notification transport objects.

use serde::{Deserialize, Serialize};

use secom_core::{AccessNotificationEnvelope, AccessRequestEnvelope};

/// Request for access to protected data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequestObject {
    pub envelope: AccessRequestEnvelope,

    /// Hex signature over the envelope's canonical payload.
    pub envelope_signature: String,
}

/// Notification of the access decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessNotificationObject {
    pub envelope: AccessNotificationEnvelope,
    pub envelope_signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use secom_core::EnvelopeSeal;
    use uuid::Uuid;

    #[test]
    fn test_notification_roundtrip() {
        let object = AccessNotificationObject {
            envelope: AccessNotificationEnvelope {
                access_granted: true,
                data_reference: Uuid::from_u128(3),
                seal: EnvelopeSeal::new(
                    "cert",
                    "thumb",
                    Utc.timestamp_opt(1_705_316_100, 0).unwrap(),
                ),
            },
            envelope_signature: "beef".to_string(),
        };

        let json = serde_json::to_value(&object).unwrap();
        assert_eq!(json["envelope"]["accessGranted"], true);

        let back: AccessNotificationObject = serde_json::from_value(json).unwrap();
        assert_eq!(back, object);
    }
}
