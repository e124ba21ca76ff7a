//! Subscription and ping DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use secom_core::{ContainerType, DataProductType, SubscriptionEventType};

/// Request to create a subscription. All criteria are optional; an empty
/// request subscribes to everything the caller may access.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_type: Option<ContainerType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_product_type: Option<DataProductType>,

    /// Subscribe to updates of one specific data item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_reference: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_version: Option<String>,

    /// Geographic filter, WKT.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<String>,

    /// UN/LOCODE area filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocode: Option<String>,

    #[serde(
        default,
        with = "secom_core::wire::strict_time::opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscription_period_start: Option<DateTime<Utc>>,

    #[serde(
        default,
        with = "secom_core::wire::strict_time::opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscription_period_end: Option<DateTime<Utc>>,
}

/// Response to a subscription creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponse {
    pub subscription_identifier: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Request to remove a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveSubscriptionRequest {
    pub subscription_identifier: Uuid,
}

/// Notification that a subscription's lifecycle changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionNotification {
    pub subscription_identifier: Uuid,
    pub event_type: SubscriptionEventType,
}

/// Response of the ping operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PingResponse {
    /// Last time this endpoint had a private interaction with the caller.
    #[serde(
        default,
        with = "secom_core::wire::strict_time::opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_private_interaction_time: Option<DateTime<Utc>>,
}
