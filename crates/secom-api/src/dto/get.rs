//! Get / get-summary DTOs and their bearer implementations.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use secom_core::{
    AckRequest, ContainerType, DataProductType, DigitalSignatureBearer,
    DigitalSignatureCollectionBearer, ExchangeMetadata,
};

/// Query parameters of the get and get-summary operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_reference: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_type: Option<ContainerType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_product_type: Option<DataProductType>,

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
    pub valid_from: Option<DateTime<Utc>>,

    #[serde(
        default,
        with = "secom_core::wire::strict_time::opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub valid_to: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// One signed data item in a get response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse {
    /// The payload bytes, base64 on the wire.
    #[serde(
        default,
        with = "secom_core::wire::base64_bytes::opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Bytes>,

    /// Protection/compression/signature state of the payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_metadata: Option<ExchangeMetadata>,

    /// Acknowledgement behaviour requested from the consumer.
    #[serde(default)]
    pub ack_request: AckRequest,
}

impl DigitalSignatureBearer for DataResponse {
    fn payload(&self) -> Option<&Bytes> {
        self.data.as_ref()
    }

    fn set_payload(&mut self, data: Bytes) {
        self.data = Some(data);
    }

    fn exchange_metadata(&self) -> Option<&ExchangeMetadata> {
        self.exchange_metadata.as_ref()
    }

    fn exchange_metadata_mut(&mut self) -> Option<&mut ExchangeMetadata> {
        self.exchange_metadata.as_mut()
    }

    fn set_exchange_metadata(&mut self, metadata: ExchangeMetadata) {
        self.exchange_metadata = Some(metadata);
    }
}

/// Paging information of a windowed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationObject {
    /// Total items matching the query.
    pub total_items: u64,
    /// Server page-size cap.
    pub max_items_per_page: u32,
}

/// Response of the get operation: a page of signed data items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResponse {
    pub data_response_object: Vec<DataResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_text: Option<String>,
}

impl DigitalSignatureCollectionBearer for GetResponse {
    type Item = DataResponse;

    fn items(&self) -> &[DataResponse] {
        &self.data_response_object
    }

    fn set_items(&mut self, items: Vec<DataResponse>) {
        self.data_response_object = items;
    }
}

/// Metadata-only description of one available data item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryObject {
    pub data_reference: Uuid,
    pub data_protection: bool,
    pub data_compression: bool,
    pub container_type: ContainerType,
    pub data_product_type: DataProductType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_description: Option<String>,

    #[serde(
        default,
        with = "secom_core::wire::strict_time::opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub info_last_modified_date: Option<DateTime<Utc>>,

    /// Size of the payload in bytes, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_size: Option<u64>,
}

/// Response of the get-summary operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSummaryResponse {
    pub information_summary_object: Vec<SummaryObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_text: Option<String>,
}
