//! Link envelope: the signable shape of an upload-by-reference.
//!
//! A link upload carries no payload bytes; the consumer fetches them later
//! through the get-by-link operation, within the advertised time to live.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attributes::{AttributeSeq, SignableAttributes};
use crate::error::CoreError;
use crate::metadata::ExchangeMetadata;
use crate::types::{AckRequest, ContainerType, DataProductType};
use crate::version::ProtocolVersion;

use super::EnvelopeSeal;

/// The signable fields of a link upload.
///
/// Attribute order (frozen): containerType, dataProductType,
/// exchangeMetadata (spliced), fromSubscription, ackRequest,
/// ackEndpoint (V1 only), transactionIdentifier, size, timeToLive, seal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkEnvelope {
    /// Container shape of the linked payload.
    pub container_type: ContainerType,

    /// Data product family of the linked payload.
    pub data_product_type: DataProductType,

    /// Protection/compression/signature state of the linked payload.
    pub exchange_metadata: ExchangeMetadata,

    /// Whether this link was produced by a subscription.
    pub from_subscription: bool,

    /// Acknowledgement behaviour requested from the consumer.
    pub ack_request: AckRequest,

    /// Acknowledgement delivery endpoint. Legacy generation only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ack_endpoint: Option<String>,

    /// Transaction the linked payload belongs to; also the get-by-link key.
    pub transaction_identifier: Uuid,

    /// Size of the linked payload in bytes.
    pub size: u64,

    /// Last instant the link is guaranteed to resolve.
    #[serde(with = "crate::wire::strict_time")]
    pub time_to_live: chrono::DateTime<chrono::Utc>,

    /// Signer identification.
    #[serde(flatten)]
    pub seal: EnvelopeSeal,
}

impl SignableAttributes for LinkEnvelope {
    fn append_attributes(
        &self,
        version: ProtocolVersion,
        seq: &mut AttributeSeq,
    ) -> Result<(), CoreError> {
        seq.push_code(self.container_type.code());
        seq.push_text(self.data_product_type.name());
        seq.splice(&self.exchange_metadata, version)?;
        seq.push_bool(self.from_subscription);
        seq.push_code(self.ack_request.code());
        if version.is_legacy() {
            seq.push_optional_text(self.ack_endpoint.as_deref());
        }
        seq.push_text(&self.transaction_identifier.to_string());
        seq.push_uint(self.size);
        seq.push_time(self.time_to_live);
        seq.splice(&self.seal, version)
    }
}
