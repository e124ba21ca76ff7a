//! Upload envelope: the signable shape of a data upload.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attributes::{AttributeSeq, SignableAttributes};
use crate::error::CoreError;
use crate::metadata::ExchangeMetadata;
use crate::types::{AckRequest, ContainerType, DataProductType};
use crate::version::ProtocolVersion;

use super::EnvelopeSeal;

/// The signable fields of an upload.
///
/// Attribute order (frozen): data, containerType, dataProductType,
/// exchangeMetadata (spliced), fromSubscription, ackRequest,
/// ackEndpoint (V1 only), transactionIdentifier, seal. The V2 payload is
/// exactly 16 segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadEnvelope {
    /// The payload bytes (possibly compressed/encrypted upstream).
    #[serde(with = "crate::wire::base64_bytes")]
    pub data: Bytes,

    /// Container shape of the payload.
    pub container_type: ContainerType,

    /// Data product family of the payload.
    pub data_product_type: DataProductType,

    /// Protection/compression/signature state of the payload.
    pub exchange_metadata: ExchangeMetadata,

    /// Whether this upload was triggered by a subscription.
    pub from_subscription: bool,

    /// Acknowledgement behaviour requested from the consumer.
    pub ack_request: AckRequest,

    /// Where acknowledgements should be delivered. Legacy generation only;
    /// V2 dropped the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ack_endpoint: Option<String>,

    /// Transaction this upload belongs to.
    pub transaction_identifier: Uuid,

    /// Signer identification.
    #[serde(flatten)]
    pub seal: EnvelopeSeal,
}

impl SignableAttributes for UploadEnvelope {
    fn append_attributes(
        &self,
        version: ProtocolVersion,
        seq: &mut AttributeSeq,
    ) -> Result<(), CoreError> {
        seq.push_bytes(&self.data);
        seq.push_code(self.container_type.code());
        seq.push_text(self.data_product_type.name());
        seq.splice(&self.exchange_metadata, version)?;
        seq.push_bool(self.from_subscription);
        seq.push_code(self.ack_request.code());
        if version.is_legacy() {
            seq.push_optional_text(self.ack_endpoint.as_deref());
        }
        seq.push_text(&self.transaction_identifier.to_string());
        seq.splice(&self.seal, version)
    }
}
