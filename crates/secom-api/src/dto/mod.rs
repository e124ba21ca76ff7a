//! Request/response DTOs for the protocol operations.
//!
//! Plain serde value objects, camelCase on the wire. The signable
//! envelopes themselves live in `secom-core`; these types wrap them with
//! the transport-only fields (the envelope signature, pagination, query
//! parameters).

mod access;
mod ack;
mod capability;
mod get;
mod key;
mod search;
mod subscription;
mod upload;

pub use access::{AccessNotificationObject, AccessRequestObject};
pub use ack::AcknowledgementObject;
pub use capability::{CapabilityObject, CapabilityResponse, ImplementedInterfaces};
pub use get::{
    DataResponse, GetParameters, GetResponse, GetSummaryResponse, PaginationObject, SummaryObject,
};
pub use key::{EncryptionKeyObject, EncryptionKeyRequestObject};
pub use search::{SearchFilterObject, SearchObjectResult, SearchResponse};
pub use subscription::{
    PingResponse, RemoveSubscriptionRequest, SubscriptionNotification, SubscriptionRequest,
    SubscriptionResponse,
};
pub use upload::{PublicKeyObject, UploadLinkObject, UploadObject};
