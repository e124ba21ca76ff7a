//! # SECOM API
//!
//! Transport-facing contracts for SECOM data exchange: the
//! request/response DTOs of every protocol operation, the service trait
//! they flow through, and the shared exception classification that maps
//! every error kind to its transport status code and response body.
//!
//! The HTTP binding itself (routing, content negotiation, OpenAPI) is an
//! external collaborator; this crate only defines what travels across it.

pub mod dto;
pub mod error;
pub mod service;

pub use dto::{
    AccessNotificationObject, AccessRequestObject, AcknowledgementObject, CapabilityObject,
    CapabilityResponse, DataResponse, EncryptionKeyObject, EncryptionKeyRequestObject,
    GetParameters, GetResponse, GetSummaryResponse, ImplementedInterfaces, PaginationObject,
    PingResponse, PublicKeyObject, RemoveSubscriptionRequest, SearchFilterObject,
    SearchObjectResult, SearchResponse, SubscriptionNotification, SubscriptionRequest,
    SubscriptionResponse, SummaryObject, UploadLinkObject, UploadObject,
};
pub use error::{ResponseBody, ResponseCode, SecomError};
pub use service::SecomService;
