//! The protocol service trait: one declaration of every endpoint
//! operation.
//!
//! Transport bindings (routing, content negotiation) live outside this
//! crate; they adapt requests into these calls and responses out of them.
//! Every operation returns the same error type, so the classification in
//! [`crate::error`] applies uniformly no matter which operation failed.

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use crate::dto::{
    AccessNotificationObject, AccessRequestObject, AcknowledgementObject, CapabilityResponse,
    EncryptionKeyObject, EncryptionKeyRequestObject, GetParameters, GetResponse,
    GetSummaryResponse, PingResponse, PublicKeyObject, RemoveSubscriptionRequest,
    SubscriptionNotification, SubscriptionRequest, SubscriptionResponse, UploadLinkObject,
    UploadObject,
};
use crate::error::{ResponseBody, SecomError};

/// The full protocol surface of one endpoint.
///
/// Implementations are free to answer any operation with
/// [`SecomError::NotImplemented`]; the capability operation advertises
/// which ones actually work.
#[async_trait]
pub trait SecomService: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────
    // Discovery
    // ─────────────────────────────────────────────────────────────────────────

    /// Advertise the implemented interfaces per data product.
    async fn capability(&self) -> Result<CapabilityResponse, SecomError>;

    /// Liveness and relationship probe.
    async fn ping(&self) -> Result<PingResponse, SecomError>;

    // ─────────────────────────────────────────────────────────────────────────
    // Data retrieval
    // ─────────────────────────────────────────────────────────────────────────

    /// Fetch a page of signed data items.
    async fn get(&self, parameters: GetParameters) -> Result<GetResponse, SecomError>;

    /// Fetch metadata summaries without payloads.
    async fn get_summary(&self, parameters: GetParameters)
        -> Result<GetSummaryResponse, SecomError>;

    /// Resolve a link upload to its payload bytes.
    async fn get_by_link(&self, transaction_identifier: Uuid) -> Result<Bytes, SecomError>;

    // ─────────────────────────────────────────────────────────────────────────
    // Data delivery
    // ─────────────────────────────────────────────────────────────────────────

    /// Receive an uploaded payload.
    async fn upload(&self, upload: UploadObject) -> Result<ResponseBody, SecomError>;

    /// Receive an upload-by-reference.
    async fn upload_link(&self, link: UploadLinkObject) -> Result<ResponseBody, SecomError>;

    /// Receive a delivery/read acknowledgement.
    async fn acknowledgement(
        &self,
        acknowledgement: AcknowledgementObject,
    ) -> Result<ResponseBody, SecomError>;

    // ─────────────────────────────────────────────────────────────────────────
    // Subscriptions
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a subscription.
    async fn subscription(
        &self,
        request: SubscriptionRequest,
    ) -> Result<SubscriptionResponse, SecomError>;

    /// Remove a subscription.
    async fn remove_subscription(
        &self,
        request: RemoveSubscriptionRequest,
    ) -> Result<ResponseBody, SecomError>;

    /// Receive a subscription lifecycle notification.
    async fn subscription_notification(
        &self,
        notification: SubscriptionNotification,
    ) -> Result<ResponseBody, SecomError>;

    // ─────────────────────────────────────────────────────────────────────────
    // Access and key management
    // ─────────────────────────────────────────────────────────────────────────

    /// Receive a request for access to protected data.
    async fn access(&self, request: AccessRequestObject) -> Result<ResponseBody, SecomError>;

    /// Receive the decision on a previous access request.
    async fn access_notification(
        &self,
        notification: AccessNotificationObject,
    ) -> Result<ResponseBody, SecomError>;

    /// Receive wrapped key material for a protected payload.
    async fn encryption_key(&self, key: EncryptionKeyObject) -> Result<ResponseBody, SecomError>;

    /// Receive a request for the content key of a protected payload.
    async fn request_encryption_key(
        &self,
        request: EncryptionKeyRequestObject,
    ) -> Result<ResponseBody, SecomError>;

    /// Receive a public key exchange message.
    async fn public_key(&self, key: PublicKeyObject) -> Result<ResponseBody, SecomError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    /// A service that implements nothing: every operation classifies
    /// identically through the shared error type.
    struct Unimplemented;

    #[async_trait]
    impl SecomService for Unimplemented {
        async fn capability(&self) -> Result<CapabilityResponse, SecomError> {
            Err(SecomError::NotImplemented("capability".into()))
        }

        async fn ping(&self) -> Result<PingResponse, SecomError> {
            Err(SecomError::NotImplemented("ping".into()))
        }

        async fn get(&self, _: GetParameters) -> Result<GetResponse, SecomError> {
            Err(SecomError::NotImplemented("get".into()))
        }

        async fn get_summary(&self, _: GetParameters) -> Result<GetSummaryResponse, SecomError> {
            Err(SecomError::NotImplemented("getSummary".into()))
        }

        async fn get_by_link(&self, _: Uuid) -> Result<Bytes, SecomError> {
            Err(SecomError::NotImplemented("getByLink".into()))
        }

        async fn upload(&self, _: UploadObject) -> Result<ResponseBody, SecomError> {
            Err(SecomError::NotImplemented("upload".into()))
        }

        async fn upload_link(&self, _: UploadLinkObject) -> Result<ResponseBody, SecomError> {
            Err(SecomError::NotImplemented("uploadLink".into()))
        }

        async fn acknowledgement(
            &self,
            _: AcknowledgementObject,
        ) -> Result<ResponseBody, SecomError> {
            Err(SecomError::NotImplemented("acknowledgement".into()))
        }

        async fn subscription(
            &self,
            _: SubscriptionRequest,
        ) -> Result<SubscriptionResponse, SecomError> {
            Err(SecomError::NotImplemented("subscription".into()))
        }

        async fn remove_subscription(
            &self,
            _: RemoveSubscriptionRequest,
        ) -> Result<ResponseBody, SecomError> {
            Err(SecomError::NotImplemented("removeSubscription".into()))
        }

        async fn subscription_notification(
            &self,
            _: SubscriptionNotification,
        ) -> Result<ResponseBody, SecomError> {
            Err(SecomError::NotImplemented("subscriptionNotification".into()))
        }

        async fn access(&self, _: AccessRequestObject) -> Result<ResponseBody, SecomError> {
            Err(SecomError::NotImplemented("access".into()))
        }

        async fn access_notification(
            &self,
            _: AccessNotificationObject,
        ) -> Result<ResponseBody, SecomError> {
            Err(SecomError::NotImplemented("accessNotification".into()))
        }

        async fn encryption_key(&self, _: EncryptionKeyObject) -> Result<ResponseBody, SecomError> {
            Err(SecomError::NotImplemented("encryptionKey".into()))
        }

        async fn request_encryption_key(
            &self,
            _: EncryptionKeyRequestObject,
        ) -> Result<ResponseBody, SecomError> {
            Err(SecomError::NotImplemented("requestEncryptionKey".into()))
        }

        async fn public_key(&self, _: PublicKeyObject) -> Result<ResponseBody, SecomError> {
            Err(SecomError::NotImplemented("publicKey".into()))
        }
    }

    #[tokio::test]
    async fn test_every_operation_classifies_identically() {
        // Exception-mapping law: the same error kind produces the same
        // status regardless of which operation raised it.
        let service = Unimplemented;

        let statuses = vec![
            service.capability().await.unwrap_err().classify().0,
            service.ping().await.unwrap_err().classify().0,
            service
                .get(GetParameters::default())
                .await
                .unwrap_err()
                .classify()
                .0,
            service
                .get_summary(GetParameters::default())
                .await
                .unwrap_err()
                .classify()
                .0,
            service
                .get_by_link(Uuid::from_u128(1))
                .await
                .unwrap_err()
                .classify()
                .0,
            service
                .subscription(SubscriptionRequest::default())
                .await
                .unwrap_err()
                .classify()
                .0,
            service
                .remove_subscription(RemoveSubscriptionRequest {
                    subscription_identifier: Uuid::from_u128(1),
                })
                .await
                .unwrap_err()
                .classify()
                .0,
        ];

        assert!(statuses.iter().all(|s| *s == StatusCode::NOT_IMPLEMENTED));
    }
}
