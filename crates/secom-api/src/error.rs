//! The exception classification layer.
//!
//! One closed mapping from error kind to transport status code and
//! response body, consumed by every endpoint handler. The same kind maps
//! identically no matter which operation raised it; handlers never
//! restate the classification.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use secom_core::{CoreError, SignatureError};

/// Machine-readable response code distinguishing upload-path failures.
///
/// This is the one place granularity matters: a producer must be able to
/// tell "your signature is wrong" from "your JSON is malformed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ResponseCode {
    /// A required field was absent.
    MissingRequiredData = 0,
    /// The envelope or payload signature did not verify.
    FailedSignatureVerification = 1,
    /// The presented certificate was rejected.
    InvalidCertificate = 2,
    /// The payload failed schema validation.
    SchemaValidationError = 3,
}

impl ResponseCode {
    /// The declared numeric code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Parse from a numeric code.
    pub fn from_code(value: u16) -> Option<Self> {
        match value {
            0 => Some(Self::MissingRequiredData),
            1 => Some(Self::FailedSignatureVerification),
            2 => Some(Self::InvalidCertificate),
            3 => Some(Self::SchemaValidationError),
            _ => None,
        }
    }
}

impl Serialize for ResponseCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

impl<'de> Deserialize<'de> for ResponseCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u16::deserialize(deserializer)?;
        ResponseCode::from_code(code)
            .ok_or_else(|| de::Error::custom(format!("invalid response code: {code}")))
    }
}

/// The uniform response body: `{responseCode?, responseText}`.
///
/// Every error response uses this shape; upload and acknowledgement
/// success responses reuse it as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<ResponseCode>,
    pub response_text: String,
}

impl ResponseBody {
    /// A body with text only.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            response_code: None,
            response_text: text.into(),
        }
    }

    /// A body with a machine-readable code.
    pub fn coded(code: ResponseCode, text: impl Into<String>) -> Self {
        Self {
            response_code: Some(code),
            response_text: text.into(),
        }
    }
}

/// The closed set of error kinds every endpoint classifies into.
#[derive(Debug, Error)]
pub enum SecomError {
    /// Malformed or invalid request content (400, generic text).
    #[error("validation failed: {0}")]
    ValidationFailed(String),

    /// The caller may not access the requested information (403).
    #[error("not authorised: {0}")]
    NotAuthorised(String),

    /// The requested information does not exist (404).
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// Wrong transport method for the operation (405).
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    /// The interface is not implemented by this endpoint (501).
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// The envelope or payload signature did not verify (400, coded).
    /// Never retried: identical input reproduces the failure.
    #[error("signature verification failed")]
    SignatureVerificationFailed,

    /// The presented certificate was rejected (400, coded).
    #[error("invalid certificate: {0}")]
    InvalidCertificate(String),

    /// The uploaded payload failed schema validation (400, coded).
    #[error("schema validation failed: {0}")]
    SchemaValidation(String),

    /// Anything unclassified (500). The message is surfaced to the caller,
    /// a deliberate debuggability choice.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SecomError {
    /// The transport status and response body for this kind.
    ///
    /// This is the whole classification table; every handler goes through
    /// it, which is what keeps the mapping uniform across endpoints.
    pub fn classify(&self) -> (StatusCode, ResponseBody) {
        match self {
            Self::ValidationFailed(_) => {
                (StatusCode::BAD_REQUEST, ResponseBody::text("Bad Request"))
            }
            Self::NotAuthorised(_) => (
                StatusCode::FORBIDDEN,
                ResponseBody::text("Not authorized to requested information"),
            ),
            Self::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                ResponseBody::text(format!("Information with {resource} not found")),
            ),
            Self::MethodNotAllowed(_) => (
                StatusCode::METHOD_NOT_ALLOWED,
                ResponseBody::text("Method not allowed"),
            ),
            Self::NotImplemented(_) => (
                StatusCode::NOT_IMPLEMENTED,
                ResponseBody::text("Not implemented"),
            ),
            Self::SignatureVerificationFailed => (
                StatusCode::BAD_REQUEST,
                ResponseBody::coded(
                    ResponseCode::FailedSignatureVerification,
                    "Failed signature verification",
                ),
            ),
            Self::InvalidCertificate(_) => (
                StatusCode::BAD_REQUEST,
                ResponseBody::coded(ResponseCode::InvalidCertificate, "Invalid certificate"),
            ),
            Self::SchemaValidation(_) => (
                StatusCode::BAD_REQUEST,
                ResponseBody::coded(
                    ResponseCode::SchemaValidationError,
                    "Schema validation error",
                ),
            ),
            Self::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ResponseBody::text(message.clone()),
            ),
        }
    }
}

impl IntoResponse for SecomError {
    fn into_response(self) -> Response {
        let (status, body) = self.classify();

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::SignatureVerificationFailed | Self::InvalidCertificate(_) => {
                tracing::warn!(error = %self, "rejected signed content")
            }
            _ => {}
        }

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for SecomError {
    fn from(err: CoreError) -> Self {
        // A mandatory field missing at canonicalization time is a request
        // whose content cannot be signed or verified as presented.
        Self::ValidationFailed(err.to_string())
    }
}

impl From<SignatureError> for SecomError {
    fn from(err: SignatureError) -> Self {
        match err {
            SignatureError::VerificationFailed | SignatureError::MalformedSignature(_) => {
                Self::SignatureVerificationFailed
            }
            SignatureError::InvalidCertificate(msg) => Self::InvalidCertificate(msg),
            SignatureError::Signing(msg) => Self::Internal(msg),
        }
    }
}
