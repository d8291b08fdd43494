//! HTTP clients for the Xendit APIs.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the shared types do not pull in `reqwest`.

mod disbursement;

pub use disbursement::DisbursementClient;

use reqwest::StatusCode;

use crate::errors::{DisbursementError, DisbursementErrorKind};
use crate::objects::error::ErrorPayload;

/// Header scoping a request to a sub-account.
pub const FOR_USER_ID_HEADER: &str = "for-user-id";

/// Errors produced by the SDK HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the request with a recognised error code.
    #[error("disbursement error: {0}")]
    Disbursement(#[from] DisbursementError),

    /// The API rejected the request with an error code this client does not
    /// map.
    #[error("api error: status {status}, {error_code}: {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        error_code: String,
        message: String,
        payload: serde_json::Value,
    },

    /// A non-2xx response whose body is not a well-formed error payload.
    #[error("unexpected response: status {status}, body: {body}")]
    UnexpectedResponse { status: u16, body: String },

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    /// The mapped error kind, if the API reported a known code.
    pub fn kind(&self) -> Option<DisbursementErrorKind> {
        match self {
            ClientError::Disbursement(e) => Some(e.kind),
            _ => None,
        }
    }

    /// The error body returned by the API, if it was well-formed.
    pub fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            ClientError::Disbursement(e) => Some(&e.payload),
            ClientError::Api { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

/// Turn a non-2xx response into the matching [`ClientError`].
pub(crate) fn map_error_response(status: StatusCode, body: String) -> ClientError {
    let Some((error, payload)) = ErrorPayload::parse(&body) else {
        tracing::warn!(%status, "error response without an error payload");
        return ClientError::UnexpectedResponse {
            status: status.as_u16(),
            body,
        };
    };

    tracing::warn!(%status, error_code = %error.error_code, "api returned an error");
    match DisbursementErrorKind::from_code(&error.error_code) {
        Some(kind) => {
            DisbursementError::new(kind, status.as_u16(), error.message, payload).into()
        }
        None => ClientError::Api {
            status: status.as_u16(),
            error_code: error.error_code,
            message: error.message,
            payload,
        },
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(map_error_response(status, body));
    }
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_code_maps_to_kind() {
        let body = json!({
            "error_code": "DUPLICATE_TRANSACTION_ERROR",
            "message": "Disbursement was duplicated"
        });
        let err = map_error_response(StatusCode::BAD_REQUEST, body.to_string());
        assert_eq!(
            err.kind(),
            Some(DisbursementErrorKind::DuplicateTransactionError)
        );
        let ClientError::Disbursement(inner) = &err else {
            panic!("expected a disbursement error, got {err:?}");
        };
        assert_eq!(inner.status, 400);
        assert_eq!(inner.message, "Disbursement was duplicated");
        assert_eq!(err.payload(), Some(&body));
    }

    #[test]
    fn test_unknown_code_falls_back_to_api_error() {
        let body = json!({
            "error_code": "API_VALIDATION_ERROR",
            "message": "Amount must be a number",
            "errors": [{ "field": "amount" }]
        });
        let err = map_error_response(StatusCode::BAD_REQUEST, body.to_string());
        assert!(err.kind().is_none());
        match &err {
            ClientError::Api {
                status,
                error_code,
                message,
                payload,
            } => {
                assert_eq!(*status, 400);
                assert_eq!(error_code, "API_VALIDATION_ERROR");
                assert_eq!(message, "Amount must be a number");
                assert_eq!(payload, &body);
            }
            other => panic!("expected an api error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_body_is_unexpected_response() {
        let err = map_error_response(StatusCode::BAD_GATEWAY, "Bad Gateway".to_string());
        match err {
            ClientError::UnexpectedResponse { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("expected an unexpected response, got {other:?}"),
        }
    }
}
