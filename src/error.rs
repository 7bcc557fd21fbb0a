use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors surfaced by the payment-intent endpoint, each mapping to one of the
/// contract's HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid amount (must be integer cents)")]
    InvalidAmount,

    #[error("Missing STRIPE_SECRET_KEY env var")]
    MissingSecretKey,

    /// Stripe rejected the request; relayed to the caller with the upstream
    /// status code and body text.
    #[error("stripe rejected request ({status}): {body}")]
    Upstream { status: u16, body: String },

    /// Any other fault: network failure, JSON parse failure.
    #[error("{0}")]
    Internal(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidAmount => StatusCode::BAD_REQUEST,
            ApiError::MissingSecretKey => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = match &self {
            ApiError::Upstream { status, body } => {
                tracing::warn!(status, "stripe rejected payment intent creation");
                body.clone()
            }
            ApiError::Internal(msg) => {
                tracing::error!("request failed: {msg}");
                msg.clone()
            }
            other => other.to_string(),
        };
        (self.status_code(), Json(ErrorResponse { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_contract_status_codes() {
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ApiError::InvalidAmount.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MissingSecretKey.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn upstream_status_passes_through() {
        let err = ApiError::Upstream {
            status: 402,
            body: "card declined".into(),
        };
        assert_eq!(err.status_code(), StatusCode::PAYMENT_REQUIRED);
    }

    #[tokio::test]
    async fn response_body_carries_the_message() {
        let resp = ApiError::InvalidAmount.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Invalid amount (must be integer cents)");
    }
}
