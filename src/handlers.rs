use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::models::CreatePaymentIntentRequest;
use crate::{stripe, AppState};

/// `POST /create-payment-intent`: validate the body, forward to Stripe, relay
/// the result.
///
/// The body is parsed here rather than through the `Json` extractor so that
/// malformed JSON falls through to the internal-fault 500 instead of an
/// extractor rejection.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req: CreatePaymentIntentRequest = serde_json::from_slice(&body)?;
    let amount = req.amount_minor_units().ok_or(ApiError::InvalidAmount)?;
    let currency = req.currency();

    let secret = state
        .config
        .stripe_secret_key
        .as_deref()
        .ok_or(ApiError::MissingSecretKey)?;

    let intent = stripe::create_payment_intent(
        &state.http,
        &state.config.stripe_api_base,
        secret,
        amount,
        currency,
    )
    .await?;

    tracing::debug!(amount, currency, "payment intent created");
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        intent,
    )
        .into_response())
}

/// Method-router fallback for the endpoint: anything but `POST`.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
