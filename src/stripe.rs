//! Outbound call to Stripe's payment-intents creation endpoint.

use axum::body::Bytes;

use crate::error::ApiError;

/// Create a payment intent via Stripe's REST API.
///
/// Issues a form-encoded `POST` authenticated with the bearer secret. A
/// non-2xx reply becomes [`ApiError::Upstream`] carrying the upstream status
/// and body text; a 2xx reply is returned as raw bytes, checked to parse as
/// JSON, so the caller can receive the upstream body verbatim.
pub async fn create_payment_intent(
    client: &reqwest::Client,
    api_base: &str,
    secret: &str,
    amount: i64,
    currency: &str,
) -> Result<Bytes, ApiError> {
    let url = format!("{}/v1/payment_intents", api_base.trim_end_matches('/'));
    let form = [
        ("amount", amount.to_string()),
        ("currency", currency.to_string()),
        ("automatic_payment_methods[enabled]", "true".to_string()),
    ];

    let resp = client
        .post(&url)
        .bearer_auth(secret)
        .form(&form)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await?;
        return Err(ApiError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    let body = resp.bytes().await?;
    serde_json::from_slice::<serde_json::Value>(&body)?;
    Ok(body)
}
