use serde_json::Value;

/// Inbound body for `POST /create-payment-intent`.
///
/// `amount` stays a raw JSON value so that a float or string amount reaches
/// [`CreatePaymentIntentRequest::amount_minor_units`] and gets the
/// invalid-amount response instead of a deserialization rejection.
#[derive(serde::Deserialize)]
pub struct CreatePaymentIntentRequest {
    #[serde(default)]
    pub amount: Option<Value>,
    pub currency: Option<String>,
}

impl CreatePaymentIntentRequest {
    /// The amount in minor currency units, or `None` unless it is an integer
    /// strictly greater than zero.
    pub fn amount_minor_units(&self) -> Option<i64> {
        self.amount.as_ref()?.as_i64().filter(|n| *n > 0)
    }

    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or("usd")
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> CreatePaymentIntentRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn accepts_positive_integer_amounts() {
        assert_eq!(parse(r#"{"amount":500}"#).amount_minor_units(), Some(500));
        assert_eq!(parse(r#"{"amount":1}"#).amount_minor_units(), Some(1));
    }

    #[test]
    fn rejects_non_positive_and_non_integer_amounts() {
        assert_eq!(parse(r#"{"amount":0}"#).amount_minor_units(), None);
        assert_eq!(parse(r#"{"amount":-500}"#).amount_minor_units(), None);
        assert_eq!(parse(r#"{"amount":4.99}"#).amount_minor_units(), None);
        assert_eq!(parse(r#"{"amount":"500"}"#).amount_minor_units(), None);
        assert_eq!(parse(r#"{"amount":null}"#).amount_minor_units(), None);
        assert_eq!(parse(r#"{}"#).amount_minor_units(), None);
    }

    #[test]
    fn currency_defaults_to_usd() {
        assert_eq!(parse(r#"{"amount":500}"#).currency(), "usd");
        assert_eq!(parse(r#"{"amount":500,"currency":"eur"}"#).currency(), "eur");
    }
}
