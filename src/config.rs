use std::env;
use std::net::SocketAddr;

pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Process configuration, read once at startup and immutable afterwards.
#[derive(Clone)]
pub struct Config {
    /// Stripe secret key. Left optional here: a missing key is a deployment
    /// fault reported per-request as a 500, not a startup panic.
    pub stripe_secret_key: Option<String>,
    /// Base URL of the Stripe API. Overridable so tests can point the
    /// gateway at a local mock.
    pub stripe_api_base: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            stripe_secret_key: env::var("STRIPE_SECRET_KEY").ok(),
            stripe_api_base: env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| DEFAULT_STRIPE_API_BASE.to_string()),
            bind_addr: env::var("BIND_ADDR")
                .ok()
                .and_then(|addr| addr.parse().ok())
                .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000))),
        }
    }
}
