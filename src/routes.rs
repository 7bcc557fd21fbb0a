use axum::routing::post;
use axum::Router;

use crate::handlers::{create_payment_intent, method_not_allowed};
use crate::AppState;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/create-payment-intent",
            post(create_payment_intent).fallback(method_not_allowed),
        )
        .with_state(state)
}
