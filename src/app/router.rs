use crate::handlers;
use crate::services::AppGateway;
use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Payment routes behind the API-key gate, plus an open health route.
pub fn build_router(api_key: String, gateway: Arc<AppGateway>) -> Router {
    let payment_routes = Router::new()
        .route("/api/payment/makepayment", post(handlers::payments::make_payment))
        .route(
            "/api/payment/getpaymentdetail/:payment_id",
            get(handlers::payments::get_payment_detail),
        )
        .layer(middleware::from_fn_with_state(
            api_key,
            handlers::auth::require_api_key,
        ))
        .with_state(gateway);

    Router::new()
        .route("/health", get(health_handler))
        .merge(payment_routes)
}

async fn health_handler() -> StatusCode {
    StatusCode::OK
}
