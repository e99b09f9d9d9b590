use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::warn;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Shared-secret gate in front of the payment routes. The gateway assumes
/// every call it receives has already passed this check.
pub async fn require_api_key(
    State(api_key): State<String>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if presented != Some(api_key.as_str()) {
        warn!("Rejected request with missing or invalid API key");
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(request).await)
}
