use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::models::payment::{PaymentDetail, PaymentRequest, PaymentResponse};
use crate::services::AppGateway;

pub async fn make_payment(
    State(gateway): State<Arc<AppGateway>>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<PaymentResponse>), StatusCode> {
    let request: PaymentRequest = match serde_json::from_value(payload) {
        Ok(request) => request,
        Err(e) => {
            error!("Invalid payment request: {}", e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    // Edge pre-check: structurally invalid requests never reach the bank.
    if !request.is_well_formed() {
        info!("Rejected structurally invalid payment request");
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    match gateway.submit_payment(Some(request)).await {
        Ok(Some(response)) => Ok((StatusCode::CREATED, Json(response))),
        Ok(None) => Err(StatusCode::UNPROCESSABLE_ENTITY),
        Err(e) => {
            error!("Error processing payment: {}", e);
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

pub async fn get_payment_detail(
    State(gateway): State<Arc<AppGateway>>,
    Path(payment_id): Path<Uuid>,
) -> Result<(StatusCode, Json<PaymentDetail>), StatusCode> {
    match gateway.get_payment_detail(payment_id).await {
        Ok(Some(detail)) => Ok((StatusCode::CREATED, Json(detail))),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            error!("Error fetching payment detail {}: {}", payment_id, e);
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}
