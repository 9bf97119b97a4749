use crate::AppState;
use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn initiate_payment(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    match state.payment_service.initiate(body).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn get_payment_status(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> impl IntoResponse {
    match state.payment_service.order_status(&transaction_id).await {
        Ok(status) => (StatusCode::OK, Json(status)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn receive_webhook(body: Bytes) -> Response {
    tracing::info!("phonepe webhook: {}", String::from_utf8_lossy(&body));

    Response::builder()
        .status(StatusCode::OK)
        .body(Body::from("OK"))
        .unwrap_or_else(|_| {
            tracing::error!("webhook ack failed");
            let mut resp = Response::new(Body::from("ERROR"));
            *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            resp
        })
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
