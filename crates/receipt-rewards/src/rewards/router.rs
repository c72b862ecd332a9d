use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::{error, info, warn};

use super::domain::Receipt;
use super::repository::ReceiptRepository;
use super::service::{ReceiptService, ReceiptServiceError};
use super::store::StoreError;

pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid.";
pub const RECEIPT_NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

/// Body returned after a receipt is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedReceiptResponse {
    pub id: String,
}

/// Body returned by a points lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointsResponse {
    pub points: u32,
}

/// Router builder exposing receipt submission and points lookup.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: ReceiptRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:receipt_id/points", get(points_handler::<R>))
        .with_state(service)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    let receipt = match payload {
        Ok(Json(receipt)) => receipt,
        Err(rejection) => {
            warn!(error = %rejection, "failed to decode receipt payload");
            return error_response(StatusCode::BAD_REQUEST, INVALID_RECEIPT_MESSAGE);
        }
    };

    match service.submit(receipt) {
        Ok(scored) => {
            info!(receipt_id = %scored.id(), points = scored.points(), "receipt processed");
            let body = ProcessedReceiptResponse {
                id: scored.id().to_string(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(ReceiptServiceError::ValidationFailed(_)) => {
            warn!("receipt rejected by validation");
            error_response(StatusCode::BAD_REQUEST, INVALID_RECEIPT_MESSAGE)
        }
        Err(ReceiptServiceError::Store(StoreError::AlreadyExists { id })) => {
            error!(receipt_id = %id, "generated receipt id collided with a stored receipt");
            error_response(StatusCode::CONFLICT, "receipt already exists")
        }
        Err(other) => {
            error!(error = %other, "receipt processing failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &other.to_string())
        }
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.find_receipt_by_id(&receipt_id) {
        Ok(scored) => {
            info!(receipt_id = %scored.id(), "receipt points fetched");
            let body = PointsResponse {
                points: scored.points(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(ReceiptServiceError::InvalidIdentifier(err)) => {
            warn!(error = %err, "malformed receipt id");
            error_response(StatusCode::NOT_FOUND, RECEIPT_NOT_FOUND_MESSAGE)
        }
        Err(ReceiptServiceError::Store(StoreError::NotFound { id })) => {
            warn!(receipt_id = %id, "receipt not found");
            error_response(StatusCode::NOT_FOUND, RECEIPT_NOT_FOUND_MESSAGE)
        }
        Err(other) => {
            error!(error = %other, "receipt lookup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &other.to_string())
        }
    }
}
