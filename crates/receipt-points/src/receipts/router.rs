use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::{ReceiptId, ReceiptSubmission};
use super::repository::{ReceiptRepository, RepositoryError};
use super::service::{ReceiptService, ReceiptServiceError};

/// Router builder exposing the receipt intake and points endpoints.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: ReceiptRepository + 'static,
{
    Router::new()
        .route("/receipts", get(list_handler::<R>))
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:id", get(receipt_handler::<R>))
        .route("/receipts/:id/points", get(points_handler::<R>))
        .route("/receipts/:id/breakdown", get(breakdown_handler::<R>))
        .with_state(service)
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<ReceiptService<R>>>) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.list() {
        Ok(receipts) => (StatusCode::OK, Json(receipts)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    payload: Result<Json<ReceiptSubmission>, JsonRejection>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    let Json(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return validation_response(rejection.body_text()),
    };

    match service.process(submission) {
        Ok(receipt) => (StatusCode::CREATED, Json(json!({ "id": receipt.id }))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn receipt_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.get(&ReceiptId(id)) {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.points(&ReceiptId(id)) {
        Ok(outcome) => {
            (StatusCode::OK, Json(json!({ "points": outcome.total_points }))).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn breakdown_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.points(&ReceiptId(id)) {
        Ok(outcome) => {
            let payload = json!({
                "id": outcome.receipt_id,
                "points": outcome.total_points,
                "breakdown": outcome.breakdown,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn validation_response(message: String) -> Response {
    let payload = json!({
        "error": "VALIDATEERROR",
        "message": message,
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

fn error_response(error: ReceiptServiceError) -> Response {
    let status = match &error {
        ReceiptServiceError::Validation(error) => return validation_response(error.to_string()),
        ReceiptServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ReceiptServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ReceiptServiceError::Scoring(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ReceiptServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
