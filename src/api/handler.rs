use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::{error, info};

use crate::api::error::{ApiError, ApiResult};
use crate::api::server::AppState;
use crate::domain::ReceiptError;
use crate::models::{PointsResponse, Receipt, ReceiptIdResponse};

/// POST /receipts/process
/// Validates and scores a receipt, returning the id it was stored under
#[tracing::instrument(skip(state, payload), fields(endpoint = "process_receipt"))]
pub async fn process_receipt_handler(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> ApiResult<Json<ReceiptIdResponse>> {
    let Json(receipt) = payload.map_err(|e| {
        info!(error = %e, "Rejected malformed receipt body");
        ApiError::from(e)
    })?;

    match state.service.submit(&receipt).await {
        Ok(id) => Ok(Json(ReceiptIdResponse { id })),
        Err(e @ ReceiptError::IdentifierSpaceExhausted { .. }) => {
            error!(error = %e, "Could not allocate a receipt id");
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /receipts/{id}/points
/// Returns the points awarded to a previously processed receipt
#[tracing::instrument(skip(state), fields(endpoint = "get_points"))]
pub async fn get_points_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.service.points(&id).await?;
    Ok(Json(PointsResponse { points }))
}
