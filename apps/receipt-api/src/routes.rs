//! HTTP handlers.
//!
//! ```text
//! POST /receipts/process       Receipt JSON   → {"id": "<uuid>"}
//! GET  /receipts/:id/points                   → {"points": n}
//! GET  /health                                → {"status": "ok"}
//! ```

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use receipt_core::{PointsResponse, ProcessReceiptResponse, Receipt};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::AppState;

/// POST /receipts/process
pub async fn process_receipt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessReceiptResponse>, ApiError> {
    let Json(receipt) = payload.map_err(|rejection| {
        debug!(%rejection, "rejected receipt body");
        ApiError::invalid_json()
    })?;

    let id = state.receipts.process_receipt(&receipt)?;
    info!(%id, retailer = %receipt.retailer, "receipt processed");

    Ok(Json(ProcessReceiptResponse { id: id.to_string() }))
}

/// GET /receipts/:id/points
pub async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = state.receipts.get_points(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
