use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use tracing::debug;

use crate::api::dto::{PutTransactionRequest, PutTransactionResponse, SumResponse, TransactionIdsResponse};
use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::types::TransactionId;

const TRANSACTION_ID: &str = "transactionId";

fn transaction_id(path: Result<Path<TransactionId>, PathRejection>) -> Result<TransactionId, ApiError> {
    path.map(|Path(transaction_id)| transaction_id).map_err(|rejection| {
        debug!("Rejected transaction id: {rejection}");
        ApiError::invalid_parameter(TRANSACTION_ID)
    })
}

/// `PUT /transactions/{transaction_id}`
pub async fn put_transaction(
    State(state): State<AppState>,
    path: Result<Path<TransactionId>, PathRejection>,
    body: Result<Json<PutTransactionRequest>, JsonRejection>
) -> Result<Json<PutTransactionResponse>, ApiError> {
    let transaction_id = transaction_id(path)?;
    let Json(request) = body.map_err(|rejection| ApiError::validation(rejection.body_text()))?;
    let (amount, kind, parent_id) = request.validate()?;

    state.engine.create_transaction(transaction_id, amount, kind, parent_id)?;

    Ok(Json(PutTransactionResponse::ok()))
}

/// `GET /transactions/types/{kind}`
pub async fn get_transactions_by_type(
    State(state): State<AppState>,
    Path(kind): Path<String>
) -> Json<TransactionIdsResponse> {
    let transaction_ids = state.engine.list_ids_by_kind(&kind);

    Json(TransactionIdsResponse { transaction_ids })
}

/// `GET /transactions/sum/{transaction_id}`
pub async fn get_transaction_sum(
    State(state): State<AppState>,
    path: Result<Path<TransactionId>, PathRejection>
) -> Result<Json<SumResponse>, ApiError> {
    let transaction_id = transaction_id(path)?;
    let sum = state.engine.sum_subtree(transaction_id)?;

    Ok(Json(SumResponse { sum }))
}
