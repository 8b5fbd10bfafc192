use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::types::{Amount, TransactionId, TransactionKind};

/// Body of `PUT /transactions/{transaction_id}`.
///
/// Fields are optional here so that missing values produce a validation message instead of a
/// generic decoding failure.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PutTransactionRequest {
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(alias = "parent_id")]
    pub parent_id: Option<TransactionId>
}

impl PutTransactionRequest {
    /// Checks the structural rules the engine relies on: amount present and positive, type
    /// present and not blank.
    pub fn validate(self) -> Result<(Amount, TransactionKind, Option<TransactionId>), ApiError> {
        let Some(amount) = self.amount else {
            return Err(ApiError::validation("Amount is required"));
        };

        let amount = Amount::new(amount).map_err(|error| ApiError::validation(error.to_string()))?;

        let Some(kind) = self.kind else {
            return Err(ApiError::validation("Type is required"));
        };

        let kind = TransactionKind::new(kind).map_err(|error| ApiError::validation(error.to_string()))?;

        Ok((amount, kind, self.parent_id))
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PutTransactionResponse {
    pub status: String
}

impl PutTransactionResponse {
    pub fn ok() -> Self {
        Self { status: "ok".to_string() }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionIdsResponse {
    pub transaction_ids: Vec<TransactionId>
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SumResponse {
    pub sum: f64
}

/// Envelope attached to every failed request.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
    /// Local time formatted as `YYYY-MM-DDTHH:MM:SS`.
    pub timestamp: String
}
