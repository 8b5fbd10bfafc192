//! HTTP boundary.
//!
//! Decodes and validates requests, calls into the [`AggregationEngine`] and maps its outcomes to
//! status codes and a timestamped error envelope.

mod dto;
mod errors;
mod handlers;

use std::sync::Arc;

use axum::routing::{get, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::engine::AggregationEngine;

pub use dto::{ErrorResponse, PutTransactionRequest, PutTransactionResponse, SumResponse, TransactionIdsResponse};
pub use errors::ApiError;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AggregationEngine>
}

impl AppState {
    pub fn new(engine: Arc<AggregationEngine>) -> Self {
        Self { engine }
    }
}

/// Builds the transactions router with request tracing attached.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/transactions/{transaction_id}", put(handlers::put_transaction))
        .route("/transactions/types/{kind}", get(handlers::get_transactions_by_type))
        .route("/transactions/sum/{transaction_id}", get(handlers::get_transaction_sum))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
