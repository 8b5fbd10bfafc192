use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Local;
use thiserror::Error;
use tracing::error;

use crate::api::dto::ErrorResponse;
use crate::models::TransactionError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation {
        message: String
    },
    #[error("Invalid parameter type: {parameter}")]
    InvalidParameter {
        parameter: &'static str
    },
    #[error(transparent)]
    Transaction(#[from] TransactionError)
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    pub fn invalid_parameter(parameter: &'static str) -> Self {
        Self::InvalidParameter { parameter }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            Self::Transaction(error) if error.is_already_exists() => StatusCode::BAD_REQUEST,
            Self::Transaction(error) if error.is_not_found() => StatusCode::NOT_FOUND,
            Self::Transaction(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Transaction(error) if error.is_internal() => format!("Internal server error: {error}"),
            other => other.to_string()
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("Request failed with an internal error: {self}");
        }

        let body = ErrorResponse {
            message: self.message(),
            status: status.as_u16(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string()
        };

        (status, Json(body)).into_response()
    }
}
