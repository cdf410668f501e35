use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use tradelens_warehouse::WarehouseError;

/// Request-level errors, mapped to HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no trade data loaded")]
    NoData,

    #[error(transparent)]
    Warehouse(#[from] WarehouseError),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NoData => StatusCode::NOT_FOUND,
            Self::Warehouse(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("request failed: {self}");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Startup/runtime errors for the server binary.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Warehouse(#[from] WarehouseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
