//! Error responses
//!
//! Every rejection is terminal for the request: caller input errors map
//! to 400, a missing board to 404, and nothing is retried server-side.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use mancala_core::InvalidPlayer;

use crate::state::StoreError;

/// A rejected request
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Player(#[from] InvalidPlayer),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Game(_)) | ApiError::Player(_) => {
                StatusCode::BAD_REQUEST
            }
        };
        tracing::warn!("request rejected: {}", self);
        (status, self.to_string()).into_response()
    }
}
