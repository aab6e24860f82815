//! API error responses
//!
//! Every error is returned as JSON with a single free-text `detail` field.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tweet_composer_domain::{OptimizeError, StoreError, usecases::PublishTweetError};

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub detail: String,
}

/// HTTP status plus `{detail}` body
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    body: ApiErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                detail: detail.into(),
            },
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }

    pub fn bad_gateway(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, detail)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.body.detail
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        tracing::error!(error = %e, "Tweet store error");
        Self::internal_error(format!("Storage error: {}", e))
    }
}

impl From<OptimizeError> for ApiError {
    fn from(e: OptimizeError) -> Self {
        tracing::error!(error = %e, "Optimization failed");
        match e {
            OptimizeError::Timeout => Self::new(StatusCode::GATEWAY_TIMEOUT, e.to_string()),
            OptimizeError::Config(_) => Self::internal_error(e.to_string()),
            _ => Self::bad_gateway(e.to_string()),
        }
    }
}

impl From<PublishTweetError> for ApiError {
    fn from(e: PublishTweetError) -> Self {
        match e {
            PublishTweetError::NotFound(_) => Self::not_found("Tweet not found"),
            PublishTweetError::Store(e) => e.into(),
        }
    }
}
