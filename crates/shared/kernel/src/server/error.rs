use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use foodloop_derive::api_model;
use std::borrow::Cow;
use tracing::error;

/// Error body shared by every endpoint: `{"error": "..."}`.
#[api_model]
pub struct ErrorResponse {
    pub error: String,
}

/// Success body for endpoints that only acknowledge: `{"message": "..."}`.
#[api_model]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Errors a handler may return. The message of client errors is sent verbatim;
/// internal errors are logged and masked.
#[foodloop_derive::foodloop_error]
pub enum ApiError {
    #[error("{message}")]
    BadRequest { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("{message}")]
    Unauthorized { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("{message}")]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ApiError {
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest { message: message.into(), context: None }
    }

    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Unauthorized { message: message.into(), context: None }
    }

    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound { message: message.into(), context: None }
    }

    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Internal { message: message.into(), context: None }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            Self::Internal { .. } => {
                error!(error = %self, "Request failed");
                "Internal server error".to_owned()
            },
            Self::BadRequest { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::NotFound { message, .. } => message.into_owned(),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
