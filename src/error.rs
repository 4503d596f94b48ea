use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Failed to synthesize speech")]
    Synthesis(String),

    #[error("Failed to save audio file")]
    Storage(String),

    #[error("Failed to read audio directory")]
    Listing(String),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response body served to callers
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Synthesis(_) | Self::Storage(_) | Self::Listing(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Convert to the wire-format error body
    pub fn to_body(&self) -> ErrorBody {
        let details = match self {
            Self::BadRequest(_) => None,
            Self::Synthesis(details)
            | Self::Storage(details)
            | Self::Listing(details)
            | Self::Internal(details) => Some(details.clone()),
        };

        ErrorBody {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            details,
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_body();

        tracing::error!(
            error = %self,
            details = ?body.details,
            status = %status.as_u16(),
            "Request failed"
        );

        (status, Json(body)).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
