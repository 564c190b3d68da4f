//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::error::CalcError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Calculator error
    Calc(CalcError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Calc(err) => {
                let msg = err.to_string();
                match err {
                    CalcError::InvalidInput(_) => {
                        (StatusCode::BAD_REQUEST, ApiError::new("INVALID_INPUT", msg))
                    }
                    CalcError::Oversaturated { .. } => {
                        (StatusCode::BAD_REQUEST, ApiError::new("OVERSATURATED", msg))
                    }
                    CalcError::ZeroFlowRatioSum => (
                        StatusCode::BAD_REQUEST,
                        ApiError::new("ZERO_FLOW_RATIO", msg),
                    ),
                    CalcError::MissingPrerequisite(_) => (
                        StatusCode::CONFLICT,
                        ApiError::new("MISSING_PREREQUISITE", msg),
                    ),
                }
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<CalcError> for AppError {
    fn from(err: CalcError) -> Self {
        AppError::Calc(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_status_codes() {
        let response =
            AppError::Calc(CalcError::InvalidInput("speed".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::Calc(CalcError::MissingPrerequisite("run Webster".into()))
            .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = AppError::Calc(CalcError::Oversaturated {
            flow_ratio_sum: 1.2,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_details() {
        let error = ApiError::new("INVALID_INPUT", "bad value").with_details("phase 2");
        assert_eq!(error.details.as_deref(), Some("phase 2"));
    }
}
