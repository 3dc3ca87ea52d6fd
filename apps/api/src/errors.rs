use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::scoring::calculator::CalculatorError;

/// One violated field constraint in an incoming payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldViolation {
    /// Dotted path, e.g. `personalInfo.name` or `projects.1.name`.
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Calculator misuse: {0}")]
    Calculator(#[from] CalculatorError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(vec![FieldViolation::new("body", rejection.body_text())])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Invalid data".to_string(),
            ),
            AppError::Calculator(e) => {
                tracing::error!("Calculator misuse: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CALCULATOR_MISUSE",
                    "Score calculation was invoked incorrectly".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let AppError::Validation(violations) = &self {
            error["details"] = json!(violations);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
