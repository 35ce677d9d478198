//! Application error type and its JSON rendering.
//!
//! Every error leaves the service as:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Travel not found", "details": { "slug": "x" } } }
//! ```

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors surfaced by services and handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A request parameter failed type or enum validation.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The addressed resource does not exist.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Storage or other unexpected failure. Details are never exposed.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status associated with this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => {
                ("validation_error", message.clone(), details.clone())
            }
            AppError::NotFound { message, details } => {
                ("not_found", message.clone(), details.clone())
            }
            AppError::Internal { message, details } => {
                ("internal_error", message.clone(), details.clone())
            }
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "query": [rejection.body_text()] }),
        )
    }
}

impl AppError {
    /// Builds a validation error whose `details` are keyed by the names the
    /// client sent, as translated by `param_name`.
    pub fn invalid_params(errors: ValidationErrors, param_name: impl Fn(&str) -> &str) -> Self {
        let mut fields = Map::new();

        for (field, field_errors) in errors.field_errors() {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .map(Value::String)
                .collect();

            fields.insert(param_name(field.as_ref()).to_string(), Value::Array(messages));
        }

        AppError::bad_request("Invalid query parameters", Value::Object(fields))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::invalid_params(errors, |field| field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("bad", json!({})).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("missing", json!({})).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::internal("boom", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_info_codes() {
        let info = AppError::not_found("Travel not found", json!({ "slug": "x" })).to_error_info();
        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "Travel not found");
        assert_eq!(info.details["slug"], "x");
    }

    #[test]
    fn test_validation_errors_are_grouped_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "priceFrom",
            ValidationError::new("price").with_message("must be a positive amount".into()),
        );
        errors.add("sortOrder", ValidationError::new("sort_order"));

        let err = AppError::from(errors);
        let info = err.to_error_info();

        assert_eq!(info.code, "validation_error");
        assert_eq!(info.details["priceFrom"][0], "must be a positive amount");
        assert_eq!(info.details["sortOrder"][0], "sort_order");
    }

    #[test]
    fn test_invalid_params_renames_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("price_from", ValidationError::new("price"));
        errors.add("page", ValidationError::new("range"));

        let info = AppError::invalid_params(errors, |field| match field {
            "price_from" => "priceFrom",
            other => other,
        })
        .to_error_info();

        assert_eq!(info.details["priceFrom"][0], "price");
        assert_eq!(info.details["page"][0], "range");
        assert!(info.details.get("price_from").is_none());
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::internal("Database error", json!({}));
        assert_eq!(err.to_string(), "Database error");
    }
}
