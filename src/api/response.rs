//! Response types for the Compensation Engine API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{PayResult, RoleTag};

/// Response body for the `/pay` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayResponse {
    /// Unique identifier of this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that performed the calculation.
    pub engine_version: String,
    /// Currency the amounts are denominated in.
    pub currency: String,
    /// The pay result.
    pub result: PayResult,
}

/// A registered role as listed by `/roles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleView {
    /// The role tag.
    pub role: RoleTag,
    /// The role's base multiplier.
    pub multiplier: Decimal,
}

/// Response body for the `/roles` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolesResponse {
    /// The base amount strategies are applied to.
    pub base_pay: Decimal,
    /// All registered roles, sorted by tag.
    pub roles: Vec<RoleView>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an unknown role error response.
    pub fn unknown_role(role: &str) -> Self {
        Self::with_details(
            "UNKNOWN_ROLE",
            format!("No compensation strategy registered for role '{}'", role),
            "Register a strategy for this role or use one listed by GET /roles",
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::Validation { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid value for '{}': {}", field, message),
                    field,
                ),
            },
            EngineError::UnknownRole { role } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::unknown_role(&role),
            },
            EngineError::Persistence { id, message } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "PERSISTENCE_ERROR",
                    format!("Failed to persist employee '{}'", id),
                    message,
                ),
            },
            EngineError::NotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("NOT_FOUND", format!("Employee not found: {}", id)),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_unknown_role_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::UnknownRole {
            role: "contractor".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "UNKNOWN_ROLE");
        assert!(api_error.error.message.contains("contractor"));
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::validation("allowance", "negative").into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert_eq!(api_error.error.details.as_deref(), Some("allowance"));
    }

    #[test]
    fn test_persistence_maps_to_service_unavailable() {
        let api_error: ApiErrorResponse = EngineError::Persistence {
            id: "emp_001".to_string(),
            message: "store unavailable".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(api_error.error.code, "PERSISTENCE_ERROR");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let api_error: ApiErrorResponse = EngineError::NotFound {
            id: "emp_404".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
    }
}
