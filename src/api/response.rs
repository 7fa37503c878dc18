//! Response types for the Incentive Engine API.
//!
//! This module defines the error response structures, the designation
//! catalogue response, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Designation, Slab};

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

    /// Creates an invalid designation error response.
    pub fn invalid_designation(value: &str) -> Self {
        let supported = Designation::ALL
            .iter()
            .map(|d| d.display_name())
            .collect::<Vec<_>>()
            .join(", ");
        Self::with_details(
            "INVALID_DESIGNATION",
            format!("Invalid designation: {}", value),
            format!("Supported designations: {}", supported),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidDesignation { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_designation(&value),
            },
            EngineError::IncentiveNotFound { designation, slab } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INCENTIVE_LOOKUP_FAILED",
                    "Incentive lookup failed",
                    format!(
                        "No incentive defined for designation '{}' in slab '{}'",
                        designation, slab
                    ),
                ),
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
            EngineError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("{}: {}", field, message),
                ),
            },
        }
    }
}

/// One cell of a designation's incentive row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlabIncentive {
    /// The slab label.
    pub slab: Slab,
    /// Incentive amount in rupees.
    pub amount: u32,
}

/// A designation offered to front ends, with its incentive row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignationView {
    /// The code accepted in requests.
    pub code: Designation,
    /// The chart display name.
    pub name: String,
    /// Incentive amounts, highest slab first.
    pub incentives: Vec<SlabIncentive>,
}

/// Response body for the `/health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the service answers.
    pub status: String,
    /// The engine version.
    pub version: String,
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
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_designation_lists_supported_values() {
        let error = ApiError::invalid_designation("STORE HEAD");
        assert_eq!(error.code, "INVALID_DESIGNATION");
        assert!(error.message.contains("STORE HEAD"));
        assert!(error.details.unwrap().contains("CHIEF MANAGER (G2)"));
    }

    #[test]
    fn test_invalid_designation_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidDesignation {
            value: "x".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_DESIGNATION");
    }

    #[test]
    fn test_incentive_not_found_maps_to_server_error() {
        let api_error: ApiErrorResponse = EngineError::IncentiveNotFound {
            designation: "BRANCH MANAGER".to_string(),
            slab: "<60".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "INCENTIVE_LOOKUP_FAILED");
    }

    #[tokio::test]
    async fn test_error_response_carries_status_and_json_body() {
        let response = ApiErrorResponse::from(EngineError::InvalidDesignation {
            value: "STORE HEAD".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_DESIGNATION");
        assert!(error.message.contains("STORE HEAD"));
    }
}
