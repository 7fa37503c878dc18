//! HTTP request handlers for the Incentive Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::evaluate_with_table;
use crate::error::EngineResult;
use crate::models::{Designation, Slab};

use super::request::EvaluationRequest;
use super::response::{
    ApiError, ApiErrorResponse, DesignationView, HealthResponse, SlabIncentive,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .route("/designations", get(designations_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /evaluate endpoint.
///
/// Accepts a designation and metric percentages and returns the evaluation.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let designation = match request.designation() {
        Ok(designation) => designation,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                designation = %request.designation,
                "Designation not recognised"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    match evaluate_with_table(state.table(), designation, &request.metrics) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                evaluation_id = %result.evaluation_id,
                designation = %designation,
                total_score = %result.total_score,
                slab = result.slab.label(),
                incentive_amount = result.incentive_amount,
                dmd_locked = result.dmd_locked,
                duration_us = result.audit_trace.duration_us,
                "Evaluation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Evaluation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /designations endpoint.
///
/// Lists the designations a front end may offer, each with its incentive row.
async fn designations_handler(State(state): State<AppState>) -> Response {
    match designation_catalogue(&state) {
        Ok(views) => json_response(StatusCode::OK, views),
        Err(err) => {
            warn!(error = %err, "Incentive table is incomplete");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn designation_catalogue(state: &AppState) -> EngineResult<Vec<DesignationView>> {
    Designation::ALL
        .iter()
        .map(|designation| -> EngineResult<DesignationView> {
            let incentives = Slab::ALL
                .iter()
                .map(|slab| -> EngineResult<SlabIncentive> {
                    Ok(SlabIncentive {
                        slab: *slab,
                        amount: state.table().amount(*designation, *slab)?,
                    })
                })
                .collect::<EngineResult<Vec<_>>>()?;
            Ok(DesignationView {
                code: *designation,
                name: designation.display_name().to_string(),
                incentives,
            })
        })
        .collect()
}

/// Handler for GET /health endpoint.
async fn health_handler() -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{IncentiveRow, IncentiveTable};
    use crate::models::EvaluationResult;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        create_router(AppState::default())
    }

    fn evaluate_request(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/evaluate")
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let body = r#"{
            "designation": "BRANCH MANAGER",
            "metrics": {
                "total_turnover": 85,
                "studded_turnover": 92,
                "dtso": 100,
                "scheme_registration": 100,
                "dmd_turnover": 95
            }
        }"#;

        let response = create_test_router()
            .oneshot(evaluate_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let result: EvaluationResult = body_json(response).await;
        assert_eq!(result.incentive_amount, 30_000);
        assert_eq!(result.slab, Slab::EightyToEightyNine);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let response = create_test_router()
            .oneshot(evaluate_request("{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_designation_returns_400() {
        let response = create_test_router()
            .oneshot(evaluate_request(r#"{"metrics": {}}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("designation"));
    }

    #[tokio::test]
    async fn test_unknown_designation_returns_400() {
        let response = create_test_router()
            .oneshot(evaluate_request(r#"{"designation": "STORE HEAD"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "INVALID_DESIGNATION");
    }

    #[tokio::test]
    async fn test_incomplete_table_returns_500() {
        const EMPTY: &[IncentiveRow] = &[];
        let router = create_router(AppState::new(IncentiveTable::new(EMPTY)));

        let response = router
            .oneshot(evaluate_request(r#"{"designation": "CHIEF MANAGER"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "INCENTIVE_LOOKUP_FAILED");
    }

    #[tokio::test]
    async fn test_designations_lists_all_rows() {
        let response = create_test_router()
            .oneshot(
                Request::builder()
                    .uri("/designations")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let views: Vec<DesignationView> = body_json(response).await;
        assert_eq!(views.len(), 5);
        assert_eq!(views[1].name, "CHIEF MANAGER (G2)");
        assert_eq!(views[1].incentives.len(), 6);
        assert_eq!(views[1].incentives[0].amount, 60_000);
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = create_test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = body_json(response).await;
        assert_eq!(health.status, "ok");
    }
}
