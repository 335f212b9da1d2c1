//! HTTP request handlers for the Compensation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use super::request::{HourReportRequest, PayRequest, TitleRequest};
use super::response::{ApiError, ApiErrorResponse, PayResponse, RoleView, RolesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/pay", post(pay_handler))
        .route("/hours", post(hours_handler))
        .route("/roles", get(roles_handler))
        .route("/employees/:id", get(get_employee_handler))
        .route("/employees/:id/title", put(update_title_handler))
        .with_state(state)
}

/// Converts a JSON body rejection into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Body text carries serde's message, including our own validation errors
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // "Invalid value for" is the prefix of `EngineError::Validation`'s display text
            if body_text.contains("missing field") || body_text.contains("Invalid value for") {
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
    ApiErrorResponse::bad_request(error).into_response()
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Handler for POST /pay.
///
/// Resolves the employee's role through the registry and calculates pay.
async fn pay_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pay request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    let employee = request.employee;

    let strategy = match state.registry().resolve(employee.role()) {
        Ok(strategy) => strategy,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                role = %employee.role(),
                "Role not registered"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    match state
        .pay_calculator()
        .compute(&employee, strategy.as_ref(), request.allowance)
    {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id(),
                role = %result.role,
                amount = %result.amount,
                duration_us = start_time.elapsed().as_micros(),
                "Pay calculation completed"
            );
            let response = PayResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                currency: state.config().settings().currency.clone(),
                result,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Pay calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /hours.
async fn hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<HourReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let report = state.hour_reporter().report(&request.employee);
    info!(
        correlation_id = %correlation_id,
        employee_id = %report.employee_id,
        regular_hours = %report.regular_hours,
        "Hour report produced"
    );
    (StatusCode::OK, Json(report)).into_response()
}

/// Handler for GET /roles.
async fn roles_handler(State(state): State<AppState>) -> Json<RolesResponse> {
    let roles = state
        .registry()
        .entries()
        .into_iter()
        .map(|entry| RoleView {
            role: entry.role,
            multiplier: entry.multiplier,
        })
        .collect();

    Json(RolesResponse {
        base_pay: state.pay_calculator().base_pay(),
        roles,
    })
}

/// Handler for PUT /employees/:id/title.
///
/// Saves only the title; the rest of the stored record is untouched.
async fn update_title_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TitleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match state.title_updater().update_title(&id, &request.title).await {
        Ok(()) => {
            info!(correlation_id = %correlation_id, employee_id = %id, "Title updated");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %id,
                error = %err,
                "Title update failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /employees/:id.
async fn get_employee_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store().fetch(&id).await {
        Ok(stored) => (StatusCode::OK, Json(stored)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::PayResult;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/compensation").expect("Failed to load config");
        AppState::new(config)
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn employee_json(role: &str, hours: &str) -> serde_json::Value {
        json!({
            "id": "emp_001",
            "name": "Aiko Tanaka",
            "department": "Accounting",
            "role": role,
            "hours_worked": hours
        })
    }

    #[tokio::test]
    async fn test_pay_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "POST",
                "/pay",
                json!({ "employee": employee_json("staff", "40"), "allowance": "10" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response: PayResponse = serde_json::from_slice(&body).unwrap();
        let result: PayResult = response.result;

        assert_eq!(result.amount, Decimal::from(110));
        assert_eq!(response.currency, "USD");
    }

    #[tokio::test]
    async fn test_pay_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/pay")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_pay_unknown_role_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "POST",
                "/pay",
                json!({ "employee": employee_json("contractor", "40") }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "UNKNOWN_ROLE");
    }

    #[tokio::test]
    async fn test_pay_negative_hours_in_body_is_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request(
                "POST",
                "/pay",
                json!({ "employee": employee_json("staff", "-5") }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_title_update_returns_204() {
        let state = create_test_state();
        let router = create_router(state.clone());

        let response = router
            .oneshot(json_request(
                "PUT",
                "/employees/emp_001/title",
                json!({ "title": "Team Lead" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let stored = state.store().fetch("emp_001").await.unwrap();
        assert_eq!(stored.fields["title"], "Team Lead");
    }
}
