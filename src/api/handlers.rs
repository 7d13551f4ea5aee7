//! HTTP request handlers for the Liquidation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_compensation, calculate_liquidation};
use crate::config::{ConfigLoader, LegalConstants};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditTrace, AuditWarning, CompensationResult, EmployeeRecord, LiquidationResult};

use super::request::{CompensationOnlyRequest, CompensationRequest, LiquidationRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Warning code raised when the requested contract type is not recognised.
const UNKNOWN_CONTRACT_TYPE_WARNING: &str = "UNKNOWN_CONTRACT_TYPE";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/liquidation", post(liquidation_handler))
        .route("/compensation", post(compensation_handler))
        .with_state(state)
}

/// Handler for POST /liquidation endpoint.
///
/// Accepts the employee inputs and, optionally, contract metadata; returns
/// the four liquidation components, the indemnity when it applies, and the
/// audit trace.
async fn liquidation_handler(
    State(state): State<AppState>,
    payload: Result<Json<LiquidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing liquidation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let employee = match request.employee.to_record() {
        Ok(employee) => employee,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee input rejected"
            );
            return error_response(err.into());
        }
    };

    let start_time = Instant::now();
    match perform_liquidation(
        &employee,
        request.compensation.as_ref(),
        state.config(),
        start_time,
    ) {
        Ok(result) => {
            for warning in &result.audit_trace.warnings {
                warn!(
                    correlation_id = %correlation_id,
                    code = %warning.code,
                    "{}",
                    warning.message
                );
            }
            info!(
                correlation_id = %correlation_id,
                calculation_id = %result.calculation_id,
                regime_version = %result.regime_version,
                total = %result.components.total,
                compensation = ?result.compensation.as_ref().map(|c| c.amount),
                duration_us = result.audit_trace.duration_us,
                "Liquidation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Liquidation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /compensation endpoint.
///
/// Computes the termination indemnity alone. An unrecognised contract type
/// is rejected here, since there is nothing else to return.
async fn compensation_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompensationOnlyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compensation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let outcome = request
        .employee
        .to_record()
        .map_err(EngineError::from)
        .and_then(|employee| compensate(&employee, &request.contract, state.constants()))
        .and_then(|result| {
            result.ok_or_else(|| EngineError::UnknownContractType {
                value: request.contract.type_of_contract.clone(),
            })
        });

    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                contract_type = %result.contract_type,
                compensated_days = %result.compensated_days,
                amount = %result.amount,
                "Compensation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Compensation failed"
            );
            error_response(err.into())
        }
    }
}

/// Runs the liquidation and the optional indemnity and assembles the result.
fn perform_liquidation(
    employee: &EmployeeRecord,
    compensation_request: Option<&CompensationRequest>,
    config: &ConfigLoader,
    start_time: Instant,
) -> EngineResult<LiquidationResult> {
    let constants = config.constants();
    let calculation = calculate_liquidation(employee, constants)?;
    let mut steps = calculation.audit_steps;
    let mut warnings = calculation.warnings;

    let compensation = match compensation_request {
        Some(contract) => match compensate(employee, contract, constants)? {
            Some(mut result) => {
                result.audit_step.step_number = steps.len() as u32 + 1;
                steps.push(result.audit_step.clone());
                Some(result)
            }
            None => {
                warnings.push(AuditWarning {
                    code: UNKNOWN_CONTRACT_TYPE_WARNING.to_string(),
                    message: format!(
                        "Contract type '{}' is not recognised; no compensation was computed",
                        contract.type_of_contract
                    ),
                    severity: "medium".to_string(),
                });
                None
            }
        },
        None => None,
    };

    Ok(LiquidationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        regime_version: config.regime().version.clone(),
        employee: employee.clone(),
        components: calculation.components,
        compensation,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

fn compensate(
    employee: &EmployeeRecord,
    contract: &CompensationRequest,
    constants: &LegalConstants,
) -> EngineResult<Option<CompensationResult>> {
    calculate_compensation(
        employee,
        &contract.type_of_contract,
        &contract.start_date,
        &contract.end_date,
        contract.agreed_end_date.as_deref(),
        constants,
    )
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
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
    error_response(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
