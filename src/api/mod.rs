//! HTTP API module for the Liquidation Engine.
//!
//! This module provides the REST API endpoints for calculating a
//! liquidation and a termination indemnity.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CompensationOnlyRequest, CompensationRequest, EmployeeRequest, LiquidationRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
