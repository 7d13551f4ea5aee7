//! Request types for the Liquidation Engine API.
//!
//! Employee amounts and day counts arrive as JSON numbers or strings and are
//! read through [`RawEmployeeInput`], so text that cannot be interpreted is
//! reported as an incorrect data type rather than a generic JSON error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EmployeeError;
use crate::models::{EmployeeRecord, RawEmployeeInput};

/// Request body for the `/liquidation` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidationRequest {
    /// The employee inputs.
    pub employee: EmployeeRequest,
    /// Contract metadata, when an indemnity should also be computed.
    #[serde(default)]
    pub compensation: Option<CompensationRequest>,
}

/// Employee inputs in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The basic monthly salary.
    pub basic_monthly_salary: Value,
    /// The monthly transportation allowance.
    pub transportation_allowance: Value,
    /// Days worked in the accrual period.
    pub worked_days: Value,
    /// Days used as the base of the service bonus.
    pub severance_pay_for_accrued_leave_days: Value,
}

impl EmployeeRequest {
    /// Converts the request into an employee record.
    pub fn to_record(&self) -> Result<EmployeeRecord, EmployeeError> {
        EmployeeRecord::try_from(RawEmployeeInput {
            basic_monthly_salary: value_text(&self.basic_monthly_salary),
            transportation_allowance: value_text(&self.transportation_allowance),
            worked_days: value_text(&self.worked_days),
            severance_pay_for_accrued_leave_days: value_text(
                &self.severance_pay_for_accrued_leave_days,
            ),
        })
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Contract metadata for the indemnity calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompensationRequest {
    /// The contract type, e.g. `indefinite_term` or `fijo_1_año`.
    pub type_of_contract: String,
    /// The contract start date (`YYYY-MM-DD`).
    pub start_date: String,
    /// The termination date (`YYYY-MM-DD`).
    pub end_date: String,
    /// The agreed end of a fixed-term contract (`YYYY-MM-DD`).
    #[serde(default)]
    pub agreed_end_date: Option<String>,
}

/// Request body for the `/compensation` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompensationOnlyRequest {
    /// The employee inputs.
    pub employee: EmployeeRequest,
    /// The contract metadata.
    #[serde(flatten)]
    pub contract: CompensationRequest,
}
