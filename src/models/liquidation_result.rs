//! Liquidation result models for the Liquidation Engine.
//!
//! This module contains the [`LiquidationResult`] type and its associated
//! structures that capture all outputs of a settlement: the four liquidation
//! components, the optional compensation, and the audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ContractType, EmployeeRecord};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the legal article for this rule.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings report conditions that don't prevent the liquidation from being
/// computed, such as an unrecognised contract type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The four statutory liquidation components and their sum.
///
/// # Example
///
/// ```
/// use liquidation_engine::models::LiquidationComponents;
/// use rust_decimal::Decimal;
///
/// let components = LiquidationComponents {
///     severance_pay: Decimal::new(550_000, 0),
///     severance_pay_interest: Decimal::new(33_000, 0),
///     service_bonus: Decimal::new(550_000, 0),
///     vacation: Decimal::new(250_000, 0),
///     total: Decimal::new(1_383_000, 0),
/// };
/// assert_eq!(components.total, Decimal::new(1_383_000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidationComponents {
    /// Accrued severance pay (cesantías).
    pub severance_pay: Decimal,
    /// Interest on the accrued severance (intereses de cesantías).
    pub severance_pay_interest: Decimal,
    /// Service bonus (prima de servicios).
    pub service_bonus: Decimal,
    /// Accrued vacation pay (vacaciones).
    pub vacation: Decimal,
    /// The sum of the four components.
    pub total: Decimal,
}

/// The termination indemnity owed for an unjustified dismissal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationResult {
    /// The contract type the indemnity was computed for.
    pub contract_type: ContractType,
    /// Whole calendar days between contract start and termination.
    pub elapsed_days: i64,
    /// The number of days of salary owed.
    pub compensated_days: Decimal,
    /// The indemnity amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The complete result of a liquidation.
///
/// This struct captures all outputs from the engine for one employee,
/// including a complete audit trace for transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The version of the legal constants the calculation used.
    pub regime_version: String,
    /// The validated employee inputs.
    pub employee: EmployeeRecord,
    /// The four liquidation components and their total.
    pub components: LiquidationComponents,
    /// The termination indemnity, when one was requested and applies.
    pub compensation: Option<CompensationResult>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
