//! Liquidation orchestration.
//!
//! Runs the validator and the four liquidation formulas in order, sums the
//! results and records one audit step per rule.

use rust_decimal::Decimal;

use crate::config::LegalConstants;
use crate::error::EmployeeError;
use crate::models::{AuditStep, AuditWarning, EmployeeRecord, LiquidationComponents};
use crate::validation::verify_exceptions;

use super::proration::{checked_sum, round_money, severance_interest_rate};
use super::service_bonus::{SERVICE_BONUS_LEGAL_REF, calculate_service_bonus};
use super::severance::{
    SEVERANCE_INTEREST_LEGAL_REF, SEVERANCE_PAY_LEGAL_REF, calculate_severance_pay_amount,
    calculate_severance_pay_interest,
};
use super::vacation::{VACATION_LEGAL_REF, calculate_vacation};

/// Warning code raised when an allowance is paid above the eligibility ceiling.
pub const ALLOWANCE_ABOVE_CEILING_WARNING: &str = "TRANSPORTATION_ALLOWANCE_ABOVE_CEILING";

/// The liquidation components together with the audit trail that produced them.
#[derive(Debug, Clone)]
pub struct LiquidationCalculation {
    /// The four components and their total.
    pub components: LiquidationComponents,
    /// One audit step per applied rule, numbered from 1.
    pub audit_steps: Vec<AuditStep>,
    /// Conditions worth flagging that did not stop the calculation.
    pub warnings: Vec<AuditWarning>,
}

/// Calculates the full liquidation for an employee.
///
/// The record is validated first; any violation is returned before a single
/// formula runs. Interest is computed from the rounded severance, and the
/// total is the sum of the four rounded components.
///
/// The transportation allowance is always part of the base salary. When it
/// is paid to a salary above the eligibility ceiling in `constants`, a
/// warning is recorded but the amount still counts.
///
/// # Arguments
///
/// * `employee` - The employee record to validate and liquidate
/// * `constants` - The legal constants supplying the allowance ceiling
///
/// # Returns
///
/// Returns a `LiquidationCalculation` containing the rounded components,
/// four audit steps numbered from 1, and any warnings raised.
///
/// # Legal Reference
///
/// Art. 249, Art. 306 and Art. 186 of the Código Sustantivo del Trabajo, and
/// Art. 1 of Ley 52 de 1975.
///
/// # Examples
///
/// ```
/// use liquidation_engine::calculation::calculate_liquidation;
/// use liquidation_engine::config::LegalConstants;
/// use liquidation_engine::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeRecord::new(
///     Decimal::new(1_000_000, 0),
///     Decimal::new(100_000, 0),
///     180,
///     180,
/// );
/// let liquidation = calculate_liquidation(&employee, &LegalConstants::default()).unwrap();
/// assert_eq!(liquidation.components.total, Decimal::new(1_383_000, 0));
/// ```
pub fn calculate_liquidation(
    employee: &EmployeeRecord,
    constants: &LegalConstants,
) -> Result<LiquidationCalculation, EmployeeError> {
    verify_exceptions(employee)?;

    let base_salary = employee.base_salary()?;
    let worked_days = employee.worked_days;
    let bonus_days = employee.severance_pay_for_accrued_leave_days;

    let severance_pay = calculate_severance_pay_amount(employee)?;
    let severance_pay_interest = calculate_severance_pay_interest(employee, severance_pay)?;
    let service_bonus = calculate_service_bonus(employee)?;
    let vacation = calculate_vacation(employee)?;
    let total = round_money(checked_sum(
        "total",
        &[severance_pay, severance_pay_interest, service_bonus, vacation],
    )?);

    let audit_steps = vec![
        AuditStep {
            step_number: 1,
            rule_id: "severance_pay".to_string(),
            rule_name: "Severance Pay".to_string(),
            legal_ref: SEVERANCE_PAY_LEGAL_REF.to_string(),
            input: serde_json::json!({
                "base_salary": base_salary.to_string(),
                "worked_days": worked_days
            }),
            output: serde_json::json!({ "severance_pay": severance_pay.to_string() }),
            reasoning: format!(
                "${} x {} / 360 = ${}",
                base_salary.normalize(),
                worked_days,
                severance_pay
            ),
        },
        AuditStep {
            step_number: 2,
            rule_id: "severance_pay_interest".to_string(),
            rule_name: "Severance Pay Interest".to_string(),
            legal_ref: SEVERANCE_INTEREST_LEGAL_REF.to_string(),
            input: serde_json::json!({
                "severance_pay": severance_pay.to_string(),
                "worked_days": worked_days,
                "annual_rate": severance_interest_rate().to_string()
            }),
            output: serde_json::json!({
                "severance_pay_interest": severance_pay_interest.to_string()
            }),
            reasoning: format!(
                "${} x {} x {} / 360 = ${}",
                severance_pay,
                worked_days,
                severance_interest_rate(),
                severance_pay_interest
            ),
        },
        AuditStep {
            step_number: 3,
            rule_id: "service_bonus".to_string(),
            rule_name: "Service Bonus".to_string(),
            legal_ref: SERVICE_BONUS_LEGAL_REF.to_string(),
            input: serde_json::json!({
                "base_salary": base_salary.to_string(),
                "severance_pay_for_accrued_leave_days": bonus_days
            }),
            output: serde_json::json!({ "service_bonus": service_bonus.to_string() }),
            reasoning: format!(
                "${} x {} / 360 = ${}",
                base_salary.normalize(),
                bonus_days,
                service_bonus
            ),
        },
        AuditStep {
            step_number: 4,
            rule_id: "vacation".to_string(),
            rule_name: "Vacation Pay".to_string(),
            legal_ref: VACATION_LEGAL_REF.to_string(),
            input: serde_json::json!({
                "basic_monthly_salary": employee.basic_monthly_salary.to_string(),
                "worked_days": worked_days
            }),
            output: serde_json::json!({ "vacation": vacation.to_string() }),
            reasoning: format!(
                "${} x {} / 720 = ${} (transportation allowance excluded)",
                employee.basic_monthly_salary.normalize(),
                worked_days,
                vacation
            ),
        },
    ];

    let mut warnings = Vec::new();
    let ceiling = constants.transportation_allowance_ceiling();
    if employee.transportation_allowance > Decimal::ZERO && employee.basic_monthly_salary > ceiling {
        warnings.push(AuditWarning {
            code: ALLOWANCE_ABOVE_CEILING_WARNING.to_string(),
            message: format!(
                "Transportation allowance ${} included for a salary of ${}, above the eligibility ceiling of ${}",
                employee.transportation_allowance.normalize(),
                employee.basic_monthly_salary.normalize(),
                ceiling.normalize()
            ),
            severity: "low".to_string(),
        });
    }

    Ok(LiquidationCalculation {
        components: LiquidationComponents {
            severance_pay,
            severance_pay_interest,
            service_bonus,
            vacation,
            total,
        },
        audit_steps,
        warnings,
    })
}
