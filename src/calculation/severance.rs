//! Severance pay (cesantías) and severance interest calculation.
//!
//! Severance accrues one month of base salary per 360-day labor year
//! (Art. 249 CST). Interest on it is owed at 12% a year (Ley 52 de 1975).

use rust_decimal::Decimal;

use crate::error::EmployeeError;
use crate::models::EmployeeRecord;

use super::proration::{DAYS_IN_LABOR_YEAR, prorate, round_money, severance_interest_rate};

/// Legal reference for severance pay.
pub const SEVERANCE_PAY_LEGAL_REF: &str = "Art. 249 CST";

/// Legal reference for severance interest.
pub const SEVERANCE_INTEREST_LEGAL_REF: &str = "Ley 52 de 1975, Art. 1";

/// Calculates the severance accrued over the worked period.
///
/// `base_salary * worked_days / 360`, rounded to cents. The record is
/// expected to have passed validation.
///
/// # Examples
///
/// ```
/// use liquidation_engine::calculation::calculate_severance_pay_amount;
/// use liquidation_engine::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeRecord::new(
///     Decimal::new(1_000_000, 0),
///     Decimal::new(100_000, 0),
///     180,
///     180,
/// );
/// let severance = calculate_severance_pay_amount(&employee).unwrap();
/// assert_eq!(severance, Decimal::new(550_000, 0));
/// ```
pub fn calculate_severance_pay_amount(employee: &EmployeeRecord) -> Result<Decimal, EmployeeError> {
    let severance = prorate(
        "severance_pay",
        employee.base_salary()?,
        Decimal::from(employee.worked_days),
        "days_in_labor_year",
        Decimal::from(DAYS_IN_LABOR_YEAR),
    )?;

    Ok(round_money(severance))
}

/// Calculates the interest owed on an already computed severance amount.
///
/// `severance_pay * worked_days * 0.12 / 360`, rounded to cents. The
/// severance is taken as a parameter so both calculations stay
/// independently testable.
pub fn calculate_severance_pay_interest(
    employee: &EmployeeRecord,
    severance_pay: Decimal,
) -> Result<Decimal, EmployeeError> {
    let rate_days = Decimal::from(employee.worked_days)
        .checked_mul(severance_interest_rate())
        .ok_or_else(|| EmployeeError::NumberOutOfRange {
            field: "worked_days".to_string(),
            value: employee.worked_days.to_string(),
            expected: format!("0 to {}", DAYS_IN_LABOR_YEAR),
        })?;

    let interest = prorate(
        "severance_pay_interest",
        severance_pay,
        rate_days,
        "days_in_labor_year",
        Decimal::from(DAYS_IN_LABOR_YEAR),
    )?;

    Ok(round_money(interest))
}
