//! Service bonus (prima de servicios) calculation.

use rust_decimal::Decimal;

use crate::error::EmployeeError;
use crate::models::EmployeeRecord;

use super::proration::{DAYS_IN_LABOR_YEAR, prorate, round_money};

/// Legal reference for the service bonus.
pub const SERVICE_BONUS_LEGAL_REF: &str = "Art. 306 CST";

/// Calculates the service bonus.
///
/// Same rate as severance (`base_salary * days / 360`) but over the bonus
/// period in `severance_pay_for_accrued_leave_days`, which may be shorter
/// than the total worked period.
///
/// # Examples
///
/// ```
/// use liquidation_engine::calculation::calculate_service_bonus;
/// use liquidation_engine::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeRecord::new(
///     Decimal::new(1_000_000, 0),
///     Decimal::new(100_000, 0),
///     360,
///     90,
/// );
/// assert_eq!(calculate_service_bonus(&employee).unwrap(), Decimal::new(275_000, 0));
/// ```
pub fn calculate_service_bonus(employee: &EmployeeRecord) -> Result<Decimal, EmployeeError> {
    let bonus = prorate(
        "service_bonus",
        employee.base_salary()?,
        Decimal::from(employee.severance_pay_for_accrued_leave_days),
        "days_in_labor_year",
        Decimal::from(DAYS_IN_LABOR_YEAR),
    )?;

    Ok(round_money(bonus))
}
