//! Accrued vacation pay (vacaciones) calculation.
//!
//! Vacation accrues fifteen working days per labor year (Art. 186 CST),
//! half the rate of severance, and its base excludes the transportation
//! allowance.

use rust_decimal::Decimal;

use crate::error::EmployeeError;
use crate::models::EmployeeRecord;

use super::proration::{VACATION_DIVISOR, prorate, round_money};

/// Legal reference for vacation pay.
pub const VACATION_LEGAL_REF: &str = "Art. 186 CST";

/// Calculates accrued vacation pay.
///
/// `basic_monthly_salary * worked_days / 720`, rounded to cents.
///
/// # Examples
///
/// ```
/// use liquidation_engine::calculation::calculate_vacation;
/// use liquidation_engine::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeRecord::new(
///     Decimal::new(1_000_000, 0),
///     Decimal::new(100_000, 0),
///     180,
///     180,
/// );
/// assert_eq!(calculate_vacation(&employee).unwrap(), Decimal::new(250_000, 0));
/// ```
pub fn calculate_vacation(employee: &EmployeeRecord) -> Result<Decimal, EmployeeError> {
    let vacation = prorate(
        "vacation",
        employee.basic_monthly_salary,
        Decimal::from(employee.worked_days),
        "vacation_divisor",
        Decimal::from(VACATION_DIVISOR),
    )?;

    Ok(round_money(vacation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_severance_pay_amount;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// VAC-001: a full year accrues half a month of salary
    #[test]
    fn test_full_year_vacation_is_half_salary() {
        let employee = EmployeeRecord::new(dec("1000000"), dec("0"), 360, 360);
        assert_eq!(calculate_vacation(&employee).unwrap(), dec("500000.00"));
    }

    /// VAC-002: the transportation allowance is excluded
    #[test]
    fn test_vacation_excludes_transportation_allowance() {
        let without = EmployeeRecord::new(dec("1000000"), dec("0"), 180, 180);
        let with = EmployeeRecord::new(dec("1000000"), dec("200000"), 180, 180);
        assert_eq!(
            calculate_vacation(&without).unwrap(),
            calculate_vacation(&with).unwrap()
        );
    }

    /// VAC-003: vacation runs at half the severance rate on the same base
    #[test]
    fn test_vacation_is_half_of_severance_without_allowance() {
        for days in [0, 1, 7, 90, 180, 359, 360] {
            let employee = EmployeeRecord::new(dec("720000"), dec("0"), days, days);
            let severance = calculate_severance_pay_amount(&employee).unwrap();
            let vacation = calculate_vacation(&employee).unwrap();
            assert_eq!(vacation * Decimal::TWO, severance, "days = {}", days);
        }
    }

    #[test]
    fn test_vacation_rounds_to_cents() {
        // 1,000,000 * 1 / 720 = 1388.888...
        let employee = EmployeeRecord::new(dec("1000000"), dec("0"), 1, 1);
        assert_eq!(calculate_vacation(&employee).unwrap().to_string(), "1388.89");
    }
}
