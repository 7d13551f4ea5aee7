//! Validation rules for employee records.

use rust_decimal::Decimal;

use crate::calculation::DAYS_IN_LABOR_YEAR;
use crate::error::EmployeeError;
use crate::models::EmployeeRecord;

/// Checks an employee record against every domain rule.
///
/// Rules are checked in a fixed order and the first violation is returned:
///
/// 1. Negative values ([`EmployeeError::NegativeValue`]) for salary,
///    transportation allowance, worked days and bonus days.
/// 2. Day counts above the 360-day labor year
///    ([`EmployeeError::NumberOutOfRange`]).
/// 3. A zero basic monthly salary ([`EmployeeError::DivisionByZero`]).
///
/// The check is pure, so validating the same record twice always gives the
/// same answer.
///
/// # Examples
///
/// ```
/// use liquidation_engine::error::EmployeeError;
/// use liquidation_engine::models::EmployeeRecord;
/// use liquidation_engine::validation::verify_exceptions;
/// use rust_decimal::Decimal;
///
/// let valid = EmployeeRecord::new(Decimal::new(1_000_000, 0), Decimal::ZERO, 180, 180);
/// assert!(verify_exceptions(&valid).is_ok());
///
/// let too_many_days = EmployeeRecord::new(Decimal::new(1_000_000, 0), Decimal::ZERO, 400, 180);
/// assert!(matches!(
///     verify_exceptions(&too_many_days),
///     Err(EmployeeError::NumberOutOfRange { .. })
/// ));
/// ```
pub fn verify_exceptions(employee: &EmployeeRecord) -> Result<(), EmployeeError> {
    check_non_negative_amount("basic_monthly_salary", employee.basic_monthly_salary)?;
    check_non_negative_amount("transportation_allowance", employee.transportation_allowance)?;
    check_non_negative_days("worked_days", employee.worked_days)?;
    check_non_negative_days(
        "severance_pay_for_accrued_leave_days",
        employee.severance_pay_for_accrued_leave_days,
    )?;

    check_days_in_labor_year("worked_days", employee.worked_days)?;
    check_days_in_labor_year(
        "severance_pay_for_accrued_leave_days",
        employee.severance_pay_for_accrued_leave_days,
    )?;

    if employee.basic_monthly_salary.is_zero() {
        return Err(EmployeeError::DivisionByZero {
            field: "basic_monthly_salary".to_string(),
        });
    }

    Ok(())
}

fn check_non_negative_amount(field: &str, value: Decimal) -> Result<(), EmployeeError> {
    if value < Decimal::ZERO {
        return Err(EmployeeError::NegativeValue {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

fn check_non_negative_days(field: &str, value: i32) -> Result<(), EmployeeError> {
    if value < 0 {
        return Err(EmployeeError::NegativeValue {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

fn check_days_in_labor_year(field: &str, value: i32) -> Result<(), EmployeeError> {
    if value > DAYS_IN_LABOR_YEAR {
        return Err(EmployeeError::NumberOutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            expected: format!("0 to {}", DAYS_IN_LABOR_YEAR),
        });
    }
    Ok(())
}
