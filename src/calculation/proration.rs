//! Legal day-count constants, money rounding and checked proration.
//!
//! Every liquidation formula has the shape `amount * factor / divisor`.
//! [`prorate`] evaluates it with checked decimal arithmetic so that a zero
//! divisor or an overflow surfaces as an [`EmployeeError`] instead of a
//! panic.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::EmployeeError;

/// Days in a labor year (twelve months of thirty days).
pub const DAYS_IN_LABOR_YEAR: i32 = 360;

/// Days in a labor month.
pub const DAYS_IN_LABOR_MONTH: i32 = 30;

/// Divisor of the vacation formula: fifteen days of leave per labor year.
pub const VACATION_DIVISOR: i32 = 720;

/// Decimal places kept on every monetary output.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Returns the annual interest rate owed on accrued severance (12%).
pub fn severance_interest_rate() -> Decimal {
    Decimal::new(12, 2)
}

/// Rounds a monetary amount to [`MONEY_DECIMAL_PLACES`], half away from zero.
///
/// # Examples
///
/// ```
/// use liquidation_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("10.005").unwrap()).to_string(), "10.01");
/// assert_eq!(round_money(Decimal::new(550_000, 0)).to_string(), "550000.00");
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded
}

/// Computes `amount * factor / divisor` without rounding.
///
/// `output` names the quantity being computed and `divisor_name` the
/// divisor; both end up in the error when the computation fails.
pub fn prorate(
    output: &str,
    amount: Decimal,
    factor: Decimal,
    divisor_name: &str,
    divisor: Decimal,
) -> Result<Decimal, EmployeeError> {
    if divisor.is_zero() {
        return Err(EmployeeError::DivisionByZero {
            field: divisor_name.to_string(),
        });
    }

    amount
        .checked_mul(factor)
        .and_then(|product| product.checked_div(divisor))
        .ok_or_else(|| overflow(output))
}

/// Adds monetary amounts, reporting an overflow as out of range.
pub fn checked_sum(output: &str, amounts: &[Decimal]) -> Result<Decimal, EmployeeError> {
    amounts
        .iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(*amount))
        .ok_or_else(|| overflow(output))
}

fn overflow(output: &str) -> EmployeeError {
    EmployeeError::NumberOutOfRange {
        field: output.to_string(),
        value: "overflow".to_string(),
        expected: "a result within decimal precision".to_string(),
    }
}
