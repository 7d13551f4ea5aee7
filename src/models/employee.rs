//! Employee record and raw input conversion.
//!
//! This module defines the [`EmployeeRecord`] used by every calculation and
//! the [`RawEmployeeInput`] text form that presentation layers collect
//! before a record can be built.

use std::num::IntErrorKind;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::calculation::DAYS_IN_LABOR_YEAR;
use crate::error::EmployeeError;

/// The inputs of a single liquidation session.
///
/// Day counts are signed so that negative input survives construction and
/// can be reported by the validator instead of being rejected by the type
/// system.
///
/// # Examples
///
/// ```
/// use liquidation_engine::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeRecord::new(
///     Decimal::new(1_000_000, 0),
///     Decimal::new(100_000, 0),
///     180,
///     180,
/// );
/// assert_eq!(employee.base_salary().unwrap(), Decimal::new(1_100_000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The basic monthly salary.
    pub basic_monthly_salary: Decimal,
    /// The monthly transportation allowance.
    pub transportation_allowance: Decimal,
    /// Days worked in the accrual period (a labor year has 360 days).
    pub worked_days: i32,
    /// Days used as the base of the service bonus.
    pub severance_pay_for_accrued_leave_days: i32,
}

impl EmployeeRecord {
    /// Creates a record from already-typed values.
    pub fn new(
        basic_monthly_salary: Decimal,
        transportation_allowance: Decimal,
        worked_days: i32,
        severance_pay_for_accrued_leave_days: i32,
    ) -> Self {
        Self {
            basic_monthly_salary,
            transportation_allowance,
            worked_days,
            severance_pay_for_accrued_leave_days,
        }
    }

    /// Creates a record from floating point amounts.
    ///
    /// Non-finite amounts (`NaN`, infinities) cannot be represented as money
    /// and are rejected with [`EmployeeError::IncorrectDataType`].
    pub fn from_f64(
        basic_monthly_salary: f64,
        transportation_allowance: f64,
        worked_days: i32,
        severance_pay_for_accrued_leave_days: i32,
    ) -> Result<Self, EmployeeError> {
        Ok(Self::new(
            decimal_from_f64("basic_monthly_salary", basic_monthly_salary)?,
            decimal_from_f64("transportation_allowance", transportation_allowance)?,
            worked_days,
            severance_pay_for_accrued_leave_days,
        ))
    }

    /// Returns the salary base of severance, its interest and the service
    /// bonus: basic monthly salary plus transportation allowance.
    pub fn base_salary(&self) -> Result<Decimal, EmployeeError> {
        self.basic_monthly_salary
            .checked_add(self.transportation_allowance)
            .ok_or_else(|| EmployeeError::NumberOutOfRange {
                field: "base_salary".to_string(),
                value: "overflow".to_string(),
                expected: "a sum within decimal precision".to_string(),
            })
    }
}

fn decimal_from_f64(field: &str, value: f64) -> Result<Decimal, EmployeeError> {
    if !value.is_finite() {
        return Err(EmployeeError::IncorrectDataType {
            field: field.to_string(),
            expected: "a finite decimal amount".to_string(),
            value: value.to_string(),
        });
    }

    Decimal::from_f64(value).ok_or_else(|| EmployeeError::IncorrectDataType {
        field: field.to_string(),
        expected: "a decimal amount within range".to_string(),
        value: value.to_string(),
    })
}

/// The employee inputs as collected from a text-based shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEmployeeInput {
    /// The basic monthly salary as entered.
    pub basic_monthly_salary: String,
    /// The transportation allowance as entered.
    pub transportation_allowance: String,
    /// The worked days as entered.
    pub worked_days: String,
    /// The service bonus days as entered.
    pub severance_pay_for_accrued_leave_days: String,
}

impl TryFrom<RawEmployeeInput> for EmployeeRecord {
    type Error = EmployeeError;

    fn try_from(raw: RawEmployeeInput) -> Result<Self, Self::Error> {
        Ok(EmployeeRecord {
            basic_monthly_salary: parse_amount("basic_monthly_salary", &raw.basic_monthly_salary)?,
            transportation_allowance: parse_amount(
                "transportation_allowance",
                &raw.transportation_allowance,
            )?,
            worked_days: parse_days("worked_days", &raw.worked_days)?,
            severance_pay_for_accrued_leave_days: parse_days(
                "severance_pay_for_accrued_leave_days",
                &raw.severance_pay_for_accrued_leave_days,
            )?,
        })
    }
}

/// Parses a monetary amount, reporting malformed text as
/// [`EmployeeError::IncorrectDataType`].
///
/// Plain decimal text and exponent notation (`1e16`, `2.5E-3`) are both
/// accepted.
pub fn parse_amount(field: &str, raw: &str) -> Result<Decimal, EmployeeError> {
    let text = raw.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| EmployeeError::IncorrectDataType {
            field: field.to_string(),
            expected: "a decimal amount".to_string(),
            value: raw.to_string(),
        })
}

/// Parses a whole day count, reporting malformed text as
/// [`EmployeeError::IncorrectDataType`].
///
/// Integers too large for a day count are reported as
/// [`EmployeeError::NumberOutOfRange`] and integers too small as
/// [`EmployeeError::NegativeValue`], the same errors the validator raises
/// for in-range values.
pub fn parse_days(field: &str, raw: &str) -> Result<i32, EmployeeError> {
    let text = raw.trim();
    text.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => EmployeeError::NumberOutOfRange {
            field: field.to_string(),
            value: text.to_string(),
            expected: format!("0 to {}", DAYS_IN_LABOR_YEAR),
        },
        IntErrorKind::NegOverflow => EmployeeError::NegativeValue {
            field: field.to_string(),
            value: text.to_string(),
        },
        _ => EmployeeError::IncorrectDataType {
            field: field.to_string(),
            expected: "a whole number of days".to_string(),
            value: raw.to_string(),
        },
    })
}
