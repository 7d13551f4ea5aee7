//! Calculation logic for the Liquidation Engine.
//!
//! This module contains the four statutory liquidation formulas (severance
//! pay, severance interest, service bonus and vacation pay), the
//! orchestration that validates a record and runs them in order, and the
//! termination indemnity calculation that branches on contract type.
//!
//! Every formula expects a record that has passed
//! [`crate::validation::verify_exceptions`] and returns amounts rounded to
//! cents.

mod compensation;
mod liquidation;
mod proration;
mod service_bonus;
mod severance;
mod vacation;

pub use compensation::{COMPENSATION_LEGAL_REF, calculate_compensation, compute_compensation};
pub use liquidation::{
    ALLOWANCE_ABOVE_CEILING_WARNING, LiquidationCalculation, calculate_liquidation,
};
pub use proration::{
    DAYS_IN_LABOR_MONTH, DAYS_IN_LABOR_YEAR, MONEY_DECIMAL_PLACES, VACATION_DIVISOR, checked_sum,
    prorate, round_money, severance_interest_rate,
};
pub use service_bonus::{SERVICE_BONUS_LEGAL_REF, calculate_service_bonus};
pub use severance::{
    SEVERANCE_INTEREST_LEGAL_REF, SEVERANCE_PAY_LEGAL_REF, calculate_severance_pay_amount,
    calculate_severance_pay_interest,
};
pub use vacation::{VACATION_LEGAL_REF, calculate_vacation};
