//! Termination indemnity (indemnización) calculation.
//!
//! The indemnity owed for an unjustified dismissal depends on the contract
//! type (Art. 64 CST):
//!
//! - Fixed-term contracts owe the salary of the unexpired part of the agreed
//!   term.
//! - Indefinite-term contracts owe a number of days of salary that grows
//!   with tenure, with a lower tier for high earners.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::config::LegalConstants;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, CompensationResult, ContractPeriod, ContractType, EmployeeRecord,
    parse_contract_date,
};
use crate::validation::verify_exceptions;

use super::proration::{
    DAYS_IN_LABOR_MONTH, DAYS_IN_LABOR_YEAR, checked_sum, prorate, round_money,
};

/// Legal reference for the termination indemnity.
pub const COMPENSATION_LEGAL_REF: &str = "Art. 64 CST";

/// Calculates the termination indemnity from text inputs.
///
/// Both dates are parsed as `YYYY-MM-DD` first; a date that cannot be parsed
/// or an end date before the start date fails with
/// [`EngineError::InvalidDate`]. An unrecognised `type_of_contract` is not an
/// error: the function returns `Ok(None)` and leaves reporting to the caller.
///
/// # Arguments
///
/// * `employee` - The employee record; its basic monthly salary sets the daily rate
/// * `type_of_contract` - A snake_case contract name or a Spanish console label
/// * `start_date` - The contract start date as `YYYY-MM-DD`
/// * `end_date` - The termination date as `YYYY-MM-DD`
/// * `agreed_end_date` - The agreed end of a fixed-term contract, if known
/// * `constants` - The legal constants supplying the indemnity tiers
///
/// # Returns
///
/// Returns `Ok(Some(CompensationResult))` for a recognised contract type,
/// `Ok(None)` for an unrecognised one, or the first date, contract or
/// employee error encountered.
///
/// # Legal Reference
///
/// Art. 64 of the Código Sustantivo del Trabajo.
///
/// # Examples
///
/// ```
/// use liquidation_engine::calculation::calculate_compensation;
/// use liquidation_engine::config::LegalConstants;
/// use liquidation_engine::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeRecord::new(Decimal::new(1_200_000, 0), Decimal::ZERO, 60, 60);
/// let constants = LegalConstants::default();
///
/// let result = calculate_compensation(
///     &employee, "indefinido", "2024-01-01", "2024-03-01", None, &constants,
/// )
/// .unwrap()
/// .unwrap();
/// assert_eq!(result.amount, Decimal::new(1_200_000, 0));
///
/// let unknown = calculate_compensation(
///     &employee, "seasonal", "2024-01-01", "2024-03-01", None, &constants,
/// )
/// .unwrap();
/// assert!(unknown.is_none());
/// ```
pub fn calculate_compensation(
    employee: &EmployeeRecord,
    type_of_contract: &str,
    start_date: &str,
    end_date: &str,
    agreed_end_date: Option<&str>,
    constants: &LegalConstants,
) -> EngineResult<Option<CompensationResult>> {
    let start = parse_contract_date(start_date)?;
    let end = parse_contract_date(end_date)?;
    if end < start {
        return Err(EngineError::InvalidDate {
            value: end_date.to_string(),
            message: format!("end date precedes start date {}", start),
        });
    }

    let Some(contract_type) = ContractType::parse(type_of_contract) else {
        return Ok(None);
    };

    let agreed_end = agreed_end_date.map(parse_contract_date).transpose()?;
    let period = ContractPeriod::new(contract_type, start, end, agreed_end)?;

    compute_compensation(employee, &period, constants).map(Some)
}

/// Calculates the termination indemnity for a typed contract period.
///
/// Validates the employee record, then computes the number of days of
/// salary owed and converts them at `basic_monthly_salary / 30` a day.
///
/// # Arguments
///
/// * `employee` - The employee record to validate and compensate
/// * `period` - The contract type and its start, termination and agreed end dates
/// * `constants` - The legal constants supplying the term length and indemnity tiers
///
/// # Returns
///
/// Returns a `CompensationResult` containing the compensated days, the
/// amount rounded to cents and an audit step numbered 1.
///
/// # Errors
///
/// * [`EngineError::Employee`] when the record fails validation or an
///   intermediate amount overflows
/// * [`EngineError::InvalidContract`] when a fixed-term agreed end date is
///   missing, precedes the start date or exceeds the allowed term
pub fn compute_compensation(
    employee: &EmployeeRecord,
    period: &ContractPeriod,
    constants: &LegalConstants,
) -> EngineResult<CompensationResult> {
    verify_exceptions(employee)?;

    let salary = employee.basic_monthly_salary;
    let elapsed_days = period.elapsed_days();

    let (compensated_days, reasoning) = if period.contract_type.is_fixed_term() {
        let agreed_end = agreed_end_date(period, constants)?;
        let remaining = (agreed_end - period.end_date).num_days().max(0);
        (
            Decimal::from(remaining),
            format!(
                "Fixed term agreed until {}: {} unexpired days from termination on {}",
                agreed_end, remaining, period.end_date
            ),
        )
    } else {
        let tier = constants.indemnity_tier(salary);
        let tier_name = if salary < constants.high_earner_threshold() {
            "standard"
        } else {
            "high_earner"
        };
        let labor_year = i64::from(DAYS_IN_LABOR_YEAR);

        let days = if elapsed_days <= labor_year {
            tier.first_year_days
        } else {
            let additional = prorate(
                "compensated_days",
                tier.additional_year_days,
                Decimal::from(elapsed_days - labor_year),
                "days_in_labor_year",
                Decimal::from(DAYS_IN_LABOR_YEAR),
            )?;
            checked_sum("compensated_days", &[tier.first_year_days, additional])?
        };

        (
            days,
            format!(
                "Indefinite term, {} tier: {} elapsed days = {} labor years, {} days first year + {} days per additional year",
                tier_name,
                elapsed_days,
                years_of_service(elapsed_days).normalize(),
                tier.first_year_days.normalize(),
                tier.additional_year_days.normalize()
            ),
        )
    };

    let amount = round_money(prorate(
        "compensation",
        salary,
        compensated_days,
        "days_in_labor_month",
        Decimal::from(DAYS_IN_LABOR_MONTH),
    )?);

    let audit_step = AuditStep {
        step_number: 1,
        rule_id: "compensation".to_string(),
        rule_name: "Termination Indemnity".to_string(),
        legal_ref: COMPENSATION_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "contract_type": period.contract_type.as_str(),
            "start_date": period.start_date.to_string(),
            "end_date": period.end_date.to_string(),
            "agreed_end_date": period.agreed_end_date.map(|d| d.to_string()),
            "basic_monthly_salary": salary.to_string()
        }),
        output: serde_json::json!({
            "elapsed_days": elapsed_days,
            "compensated_days": compensated_days.round_dp(4).normalize().to_string(),
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "{}; ${} / 30 x {} days = ${}",
            reasoning,
            salary.normalize(),
            compensated_days.round_dp(4).normalize(),
            amount
        ),
    };

    Ok(CompensationResult {
        contract_type: period.contract_type,
        elapsed_days,
        compensated_days: compensated_days.round_dp(4),
        amount,
        audit_step,
    })
}

/// Resolves the agreed end of a fixed-term contract.
fn agreed_end_date(period: &ContractPeriod, constants: &LegalConstants) -> EngineResult<NaiveDate> {
    let one_year_end = period
        .start_date
        .checked_add_months(Months::new(constants.fixed_term.one_year_term_months))
        .ok_or_else(|| EngineError::InvalidContract {
            message: format!("cannot add one year to start date {}", period.start_date),
        })?;

    let agreed_end = match (period.contract_type, period.agreed_end_date) {
        (_, Some(date)) => date,
        (ContractType::FixedTermOneYear, None) => one_year_end,
        (contract_type, None) => {
            return Err(EngineError::InvalidContract {
                message: format!("{} contracts require an agreed end date", contract_type),
            });
        }
    };

    if agreed_end < period.start_date {
        return Err(EngineError::InvalidContract {
            message: format!(
                "agreed end date {} precedes start date {}",
                agreed_end, period.start_date
            ),
        });
    }

    if period.contract_type == ContractType::FixedTermUnderOneYear && agreed_end > one_year_end {
        return Err(EngineError::InvalidContract {
            message: format!(
                "agreed end date {} makes the term longer than one year",
                agreed_end
            ),
        });
    }

    Ok(agreed_end)
}

fn years_of_service(elapsed_days: i64) -> Decimal {
    (Decimal::from(elapsed_days) / Decimal::from(DAYS_IN_LABOR_YEAR)).round_dp(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmployeeError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn employee(salary: &str) -> EmployeeRecord {
        EmployeeRecord::new(dec(salary), dec("0"), 180, 180)
    }

    fn period(
        contract_type: ContractType,
        start: &str,
        end: &str,
        agreed_end: Option<&str>,
    ) -> ContractPeriod {
        ContractPeriod::new(contract_type, date(start), date(end), agreed_end.map(date)).unwrap()
    }

    /// COMP-001: indefinite term under a year gets the first-year minimum
    #[test]
    fn test_indefinite_short_tenure_gets_first_year_days() {
        let p = period(ContractType::IndefiniteTerm, "2024-01-01", "2024-03-01", None);
        let result = compute_compensation(&employee("1200000"), &p, &LegalConstants::default()).unwrap();

        assert_eq!(result.elapsed_days, 60);
        assert_eq!(result.compensated_days, dec("30"));
        assert_eq!(result.amount, dec("1200000.00"));
    }

    /// COMP-002: exactly one labor year still owes only the first-year days
    #[test]
    fn test_indefinite_exactly_one_labor_year() {
        let p = period(ContractType::IndefiniteTerm, "2024-01-01", "2024-12-26", None);
        assert_eq!(p.elapsed_days(), 360);
        let result = compute_compensation(&employee("1200000"), &p, &LegalConstants::default()).unwrap();
        assert_eq!(result.compensated_days, dec("30"));
    }

    /// COMP-003: two labor years owe 30 + 20 days below the threshold
    #[test]
    fn test_indefinite_two_years_standard_tier() {
        let p = period(ContractType::IndefiniteTerm, "2021-01-01", "2022-12-22", None);
        assert_eq!(p.elapsed_days(), 720);
        let result = compute_compensation(&employee("1200000"), &p, &LegalConstants::default()).unwrap();

        assert_eq!(result.compensated_days, dec("50"));
        assert_eq!(result.amount, dec("2000000.00"));
    }

    /// COMP-004: high earners owe 20 + 15 days for two years
    #[test]
    fn test_indefinite_two_years_high_earner_tier() {
        let p = period(ContractType::IndefiniteTerm, "2021-01-01", "2022-12-22", None);
        let result = compute_compensation(&employee("20000000"), &p, &LegalConstants::default()).unwrap();

        assert_eq!(result.compensated_days, dec("35"));
        assert_eq!(result.amount, dec("23333333.33"));
        assert!(result.audit_step.reasoning.contains("high_earner"));
    }

    /// COMP-005: fractions of a year are pro-rated
    #[test]
    fn test_indefinite_fraction_of_year_is_prorated() {
        // 540 days = 1.5 labor years -> 30 + 0.5 * 20 = 40 days
        let p = period(ContractType::IndefiniteTerm, "2023-01-01", "2024-06-24", None);
        assert_eq!(p.elapsed_days(), 540);
        let result = compute_compensation(&employee("1500000"), &p, &LegalConstants::default()).unwrap();

        assert_eq!(result.compensated_days, dec("40"));
        assert_eq!(result.amount, dec("2000000.00"));
    }

    /// COMP-006: one-year fixed term defaults to twelve months from start
    #[test]
    fn test_fixed_one_year_defaults_agreed_end() {
        let p = period(ContractType::FixedTermOneYear, "2024-01-01", "2024-07-01", None);
        let result = compute_compensation(&employee("1000000"), &p, &LegalConstants::default()).unwrap();

        // 2024-07-01 -> 2025-01-01 = 184 days
        assert_eq!(result.compensated_days, dec("184"));
        assert_eq!(result.amount, dec("6133333.33"));
    }

    /// COMP-007: under-one-year fixed term uses the agreed end date
    #[test]
    fn test_fixed_under_one_year_uses_agreed_end() {
        let p = period(
            ContractType::FixedTermUnderOneYear,
            "2024-01-01",
            "2024-03-01",
            Some("2024-03-31"),
        );
        let result = compute_compensation(&employee("900000"), &p, &LegalConstants::default()).unwrap();

        assert_eq!(result.compensated_days, dec("30"));
        assert_eq!(result.amount, dec("900000.00"));
    }

    /// COMP-008: termination after the agreed end owes nothing
    #[test]
    fn test_fixed_term_remaining_days_floor_at_zero() {
        let p = period(
            ContractType::FixedTermOneYear,
            "2023-01-01",
            "2024-02-01",
            None,
        );
        let result = compute_compensation(&employee("1000000"), &p, &LegalConstants::default()).unwrap();
        assert_eq!(result.compensated_days, Decimal::ZERO);
        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_fixed_under_one_year_requires_agreed_end() {
        let p = period(ContractType::FixedTermUnderOneYear, "2024-01-01", "2024-03-01", None);
        assert!(matches!(
            compute_compensation(&employee("1000000"), &p, &LegalConstants::default()),
            Err(EngineError::InvalidContract { .. })
        ));
    }

    #[test]
    fn test_fixed_under_one_year_rejects_term_over_a_year() {
        let p = period(
            ContractType::FixedTermUnderOneYear,
            "2024-01-01",
            "2024-03-01",
            Some("2025-06-01"),
        );
        assert!(matches!(
            compute_compensation(&employee("1000000"), &p, &LegalConstants::default()),
            Err(EngineError::InvalidContract { .. })
        ));
    }

    #[test]
    fn test_agreed_end_before_start_is_invalid_contract() {
        let p = period(
            ContractType::FixedTermOneYear,
            "2024-01-01",
            "2024-03-01",
            Some("2023-12-01"),
        );
        assert!(matches!(
            compute_compensation(&employee("1000000"), &p, &LegalConstants::default()),
            Err(EngineError::InvalidContract { .. })
        ));
    }

    #[test]
    fn test_invalid_employee_is_rejected_before_computing() {
        let p = period(ContractType::IndefiniteTerm, "2024-01-01", "2024-03-01", None);
        let record = EmployeeRecord::new(dec("0"), dec("0"), 30, 30);
        assert!(matches!(
            compute_compensation(&record, &p, &LegalConstants::default()),
            Err(EngineError::Employee(EmployeeError::DivisionByZero { .. }))
        ));
    }

    #[test]
    fn test_end_before_start_is_invalid_date_for_every_contract_type() {
        for contract_type in [
            "fixed_term_one_year",
            "fixed_term_under_one_year",
            "indefinite_term",
        ] {
            let result = calculate_compensation(
                &employee("1000000"),
                contract_type,
                "2024-06-01",
                "2024-05-01",
                Some("2024-12-01"),
                &LegalConstants::default(),
            );
            assert!(
                matches!(result, Err(EngineError::InvalidDate { .. })),
                "contract type {} did not fail with InvalidDate",
                contract_type
            );
        }
    }

    #[test]
    fn test_unparsable_date_is_invalid_date() {
        let result = calculate_compensation(
            &employee("1000000"),
            "indefinite_term",
            "01/01/2024",
            "2024-05-01",
            None,
            &LegalConstants::default(),
        );
        match result {
            Err(EngineError::InvalidDate { value, .. }) => assert_eq!(value, "01/01/2024"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_contract_type_returns_none() {
        let result = calculate_compensation(
            &employee("1000000"),
            "por_obra",
            "2024-01-01",
            "2024-05-01",
            None,
            &LegalConstants::default(),
        );
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_contract_type_is_trimmed_and_case_insensitive() {
        let result = calculate_compensation(
            &employee("1200000"),
            "  INDEFINITE_TERM ",
            "2024-01-01",
            "2024-03-01",
            None,
            &LegalConstants::default(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(result.contract_type, ContractType::IndefiniteTerm);
    }

    #[test]
    fn test_audit_step_records_legal_reference() {
        let p = period(ContractType::IndefiniteTerm, "2024-01-01", "2024-03-01", None);
        let result = compute_compensation(&employee("1200000"), &p, &LegalConstants::default()).unwrap();

        assert_eq!(result.audit_step.rule_id, "compensation");
        assert_eq!(result.audit_step.legal_ref, "Art. 64 CST");
        assert_eq!(
            result.audit_step.input["contract_type"].as_str().unwrap(),
            "indefinite_term"
        );
        assert_eq!(
            result.audit_step.output["amount"].as_str().unwrap(),
            "1200000.00"
        );
    }

    #[test]
    fn test_custom_tier_constants_are_used() {
        let mut constants = LegalConstants::default();
        constants.indefinite_term.standard.first_year_days = dec("45");
        let p = period(ContractType::IndefiniteTerm, "2024-01-01", "2024-03-01", None);
        let result = compute_compensation(&employee("1200000"), &p, &constants).unwrap();
        assert_eq!(result.amount, dec("1800000.00"));
    }

    /// COMP-009: oversized tier days are reported, not a panic
    #[test]
    fn test_tier_day_overflow_is_out_of_range() {
        let mut constants = LegalConstants::default();
        constants.indefinite_term.standard.first_year_days = Decimal::MAX;
        let p = period(ContractType::IndefiniteTerm, "2020-01-01", "2024-01-01", None);

        match compute_compensation(&employee("1200000"), &p, &constants) {
            Err(EngineError::Employee(EmployeeError::NumberOutOfRange { field, .. })) => {
                assert_eq!(field, "compensated_days");
            }
            other => panic!("Expected NumberOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_tier_days_overflowing_the_amount_are_out_of_range() {
        let mut constants = LegalConstants::default();
        constants.indefinite_term.standard.first_year_days = Decimal::MAX;
        let p = period(ContractType::IndefiniteTerm, "2024-01-01", "2024-03-01", None);

        let result = compute_compensation(&employee("1200000"), &p, &constants);
        assert!(matches!(
            result,
            Err(EngineError::Employee(EmployeeError::NumberOutOfRange { .. }))
        ));
    }
}
