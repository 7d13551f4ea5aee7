//! Contract types and contract periods.
//!
//! This module defines the [`ContractType`] enum that selects the
//! compensation formula and the [`ContractPeriod`] holding the dates the
//! formula works from.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The date format accepted for contract dates.
pub const CONTRACT_DATE_FORMAT: &str = "%Y-%m-%d";

/// The contract category under which an employee was hired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Fixed-term contract of one year.
    FixedTermOneYear,
    /// Fixed-term contract shorter than one year.
    FixedTermUnderOneYear,
    /// Contract without an agreed end date.
    IndefiniteTerm,
}

impl ContractType {
    /// Parses a contract type, ignoring surrounding whitespace and case.
    ///
    /// Accepts the snake_case names as well as the labels used by the
    /// Spanish console (`fijo_1_año`, `fijo_inferior_1_año`, `indefinido`).
    /// Returns `None` for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use liquidation_engine::models::ContractType;
    ///
    /// assert_eq!(
    ///     ContractType::parse("  Indefinite_Term "),
    ///     Some(ContractType::IndefiniteTerm)
    /// );
    /// assert_eq!(ContractType::parse("FIJO_1_AÑO"), Some(ContractType::FixedTermOneYear));
    /// assert_eq!(ContractType::parse("seasonal"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "fixed_term_one_year" | "fijo_1_año" => Some(ContractType::FixedTermOneYear),
            "fixed_term_under_one_year" | "fijo_inferior_1_año" => {
                Some(ContractType::FixedTermUnderOneYear)
            }
            "indefinite_term" | "indefinido" => Some(ContractType::IndefiniteTerm),
            _ => None,
        }
    }

    /// Returns the snake_case name of the contract type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::FixedTermOneYear => "fixed_term_one_year",
            ContractType::FixedTermUnderOneYear => "fixed_term_under_one_year",
            ContractType::IndefiniteTerm => "indefinite_term",
        }
    }

    /// Returns true for both fixed-term variants.
    pub fn is_fixed_term(&self) -> bool {
        !matches!(self, ContractType::IndefiniteTerm)
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractType::parse(s).ok_or_else(|| EngineError::UnknownContractType {
            value: s.to_string(),
        })
    }
}

/// The dates of a terminated contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractPeriod {
    /// The contract category.
    pub contract_type: ContractType,
    /// The date the contract started.
    pub start_date: NaiveDate,
    /// The date the contract was actually terminated.
    pub end_date: NaiveDate,
    /// The end date agreed in a fixed-term contract, if known.
    pub agreed_end_date: Option<NaiveDate>,
}

impl ContractPeriod {
    /// Creates a contract period, rejecting an end date before the start date.
    pub fn new(
        contract_type: ContractType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        agreed_end_date: Option<NaiveDate>,
    ) -> EngineResult<Self> {
        if end_date < start_date {
            return Err(EngineError::InvalidDate {
                value: end_date.to_string(),
                message: format!("end date precedes start date {}", start_date),
            });
        }

        Ok(Self {
            contract_type,
            start_date,
            end_date,
            agreed_end_date,
        })
    }

    /// Returns the whole calendar days between start and termination.
    pub fn elapsed_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// Parses a contract date in `YYYY-MM-DD` form.
pub fn parse_contract_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), CONTRACT_DATE_FORMAT).map_err(|e| {
        EngineError::InvalidDate {
            value: value.to_string(),
            message: format!("expected YYYY-MM-DD ({})", e),
        }
    })
}
