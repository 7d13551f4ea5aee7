//! Legal constants of the modelled labor regime.
//!
//! These structures are deserialized from `legal.yaml`. The built-in
//! [`Default`] carries the Colombian values so the engine works without a
//! configuration directory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata about the legal regime the constants describe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeMetadata {
    /// The human-readable name of the regime.
    pub name: String,
    /// The version or effective date of the constants.
    pub version: String,
    /// URL to the official legal text.
    pub source_url: String,
}

/// Days of salary owed by an indefinite-term indemnity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndemnityTier {
    /// Days owed for the first year of service, also the minimum for
    /// shorter tenures.
    pub first_year_days: Decimal,
    /// Days owed for each year after the first, pro-rated for fractions.
    pub additional_year_days: Decimal,
}

/// Rules of the indefinite-term indemnity (Art. 64 CST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndefiniteTermRules {
    /// Salaries at or above this many minimum wages use the high earner tier.
    pub high_earner_threshold_multiple: Decimal,
    /// Tier for salaries below the threshold.
    pub standard: IndemnityTier,
    /// Tier for salaries at or above the threshold.
    pub high_earner: IndemnityTier,
}

/// Rules of the fixed-term indemnity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedTermRules {
    /// Length in months of a one-year fixed term.
    pub one_year_term_months: u32,
}

/// The complete set of legal constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalConstants {
    /// Regime metadata.
    pub regime: RegimeMetadata,
    /// The minimum monthly legal wage (SMMLV).
    pub minimum_monthly_wage: Decimal,
    /// Salaries above this many minimum wages are not eligible for the
    /// transportation allowance.
    pub transportation_allowance_eligibility_multiple: Decimal,
    /// Fixed-term indemnity rules.
    pub fixed_term: FixedTermRules,
    /// Indefinite-term indemnity rules.
    pub indefinite_term: IndefiniteTermRules,
}

impl LegalConstants {
    /// Returns the salary from which the high earner tier applies.
    pub fn high_earner_threshold(&self) -> Decimal {
        self.minimum_monthly_wage
            .checked_mul(self.indefinite_term.high_earner_threshold_multiple)
            .unwrap_or(Decimal::MAX)
    }

    /// Returns the highest salary still eligible for the transportation
    /// allowance.
    pub fn transportation_allowance_ceiling(&self) -> Decimal {
        self.minimum_monthly_wage
            .checked_mul(self.transportation_allowance_eligibility_multiple)
            .unwrap_or(Decimal::MAX)
    }

    /// Returns the indemnity tier that applies to a monthly salary.
    pub fn indemnity_tier(&self, basic_monthly_salary: Decimal) -> &IndemnityTier {
        if basic_monthly_salary < self.high_earner_threshold() {
            &self.indefinite_term.standard
        } else {
            &self.indefinite_term.high_earner
        }
    }

    /// Checks that the constants can drive the formulas.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.minimum_monthly_wage <= Decimal::ZERO {
            return Err("minimum_monthly_wage must be positive".to_string());
        }
        if self.indefinite_term.high_earner_threshold_multiple <= Decimal::ZERO {
            return Err("high_earner_threshold_multiple must be positive".to_string());
        }
        if self.transportation_allowance_eligibility_multiple < Decimal::ZERO {
            return Err("transportation_allowance_eligibility_multiple must not be negative".to_string());
        }
        if self.fixed_term.one_year_term_months == 0 {
            return Err("one_year_term_months must be positive".to_string());
        }
        for (name, tier) in [
            ("standard", &self.indefinite_term.standard),
            ("high_earner", &self.indefinite_term.high_earner),
        ] {
            if tier.first_year_days < Decimal::ZERO || tier.additional_year_days < Decimal::ZERO {
                return Err(format!("{} tier day counts must not be negative", name));
            }
        }
        Ok(())
    }
}

impl Default for LegalConstants {
    fn default() -> Self {
        Self {
            regime: RegimeMetadata {
                name: "Código Sustantivo del Trabajo (Colombia)".to_string(),
                version: "2025-01-01".to_string(),
                source_url: "http://www.secretariasenado.gov.co/senado/basedoc/codigo_sustantivo_trabajo.html".to_string(),
            },
            minimum_monthly_wage: Decimal::new(1_423_500, 0),
            transportation_allowance_eligibility_multiple: Decimal::TWO,
            fixed_term: FixedTermRules {
                one_year_term_months: 12,
            },
            indefinite_term: IndefiniteTermRules {
                high_earner_threshold_multiple: Decimal::TEN,
                standard: IndemnityTier {
                    first_year_days: Decimal::new(30, 0),
                    additional_year_days: Decimal::new(20, 0),
                },
                high_earner: IndemnityTier {
                    first_year_days: Decimal::new(20, 0),
                    additional_year_days: Decimal::new(15, 0),
                },
            },
        }
    }
}
