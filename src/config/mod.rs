//! Configuration loading and management for the Liquidation Engine.
//!
//! This module provides the legal constants of the modelled regime, with
//! built-in defaults and a loader for a `legal.yaml` override.
//!
//! # Example
//!
//! ```no_run
//! use liquidation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/colombia").unwrap();
//! println!("Minimum wage: {}", config.constants().minimum_monthly_wage);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, LEGAL_CONSTANTS_FILE};
pub use types::{FixedTermRules, IndefiniteTermRules, IndemnityTier, LegalConstants, RegimeMetadata};
