//! Validation of employee records.
//!
//! Every calculation in the engine assumes a record that has passed
//! [`verify_exceptions`]; the calculators themselves do not re-validate.

mod employee_rules;

pub use employee_rules::verify_exceptions;
