//! Error types for the Liquidation Engine.
//!
//! Two layers of errors live here. [`EmployeeError`] is the family of
//! domain-rule violations raised while validating or calculating with an
//! employee record. [`EngineError`] is the crate-wide error, wrapping the
//! employee family alongside date, contract and configuration failures.

use thiserror::Error;

/// A domain-rule violation in an employee record.
///
/// Matching on `EmployeeError` as a whole handles "some rule was violated";
/// matching a single variant gives a tailored message.
///
/// # Example
///
/// ```
/// use liquidation_engine::error::EmployeeError;
///
/// let error = EmployeeError::NegativeValue {
///     field: "worked_days".to_string(),
///     value: "-5".to_string(),
/// };
/// assert_eq!(error.to_string(), "Negative value for 'worked_days': -5");
/// assert_eq!(error.code(), "NEGATIVE_VALUE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeError {
    /// A numeric field is negative.
    #[error("Negative value for '{field}': {value}")]
    NegativeValue {
        /// The offending field.
        field: String,
        /// The value that was supplied.
        value: String,
    },

    /// A field could not be interpreted as its expected numeric type.
    #[error("Incorrect data type for '{field}': expected {expected}, got '{value}'")]
    IncorrectDataType {
        /// The offending field.
        field: String,
        /// A description of the expected type.
        expected: String,
        /// The raw value that was supplied.
        value: String,
    },

    /// A formula denominator evaluated to zero.
    #[error("Division by zero: '{field}' must not be zero")]
    DivisionByZero {
        /// The field or constant acting as the divisor.
        field: String,
    },

    /// A value falls outside its legal range.
    #[error("Value for '{field}' is out of range: {value} (expected {expected})")]
    NumberOutOfRange {
        /// The offending field.
        field: String,
        /// The value that was supplied or computed.
        value: String,
        /// A description of the allowed range.
        expected: String,
    },
}

impl EmployeeError {
    /// Returns a stable machine-readable code for the variant.
    pub fn code(&self) -> &'static str {
        match self {
            EmployeeError::NegativeValue { .. } => "NEGATIVE_VALUE",
            EmployeeError::IncorrectDataType { .. } => "INCORRECT_DATA_TYPE",
            EmployeeError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            EmployeeError::NumberOutOfRange { .. } => "NUMBER_OUT_OF_RANGE",
        }
    }
}

/// The main error type for the Liquidation Engine.
///
/// # Example
///
/// ```
/// use liquidation_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/legal.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/legal.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The employee record violated a domain rule.
    #[error(transparent)]
    Employee(#[from] EmployeeError),

    /// A contract date could not be parsed or the dates are out of order.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The offending date as supplied.
        value: String,
        /// A description of what made the date invalid.
        message: String,
    },

    /// The contract metadata is inconsistent with its contract type.
    #[error("Invalid contract: {message}")]
    InvalidContract {
        /// A description of the inconsistency.
        message: String,
    },

    /// A contract type string did not match any known contract type.
    #[error("Unknown contract type: {value}")]
    UnknownContractType {
        /// The contract type as supplied.
        value: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
