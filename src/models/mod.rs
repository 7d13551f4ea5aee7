//! Core data models for the Liquidation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod contract;
mod employee;
mod liquidation_result;

pub use contract::{CONTRACT_DATE_FORMAT, ContractPeriod, ContractType, parse_contract_date};
pub use employee::{EmployeeRecord, RawEmployeeInput, parse_amount, parse_days};
pub use liquidation_result::{
    AuditStep, AuditTrace, AuditWarning, CompensationResult, LiquidationComponents,
    LiquidationResult,
};
