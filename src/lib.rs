//! Liquidation Engine for Colombian labor law
//!
//! This crate computes the statutory payments owed when an employment
//! contract ends: severance pay, interest on severance, the service bonus,
//! accrued vacation pay and, for unjustified dismissals, the termination
//! indemnity.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
