//! Business logic services.
//!
//! Services hold the report logic separated from HTTP handlers: ledger
//! queries, report computations, and chart rendering.

pub mod chart_service;
pub mod ledger_service;
pub mod report_service;
