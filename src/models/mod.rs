//! Data models representing database entities and report shapes.

/// API key authentication model
pub mod api_key;
/// Ledger accounts and their transactions
pub mod account;
/// Category types and aggregate rows
pub mod category;
/// Report kinds and chart artifacts
pub mod report;
