//! Ledger account and per-account transaction rows.

use chrono::NaiveDate;
use uuid::Uuid;

/// An account owned by a ledger user.
///
/// Maps to the `accounts` table. Only the columns the reports read are loaded.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Account {
    pub id: Uuid,

    pub account_name: String,
}

/// One dated amount of an account, as read for the cash flow report.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TransactionPoint {
    pub transaction_date: NaiveDate,

    /// Amount in minor units (cents)
    pub amount_cents: i64,
}

impl TransactionPoint {
    /// Amount in major units.
    pub fn amount(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }
}
