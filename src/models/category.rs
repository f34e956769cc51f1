//! Category classification and grouped aggregate rows.

use std::fmt;

/// Classification of a ledger category.
///
/// Stored in PostgreSQL as the `category_type` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "category_type")]
pub enum CategoryType {
    Income,
    Expense,
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryType::Income => write!(f, "Income"),
            CategoryType::Expense => write!(f, "Expense"),
        }
    }
}

/// A summed total for one label (category or business name).
///
/// Produced by the ledger store and consumed immediately by a report.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AggregateRow {
    pub label: String,

    /// Sum of transaction amounts in minor units
    pub total_cents: i64,

    /// Category type of the grouped transactions. Only business
    /// aggregates carry it.
    pub category_type: Option<CategoryType>,
}
