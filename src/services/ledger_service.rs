//! Ledger store queries used by the reports.
//!
//! The reports only read from the ledger. Every operation takes the user id
//! explicitly and filters on it; joined categories and businesses must be
//! owned by the same user, so no report can see another user's rows.
//! `DbPool` is the production store; tests swap in an in-memory one.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        account::{Account, TransactionPoint},
        category::{AggregateRow, CategoryType},
    },
};

/// Read-only access to a user's ledger.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Sum of transaction amounts per category name, restricted to
    /// categories of `category_type`. Rows are ordered by label.
    async fn totals_by_category(
        &self,
        user_id: Uuid,
        category_type: CategoryType,
    ) -> Result<Vec<AggregateRow>, AppError>;

    /// Sum of transaction amounts per business name, restricted to
    /// transactions whose category is of `category_type`. Rows are ordered
    /// by label and carry the category type.
    async fn totals_by_business(
        &self,
        user_id: Uuid,
        category_type: CategoryType,
    ) -> Result<Vec<AggregateRow>, AppError>;

    /// Accounts owned by the user, ordered by name.
    async fn accounts(&self, user_id: Uuid) -> Result<Vec<Account>, AppError>;

    /// Transactions of one account, ordered by date ascending.
    async fn account_transactions(
        &self,
        user_id: Uuid,
        account_id: Uuid,
    ) -> Result<Vec<TransactionPoint>, AppError>;
}

#[async_trait]
impl LedgerStore for DbPool {
    async fn totals_by_category(
        &self,
        user_id: Uuid,
        category_type: CategoryType,
    ) -> Result<Vec<AggregateRow>, AppError> {
        // SUM over BIGINT yields NUMERIC in PostgreSQL, cast back
        let rows = sqlx::query_as::<_, AggregateRow>(
            r#"
            SELECT c.category_name AS label,
                   SUM(t.amount_cents)::BIGINT AS total_cents,
                   NULL::category_type AS category_type
            FROM transactions t
            JOIN categories c ON c.id = t.category_id AND c.user_id = t.user_id
            WHERE t.user_id = $1
              AND c.category_type = $2
            GROUP BY c.category_name
            ORDER BY c.category_name
            "#,
        )
        .bind(user_id)
        .bind(category_type)
        .fetch_all(self)
        .await?;

        Ok(rows)
    }

    async fn totals_by_business(
        &self,
        user_id: Uuid,
        category_type: CategoryType,
    ) -> Result<Vec<AggregateRow>, AppError> {
        let rows = sqlx::query_as::<_, AggregateRow>(
            r#"
            SELECT b.business_name AS label,
                   SUM(t.amount_cents)::BIGINT AS total_cents,
                   c.category_type AS category_type
            FROM transactions t
            JOIN businesses b ON b.id = t.business_id AND b.user_id = t.user_id
            JOIN categories c ON c.id = t.category_id AND c.user_id = t.user_id
            WHERE t.user_id = $1
              AND c.category_type = $2
            GROUP BY b.business_name, c.category_type
            ORDER BY b.business_name
            "#,
        )
        .bind(user_id)
        .bind(category_type)
        .fetch_all(self)
        .await?;

        Ok(rows)
    }

    async fn accounts(&self, user_id: Uuid) -> Result<Vec<Account>, AppError> {
        let accounts = sqlx::query_as::<_, Account>(
            "SELECT id, account_name FROM accounts WHERE user_id = $1 ORDER BY account_name",
        )
        .bind(user_id)
        .fetch_all(self)
        .await?;

        Ok(accounts)
    }

    async fn account_transactions(
        &self,
        user_id: Uuid,
        account_id: Uuid,
    ) -> Result<Vec<TransactionPoint>, AppError> {
        let points = sqlx::query_as::<_, TransactionPoint>(
            r#"
            SELECT transaction_date, amount_cents
            FROM transactions
            WHERE user_id = $1 AND account_id = $2
            ORDER BY transaction_date, created_at
            "#,
        )
        .bind(user_id)
        .bind(account_id)
        .fetch_all(self)
        .await?;

        Ok(points)
    }
}
