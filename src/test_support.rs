//! In-memory ledger used by unit tests.

use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        account::{Account, TransactionPoint},
        category::{AggregateRow, CategoryType},
    },
    services::ledger_service::LedgerStore,
};

struct Owned<T> {
    user_id: Uuid,
    id: Uuid,
    value: T,
}

struct LedgerTransaction {
    user_id: Uuid,
    account_id: Uuid,
    category_id: Uuid,
    business_id: Uuid,
    date: NaiveDate,
    amount_cents: i64,
}

/// Ledger kept in vectors, answering the same queries as the SQL store.
#[derive(Default)]
pub struct MemoryLedger {
    accounts: Vec<Owned<String>>,
    categories: Vec<Owned<(String, CategoryType)>>,
    businesses: Vec<Owned<String>>,
    transactions: Vec<LedgerTransaction>,
    queries: AtomicUsize,
    fail: bool,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every query fails with a pool timeout.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn add_account(&mut self, user_id: Uuid, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.accounts.push(Owned {
            user_id,
            id,
            value: name.to_string(),
        });
        id
    }

    pub fn add_category(&mut self, user_id: Uuid, name: &str, kind: CategoryType) -> Uuid {
        let id = Uuid::new_v4();
        self.categories.push(Owned {
            user_id,
            id,
            value: (name.to_string(), kind),
        });
        id
    }

    pub fn add_business(&mut self, user_id: Uuid, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.businesses.push(Owned {
            user_id,
            id,
            value: name.to_string(),
        });
        id
    }

    pub fn add_transaction(
        &mut self,
        user_id: Uuid,
        account_id: Uuid,
        category_id: Uuid,
        business_id: Uuid,
        date: NaiveDate,
        amount_cents: i64,
    ) {
        self.transactions.push(LedgerTransaction {
            user_id,
            account_id,
            category_id,
            business_id,
            date,
            amount_cents,
        });
    }

    fn begin_query(&self) -> Result<(), AppError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::QueryFailure(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    // Joined rows must belong to the same user as the transaction
    fn category(&self, user_id: Uuid, id: Uuid) -> Option<&(String, CategoryType)> {
        self.categories
            .iter()
            .find(|c| c.id == id && c.user_id == user_id)
            .map(|c| &c.value)
    }

    fn business(&self, user_id: Uuid, id: Uuid) -> Option<&String> {
        self.businesses
            .iter()
            .find(|b| b.id == id && b.user_id == user_id)
            .map(|b| &b.value)
    }

    fn sum_by<F>(&self, user_id: Uuid, category_type: CategoryType, label: F) -> Vec<(String, i64)>
    where
        F: Fn(&LedgerTransaction) -> Option<String>,
    {
        let mut totals: BTreeMap<String, i64> = BTreeMap::new();
        for tx in self.transactions.iter().filter(|tx| tx.user_id == user_id) {
            let Some((_, kind)) = self.category(user_id, tx.category_id) else {
                continue;
            };
            if *kind != category_type {
                continue;
            }
            if let Some(label) = label(tx) {
                *totals.entry(label).or_insert(0) += tx.amount_cents;
            }
        }
        totals.into_iter().collect()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedger {
    async fn totals_by_category(
        &self,
        user_id: Uuid,
        category_type: CategoryType,
    ) -> Result<Vec<AggregateRow>, AppError> {
        self.begin_query()?;
        let rows = self
            .sum_by(user_id, category_type, |tx| {
                self.category(user_id, tx.category_id).map(|(name, _)| name.clone())
            })
            .into_iter()
            .map(|(label, total_cents)| AggregateRow {
                label,
                total_cents,
                category_type: None,
            })
            .collect();
        Ok(rows)
    }

    async fn totals_by_business(
        &self,
        user_id: Uuid,
        category_type: CategoryType,
    ) -> Result<Vec<AggregateRow>, AppError> {
        self.begin_query()?;
        let rows = self
            .sum_by(user_id, category_type, |tx| {
                self.business(user_id, tx.business_id).cloned()
            })
            .into_iter()
            .map(|(label, total_cents)| AggregateRow {
                label,
                total_cents,
                category_type: Some(category_type),
            })
            .collect();
        Ok(rows)
    }

    async fn accounts(&self, user_id: Uuid) -> Result<Vec<Account>, AppError> {
        self.begin_query()?;
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .filter(|a| a.user_id == user_id)
            .map(|a| Account {
                id: a.id,
                account_name: a.value.clone(),
            })
            .collect();
        accounts.sort_by(|a, b| a.account_name.cmp(&b.account_name));
        Ok(accounts)
    }

    async fn account_transactions(
        &self,
        user_id: Uuid,
        account_id: Uuid,
    ) -> Result<Vec<TransactionPoint>, AppError> {
        self.begin_query()?;
        let mut points: Vec<TransactionPoint> = self
            .transactions
            .iter()
            .filter(|tx| tx.user_id == user_id && tx.account_id == account_id)
            .map(|tx| TransactionPoint {
                transaction_date: tx.date,
                amount_cents: tx.amount_cents,
            })
            .collect();
        // Stable sort keeps insertion order within a day
        points.sort_by_key(|p| p.transaction_date);
        Ok(points)
    }
}
