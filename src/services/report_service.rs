//! Report service - the six report computations and the dispatcher.
//!
//! Each report runs its ledger queries for one user and reshapes the rows
//! into the input of one chart renderer:
//!
//! | Report               | Grouped by    | Category type | Chart |
//! |----------------------|---------------|---------------|-------|
//! | Expenses by Category | category name | Expense       | pie   |
//! | Expenses by Business | business name | Expense       | pie   |
//! | Income by Category   | category name | Income        | pie   |
//! | Income by Business   | business name | Income        | pie   |
//! | Cash Flow            | account       | any           | line  |
//! | Account Balances     | -             | -             | line  |
//!
//! Ledger amounts are minor units and are charted in major units.

use uuid::Uuid;

use crate::{
    error::AppError,
    models::{
        category::{AggregateRow, CategoryType},
        report::{ChartArtifact, PieSlice, ReportKind, Series, SeriesDataset},
    },
    services::{chart_service, ledger_service::LedgerStore},
};

/// Render the report called `report_name` for `user_id`.
///
/// # Errors
///
/// - `UnknownReportKind`: the name is not an exact match of a report name
/// - `QueryFailure`: a ledger query failed; nothing is rendered
pub async fn graph<S>(
    store: &S,
    user_id: Uuid,
    report_name: &str,
) -> Result<ChartArtifact, AppError>
where
    S: LedgerStore + ?Sized,
{
    let kind = report_name.parse::<ReportKind>().inspect_err(|_| {
        tracing::warn!("Unknown report requested: {:?}", report_name);
    })?;

    render(store, user_id, kind).await
}

/// Render an already-resolved report kind for `user_id`.
pub async fn render<S>(store: &S, user_id: Uuid, kind: ReportKind) -> Result<ChartArtifact, AppError>
where
    S: LedgerStore + ?Sized,
{
    tracing::debug!("Rendering '{}' for user {}", kind, user_id);

    let artifact = match kind {
        ReportKind::ExpensesByCategory => {
            chart_service::render_pie(&expenses_by_category(store, user_id).await?)
        }
        ReportKind::ExpensesByBusiness => {
            chart_service::render_pie(&expenses_by_business(store, user_id).await?)
        }
        ReportKind::IncomeByCategory => {
            chart_service::render_pie(&income_by_category(store, user_id).await?)
        }
        ReportKind::IncomeByBusiness => {
            chart_service::render_pie(&income_by_business(store, user_id).await?)
        }
        ReportKind::CashFlow => chart_service::render_line(&cash_flow(store, user_id).await?),
        ReportKind::AccountBalances => chart_service::render_line(&account_balances()),
    };

    Ok(artifact)
}

/// Expense totals per category name.
pub async fn expenses_by_category<S>(store: &S, user_id: Uuid) -> Result<Vec<PieSlice>, AppError>
where
    S: LedgerStore + ?Sized,
{
    let rows = store
        .totals_by_category(user_id, CategoryType::Expense)
        .await?;
    Ok(to_slices(rows))
}

/// Expense totals per business name.
pub async fn expenses_by_business<S>(store: &S, user_id: Uuid) -> Result<Vec<PieSlice>, AppError>
where
    S: LedgerStore + ?Sized,
{
    let rows = store
        .totals_by_business(user_id, CategoryType::Expense)
        .await?;
    Ok(to_slices(rows))
}

/// Income totals per category name.
pub async fn income_by_category<S>(store: &S, user_id: Uuid) -> Result<Vec<PieSlice>, AppError>
where
    S: LedgerStore + ?Sized,
{
    let rows = store
        .totals_by_category(user_id, CategoryType::Income)
        .await?;
    Ok(to_slices(rows))
}

/// Income totals per business name.
pub async fn income_by_business<S>(store: &S, user_id: Uuid) -> Result<Vec<PieSlice>, AppError>
where
    S: LedgerStore + ?Sized,
{
    let rows = store
        .totals_by_business(user_id, CategoryType::Income)
        .await?;
    Ok(to_slices(rows))
}

/// Dated amounts of every account, one series per account.
///
/// Issues one query for the account list, then one per account. Each
/// account gets its own series, even when names repeat or it has no
/// transactions.
pub async fn cash_flow<S>(store: &S, user_id: Uuid) -> Result<SeriesDataset, AppError>
where
    S: LedgerStore + ?Sized,
{
    let mut dataset = SeriesDataset::new();

    for account in store.accounts(user_id).await? {
        let mut series = Series::new(account.account_name);
        for point in store.account_transactions(user_id, account.id).await? {
            series.push(point.transaction_date, point.amount());
        }
        dataset.add(series);
    }

    tracing::debug!("Cash flow for user {} has {} series", user_id, dataset.len());
    Ok(dataset)
}

/// Account balances are not computed yet; the chart is always empty.
pub fn account_balances() -> SeriesDataset {
    SeriesDataset::new()
}

fn to_slices(rows: Vec<AggregateRow>) -> Vec<PieSlice> {
    rows.into_iter()
        .map(|row| PieSlice::new(row.label, row.total_cents as f64 / 100.0))
        .collect()
}
