//! Report kinds, the data shapes fed to the chart renderers, and the
//! embeddable chart artifact returned to the page layer.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::AppError;

/// The fixed set of reports this service can render.
///
/// Adding a variant forces updates to `name` and to the dispatcher in
/// `report_service::render`, since both match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    ExpensesByCategory,
    ExpensesByBusiness,
    IncomeByCategory,
    IncomeByBusiness,
    CashFlow,
    AccountBalances,
}

impl ReportKind {
    /// Every report kind, in the order they are listed to clients.
    pub const ALL: [ReportKind; 6] = [
        ReportKind::ExpensesByCategory,
        ReportKind::ExpensesByBusiness,
        ReportKind::IncomeByCategory,
        ReportKind::IncomeByBusiness,
        ReportKind::CashFlow,
        ReportKind::AccountBalances,
    ];

    /// Human-readable report name, as requested by clients.
    pub fn name(self) -> &'static str {
        match self {
            ReportKind::ExpensesByCategory => "Expenses by Category",
            ReportKind::ExpensesByBusiness => "Expenses by Business",
            ReportKind::IncomeByCategory => "Income by Category",
            ReportKind::IncomeByBusiness => "Income by Business",
            ReportKind::CashFlow => "Cash Flow",
            ReportKind::AccountBalances => "Account Balances",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact, case-sensitive match against the report names.
impl FromStr for ReportKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| AppError::UnknownReportKind(s.to_string()))
    }
}

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

impl PieSlice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A named line series: parallel date and amount sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub name: String,
    pub dates: Vec<NaiveDate>,
    pub amounts: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, date: NaiveDate, amount: f64) {
        self.dates.push(date);
        self.amounts.push(amount);
    }
}

/// Line chart input: one series per source (an account).
///
/// The name is only the trace label; two series may share it. Series keep
/// the order in which they were added, and that order decides each line's
/// color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesDataset {
    series: Vec<Series>,
}

impl SeriesDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, series: Series) {
        self.series.push(series);
    }

    /// First series labelled `name`.
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// Embeddable chart output: a `<script>` fragment and the `<div>` it draws into.
#[derive(Debug, Clone, Serialize)]
pub struct ChartArtifact {
    pub script: String,
    pub markup: String,
}

/// Response body for `GET /api/v1/reports/{name}`.
///
/// # JSON Example
///
/// ```json
/// {
///   "report": "Cash Flow",
///   "script": "<script type=\"text/javascript\">Plotly.newPlot(...)</script>",
///   "markup": "<div id=\"report-...\" class=\"report-chart\"></div>"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report: String,
    pub script: String,
    pub markup: String,
}

impl ReportResponse {
    pub fn new(report: impl Into<String>, artifact: ChartArtifact) -> Self {
        Self {
            report: report.into(),
            script: artifact.script,
            markup: artifact.markup,
        }
    }
}

/// Response body for `GET /api/v1/reports`.
#[derive(Debug, Serialize)]
pub struct ReportListResponse {
    pub reports: Vec<&'static str>,
}
