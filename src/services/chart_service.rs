//! Chart rendering.
//!
//! Two shapes are supported: a donut-style pie fed by labelled slices and a
//! time-axis line chart fed by a `SeriesDataset`. Both end up as a plotly
//! figure that is reduced to an embeddable `ChartArtifact`.

use plotly::{
    Configuration, Layout, Pie, Plot, Scatter,
    color::NamedColor,
    common::{Line, Mode, Title},
    layout::{Axis, AxisType},
};
use uuid::Uuid;

use crate::models::report::{ChartArtifact, PieSlice, SeriesDataset};

/// Label of the slice drawn when a pie report has no rows.
pub const NO_DATA_LABEL: &str = "No Data";

/// Value of the placeholder slice.
pub const NO_DATA_VALUE: f64 = 100.0;

const DONUT_HOLE: f64 = 0.4;
const LINE_WIDTH: f64 = 2.0;

/// Colors assigned to line series, cycled by series position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Red,
    Green,
    Blue,
}

impl SeriesColor {
    fn named(self) -> NamedColor {
        match self {
            SeriesColor::Red => NamedColor::Red,
            SeriesColor::Green => NamedColor::Green,
            SeriesColor::Blue => NamedColor::Blue,
        }
    }
}

const SERIES_COLORS: [SeriesColor; 3] = [SeriesColor::Red, SeriesColor::Green, SeriesColor::Blue];

/// Color of the series at `position` in iteration order.
pub fn line_color(position: usize) -> SeriesColor {
    SERIES_COLORS[position % SERIES_COLORS.len()]
}

/// Slices to draw for `slices`, substituting the "No Data" placeholder
/// for an empty input. Non-empty input is passed through untouched.
pub fn pie_slices(slices: &[PieSlice]) -> Vec<PieSlice> {
    if slices.is_empty() {
        vec![PieSlice::new(NO_DATA_LABEL, NO_DATA_VALUE)]
    } else {
        slices.to_vec()
    }
}

fn pie_plot(slices: &[PieSlice]) -> Plot {
    let slices = pie_slices(slices);
    let (labels, values): (Vec<String>, Vec<f64>) = slices
        .into_iter()
        .map(|slice| (slice.label, slice.value))
        .unzip();

    let mut plot = Plot::new();
    plot.add_trace(Pie::new(values).labels(labels).hole(DONUT_HOLE));
    plot.set_layout(Layout::new().auto_size(true));
    plot.set_configuration(responsive_config());
    plot
}

fn line_plot(dataset: &SeriesDataset) -> Plot {
    let mut plot = Plot::new();

    for (position, series) in dataset.iter().enumerate() {
        let trace = Scatter::new(series.dates.clone(), series.amounts.clone())
            .name(&series.name)
            .mode(Mode::Lines)
            .line(
                Line::new()
                    .color(line_color(position).named())
                    .width(LINE_WIDTH),
            );
        plot.add_trace(trace);
    }

    let layout = Layout::new()
        .auto_size(true)
        .show_legend(true)
        .x_axis(
            Axis::new()
                .type_(AxisType::Date)
                .title(Title::with_text("Date")),
        )
        .y_axis(Axis::new().title(Title::with_text("Amount")));
    plot.set_layout(layout);
    plot.set_configuration(responsive_config());
    plot
}

// Sized by the container; no plotly logo
fn responsive_config() -> Configuration {
    Configuration::new().responsive(true).display_logo(false)
}

/// Render a pie chart. An empty input renders a single "No Data" slice.
pub fn render_pie(slices: &[PieSlice]) -> ChartArtifact {
    embed(&pie_plot(slices))
}

/// Render a time-axis line chart, one line per series.
///
/// An empty dataset renders axes only.
pub fn render_line(dataset: &SeriesDataset) -> ChartArtifact {
    embed(&line_plot(dataset))
}

/// Split a figure into a markup container and the script that draws into it.
fn embed(plot: &Plot) -> ChartArtifact {
    let element_id = format!("report-{}", Uuid::new_v4().simple());
    // Keep label text from closing the script element early
    let figure = plot.to_json().replace("</", "<\\/");

    let markup = format!(r#"<div id="{element_id}" class="report-chart"></div>"#);
    let script = format!(
        r#"<script type="text/javascript">Plotly.newPlot("{element_id}", {figure});</script>"#
    );

    ChartArtifact { script, markup }
}
