//! Descriptive output for the accident EDA.
//!
//! - **profile**: raw dataset profile (shape, types, nulls, describe, head)
//! - **charts**: data for the fixed chart sequence over the cleaned table
//! - **render**: terminal tables with bar glyphs for each chart
//! - **stats**: count, mean, standard deviation and quartiles via Polars

pub mod charts;
pub mod profile;
pub mod render;
pub mod stats;
pub mod style;

pub use charts::{
    Bar, BoxStats, Chart, ChartData, ChartKind, DEFAULT_TOP_COLLISIONS, DEFAULT_TOP_WEATHER,
    box_plot, build_chart, count_in_order, histogram, standard_charts, top_n,
};
pub use profile::{ColumnProfile, DatasetProfile, HEAD_ROWS, NumericSummary};
pub use stats::Distribution;
pub use render::{BAR_WIDTH, bar_glyphs, chart_table, render_chart};
