//! Chart data for the fixed EDA chart sequence.
//!
//! Each chart is computed from the cleaned table into plain data
//! ([`Chart`]); rendering lives in [`crate::render`]. Nulls are never
//! counted. Fixed orderings list every category even when its count is zero.

use std::collections::HashMap;

use eda_ingest::format_numeric;
use eda_model::columns::{COLLISION_TYPE_DESCRIPTION, HOUR, SEASON, WEATHER_DESCRIPTION, WEEKDAY};
use eda_model::{AccidentTable, EdaError, Result, SEASON_ORDER, WEEKDAY_ORDER};
use eda_transform::normalization::column_f64_values;
use polars::prelude::DataType;
use serde::Serialize;

use crate::stats::Distribution;

/// Default number of weather categories shown.
pub const DEFAULT_TOP_WEATHER: usize = 7;
/// Default number of collision types shown.
pub const DEFAULT_TOP_COLLISIONS: usize = 10;

/// The charts of the standard sequence, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartKind {
    WeekdayCounts,
    HourHistogram,
    TopWeather,
    TopCollisionTypes,
    SeasonCounts,
    HourByWeather,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        Self::WeekdayCounts,
        Self::HourHistogram,
        Self::TopWeather,
        Self::TopCollisionTypes,
        Self::SeasonCounts,
        Self::HourByWeather,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::WeekdayCounts => "Accidents by day of week",
            Self::HourHistogram => "Accidents by hour of day",
            Self::TopWeather => "Weather at time of accident",
            Self::TopCollisionTypes => "Most frequent collision types",
            Self::SeasonCounts => "Accidents by season",
            Self::HourByWeather => "Accident hour by weather condition",
        }
    }

    /// Axis labels as (category axis, value axis).
    pub fn axis_labels(self) -> (&'static str, &'static str) {
        match self {
            Self::WeekdayCounts => ("Day", "Count"),
            Self::HourHistogram => ("Hour of day", "Accidents"),
            Self::TopWeather => ("Weather condition", "Count"),
            Self::TopCollisionTypes => ("Collision type", "Count"),
            Self::SeasonCounts => ("Season", "Count"),
            Self::HourByWeather => ("Weather", "Hour of day"),
        }
    }
}

/// One labelled count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub label: String,
    pub count: usize,
}

impl Bar {
    fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Five-number summary of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxStats {
    pub label: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Computed chart data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChartData {
    /// Counts per category or bin.
    Bars(Vec<Bar>),
    /// Distribution per group.
    Boxes(Vec<BoxStats>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub data: ChartData,
}

fn column_labels(table: &AccidentTable, column: &str) -> Result<Vec<Option<String>>> {
    let source = table
        .data
        .column(column)
        .map_err(|_| EdaError::ColumnNotFound {
            column: column.to_string(),
        })?;
    let text = source.cast(&DataType::String)?;
    Ok(text
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

fn column_numbers(table: &AccidentTable, column: &str) -> Result<Vec<Option<f64>>> {
    let source = table
        .data
        .column(column)
        .map_err(|_| EdaError::ColumnNotFound {
            column: column.to_string(),
        })?;
    column_f64_values(source)
}

fn tally(labels: &[Option<String>]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels.iter().flatten() {
        *counts.entry(label.as_str()).or_default() += 1;
    }
    counts
}

/// Counts per category in a fixed order. Categories outside the order are
/// not shown; categories in the order with no rows get zero.
pub fn count_in_order(table: &AccidentTable, column: &str, order: &[&str]) -> Result<Vec<Bar>> {
    let labels = column_labels(table, column)?;
    let counts = tally(&labels);
    Ok(order
        .iter()
        .map(|label| Bar::new(*label, counts.get(label).copied().unwrap_or(0)))
        .collect())
}

/// The `n` most frequent categories, by count descending then label ascending.
pub fn top_n(table: &AccidentTable, column: &str, n: usize) -> Result<Vec<Bar>> {
    let labels = column_labels(table, column)?;
    let mut bars: Vec<Bar> = tally(&labels)
        .into_iter()
        .map(|(label, count)| Bar::new(label, count))
        .collect();
    bars.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    bars.truncate(n);
    Ok(bars)
}

/// Equal-width histogram over `[min, max)`; `max` itself lands in the last bin.
///
/// Values outside the range are ignored. Bins are labelled by their lower edge.
pub fn histogram(
    table: &AccidentTable,
    column: &str,
    bins: usize,
    min: f64,
    max: f64,
) -> Result<Vec<Bar>> {
    let values = column_numbers(table, column)?;
    let bins = bins.max(1);
    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for value in values.into_iter().flatten() {
        if value < min || value > max {
            continue;
        }
        let idx = (((value - min) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| Bar::new(format_numeric(min + width * idx as f64), count))
        .collect())
}

/// Five-number summaries of `value_column` grouped by `group_column`.
///
/// Groups are ordered by label. Rows where either value is null are skipped.
pub fn box_plot(
    table: &AccidentTable,
    value_column: &str,
    group_column: &str,
) -> Result<Vec<BoxStats>> {
    let values = column_numbers(table, value_column)?;
    let groups = column_labels(table, group_column)?;

    let mut grouped: HashMap<String, Vec<Option<f64>>> = HashMap::new();
    for (value, group) in values.into_iter().zip(groups) {
        if let (Some(value), Some(group)) = (value, group) {
            grouped.entry(group).or_default().push(Some(value));
        }
    }

    let mut boxes = Vec::with_capacity(grouped.len());
    for (label, sample) in grouped {
        let stats = Distribution::from_values(&sample)?;
        if let (Some(min), Some(q1), Some(median), Some(q3), Some(max)) =
            (stats.min, stats.q1, stats.median, stats.q3, stats.max)
        {
            boxes.push(BoxStats {
                label,
                count: stats.count,
                min,
                q1,
                median,
                q3,
                max,
            });
        }
    }
    boxes.sort_by(|a, b| a.label.cmp(&b.label));
    Ok(boxes)
}

/// Builds one chart of the standard sequence.
///
/// `top` overrides the category limit of the two top-N charts.
pub fn build_chart(table: &AccidentTable, kind: ChartKind, top: Option<usize>) -> Result<Chart> {
    let data = match kind {
        ChartKind::WeekdayCounts => ChartData::Bars(count_in_order(table, WEEKDAY, &WEEKDAY_ORDER)?),
        ChartKind::HourHistogram => ChartData::Bars(histogram(table, HOUR, 24, 0.0, 24.0)?),
        ChartKind::TopWeather => ChartData::Bars(top_n(
            table,
            WEATHER_DESCRIPTION,
            top.unwrap_or(DEFAULT_TOP_WEATHER),
        )?),
        ChartKind::TopCollisionTypes => ChartData::Bars(top_n(
            table,
            COLLISION_TYPE_DESCRIPTION,
            top.unwrap_or(DEFAULT_TOP_COLLISIONS),
        )?),
        ChartKind::SeasonCounts => ChartData::Bars(count_in_order(table, SEASON, &SEASON_ORDER)?),
        ChartKind::HourByWeather => ChartData::Boxes(box_plot(table, HOUR, WEATHER_DESCRIPTION)?),
    };
    Ok(Chart { kind, data })
}

/// Builds every chart of the standard sequence, in order.
pub fn standard_charts(table: &AccidentTable, top: Option<usize>) -> Result<Vec<Chart>> {
    ChartKind::ALL
        .iter()
        .map(|kind| build_chart(table, *kind, top))
        .collect()
}
