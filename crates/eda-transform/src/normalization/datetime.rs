//! Accident timestamp parsing and calendar feature derivation.
//!
//! Source timestamps are US-style month/day/year with a 12-hour clock, e.g.
//! `03/14/2021 02:30:00 PM`. Anything that does not match becomes null (the
//! "unknown time" sentinel) and every feature derived from it is null too.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};
use eda_model::columns::{HOUR, MONTH, WEEKDAY, YEAR};
use eda_model::{AccidentTable, Result, SemanticType, WEEKDAY_ORDER};
use polars::prelude::{Column, DataType, NamedFrom, Series, TimeUnit};
use serde::Serialize;
use tracing::{debug, warn};

/// Format of the accident timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Physical dtype of a parsed timestamp column.
pub fn timestamp_dtype() -> DataType {
    DataType::Datetime(TimeUnit::Milliseconds, None)
}

/// Parses a timestamp under [`TIMESTAMP_FORMAT`].
///
/// Returns `None` for empty or malformed values instead of failing.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    parse_timestamp_with_format(value, TIMESTAMP_FORMAT)
}

/// Parses a timestamp under an explicit chrono format.
pub fn parse_timestamp_with_format(value: &str, format: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, format).ok()
}

/// Calendar fields extracted from one timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFeatures {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 0-23
    pub hour: u32,
    pub weekday: &'static str,
}

impl CalendarFeatures {
    pub fn from_timestamp(ts: &NaiveDateTime) -> Self {
        Self {
            year: ts.year(),
            month: ts.month(),
            hour: ts.hour(),
            weekday: WEEKDAY_ORDER[ts.weekday().num_days_from_monday() as usize],
        }
    }
}

/// Counts from one timestamp parsing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimestampSummary {
    /// Values that parsed.
    pub parsed: usize,
    /// Non-empty values that did not match the format.
    pub unparseable: usize,
    /// Null or blank values.
    pub missing: usize,
    /// False when the timestamp column was not in the table.
    pub column_present: bool,
}

/// Reads a timestamp column as epoch milliseconds.
///
/// Works on a column that was already parsed (any datetime unit) and on a
/// raw text column, which is parsed with `format`.
pub fn timestamp_millis(column: &Column, format: &str) -> Result<Vec<Option<i64>>> {
    if matches!(column.dtype(), DataType::Datetime(_, _)) {
        let millis = column.cast(&timestamp_dtype())?.cast(&DataType::Int64)?;
        return Ok(millis.i64()?.into_iter().collect());
    }
    let text = column.cast(&DataType::String)?;
    Ok(text
        .str()?
        .into_iter()
        .map(|value| {
            value
                .and_then(|v| parse_timestamp_with_format(v, format))
                .map(|ts| ts.and_utc().timestamp_millis())
        })
        .collect())
}

/// Converts epoch milliseconds back to a naive timestamp.
pub fn millis_to_timestamp(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

/// Parses the timestamp column in place and adds `year`, `month`, `hour`
/// and `weekday`.
///
/// A missing timestamp column is not an error: the four derived columns are
/// still added, entirely null, so later steps see a stable schema.
pub fn derive_calendar_features(
    table: &mut AccidentTable,
    column: &str,
    format: &str,
) -> Result<TimestampSummary> {
    let height = table.height();
    let mut summary = TimestampSummary::default();

    let millis: Vec<Option<i64>> = match table.data.column(column) {
        Ok(source) => {
            summary.column_present = true;
            let raw_missing = source.null_count();
            let millis = timestamp_millis(source, format)?;
            summary.parsed = millis.iter().filter(|v| v.is_some()).count();
            summary.missing = raw_missing;
            summary.unparseable = height - summary.parsed - raw_missing;
            millis
        }
        Err(_) => {
            warn!(column, "Timestamp column not found; calendar features will be empty");
            vec![None; height]
        }
    };

    let mut years: Vec<Option<i32>> = Vec::with_capacity(height);
    let mut months: Vec<Option<i32>> = Vec::with_capacity(height);
    let mut hours: Vec<Option<i32>> = Vec::with_capacity(height);
    let mut weekdays: Vec<Option<&str>> = Vec::with_capacity(height);
    for value in &millis {
        let features = value
            .and_then(millis_to_timestamp)
            .map(|ts| CalendarFeatures::from_timestamp(&ts));
        years.push(features.map(|f| f.year));
        months.push(features.and_then(|f| i32::try_from(f.month).ok()));
        hours.push(features.and_then(|f| i32::try_from(f.hour).ok()));
        weekdays.push(features.map(|f| f.weekday));
    }

    if summary.column_present {
        let parsed = Series::new(column.into(), millis).cast(&timestamp_dtype())?;
        table.data.with_column(parsed)?;
        table.set_semantic_type(column, SemanticType::Timestamp);
    }
    table.data.with_column(Series::new(YEAR.into(), years))?;
    table.data.with_column(Series::new(MONTH.into(), months))?;
    table.data.with_column(Series::new(HOUR.into(), hours))?;
    table.data.with_column(Series::new(WEEKDAY.into(), weekdays))?;
    table.set_semantic_type(YEAR, SemanticType::Integer);
    table.set_semantic_type(MONTH, SemanticType::Integer);
    table.set_semantic_type(HOUR, SemanticType::Integer);
    table.set_semantic_type(WEEKDAY, SemanticType::Category);

    if summary.unparseable > 0 {
        warn!(
            column,
            unparseable = summary.unparseable,
            "Timestamps did not match {format}; treated as unknown time"
        );
    }
    debug!(
        column,
        parsed = summary.parsed,
        missing = summary.missing,
        "Derived calendar features"
    );

    Ok(summary)
}
