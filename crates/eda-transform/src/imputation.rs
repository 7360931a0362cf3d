//! Missing-value policy: median, zero and label fills, then geolocation filter.
//!
//! The median for a median-filled column is taken over the full column
//! before any other fill runs and before rows without coordinates are
//! removed, so the row filter never shifts the value other rows received.

use eda_ingest::format_numeric;
use eda_model::{AccidentTable, Result, SemanticType};
use polars::prelude::{DataType, NamedFrom, Series};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::normalization::{column_f64_values, column_median_value};
use crate::options::MissingValuePolicy;

/// Result of filling one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnFill {
    pub column: String,
    /// Number of cells that were missing and received the value.
    pub filled: usize,
    /// The value written, rendered as text.
    pub value: String,
}

/// Everything the missing-value step did.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImputationReport {
    pub fills: Vec<ColumnFill>,
    /// Medians used for median-filled columns, keyed by column.
    pub medians: Vec<(String, f64)>,
    /// Policy columns that were not in the table.
    pub skipped_columns: Vec<String>,
    /// Rows removed because a coordinate was missing.
    pub rows_missing_geolocation: usize,
}

impl ImputationReport {
    pub fn median_for(&self, column: &str) -> Option<f64> {
        self.medians
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| *value)
    }

    pub fn fill_for(&self, column: &str) -> Option<&ColumnFill> {
        self.fills.iter().find(|fill| fill.column == column)
    }
}

/// Computes the median over the present values of a numeric column.
pub fn column_median(table: &AccidentTable, column: &str) -> Result<Option<f64>> {
    match table.data.column(column) {
        Ok(values) => column_median_value(values),
        Err(_) => Ok(None),
    }
}

/// Replaces missing values of a numeric column with `value`.
///
/// The column is stored as Float64 afterwards. Returns `None` when the column
/// is absent.
pub fn fill_numeric(table: &mut AccidentTable, column: &str, value: f64) -> Result<Option<ColumnFill>> {
    let Ok(source) = table.data.column(column) else {
        return Ok(None);
    };
    let values = column_f64_values(source)?;
    let filled = values.iter().filter(|v| v.is_none()).count();
    let replaced: Vec<f64> = values.into_iter().map(|v| v.unwrap_or(value)).collect();

    table.data.with_column(Series::new(column.into(), replaced))?;
    table.set_semantic_type(column, SemanticType::Float);

    Ok(Some(ColumnFill {
        column: column.to_string(),
        filled,
        value: format_numeric(value),
    }))
}

/// Replaces missing values of a categorical column with `label`.
///
/// The column is cast to text first so a column that was inferred as
/// numeric can still take the label. Returns `None` when the column is absent.
pub fn fill_label(table: &mut AccidentTable, column: &str, label: &str) -> Result<Option<ColumnFill>> {
    let Ok(source) = table.data.column(column) else {
        return Ok(None);
    };
    let text = source.cast(&DataType::String)?;
    let values = text.str()?;
    let filled = values.null_count();
    let replaced: Vec<String> = values
        .into_iter()
        .map(|v| v.unwrap_or(label).to_string())
        .collect();

    table.data.with_column(Series::new(column.into(), replaced))?;
    table.set_semantic_type(column, SemanticType::Category);

    Ok(Some(ColumnFill {
        column: column.to_string(),
        filled,
        value: label.to_string(),
    }))
}

/// Removes rows where either coordinate is null or NaN.
///
/// If a coordinate column is absent, no row has that coordinate and every
/// row is removed. Returns the number of rows removed.
pub fn drop_rows_missing_geolocation(
    table: &mut AccidentTable,
    lat: &str,
    long: &str,
) -> Result<usize> {
    let height = table.height();
    let mut keep = vec![true; height];
    for name in [lat, long] {
        match table.data.column(name) {
            Ok(column) => {
                for (flag, value) in keep.iter_mut().zip(column_f64_values(column)?) {
                    *flag &= value.is_some();
                }
            }
            Err(_) => {
                warn!(column = name, "Coordinate column not found; no row has a location");
                keep.iter_mut().for_each(|flag| *flag = false);
            }
        }
    }

    let removed = keep.iter().filter(|flag| !**flag).count();
    if removed > 0 {
        let mask = Series::new("keep".into(), keep);
        table.data = table.data.filter(mask.bool()?)?;
    }
    Ok(removed)
}

/// Applies the full missing-value policy in order.
pub fn apply_missing_value_policy(
    table: &mut AccidentTable,
    policy: &MissingValuePolicy,
) -> Result<ImputationReport> {
    let mut report = ImputationReport::default();

    // Medians first, over the untouched columns.
    let mut medians = Vec::with_capacity(policy.median_fill.len());
    for column in &policy.median_fill {
        medians.push((column, column_median(table, column)?));
    }

    for (column, median) in medians {
        if !table.has_column(column) {
            warn!(column = %column, "Median-fill column not found; skipped");
            report.skipped_columns.push(column.clone());
            continue;
        }
        let Some(median) = median else {
            warn!(column = %column, "Column has no values to take a median from; nulls kept");
            continue;
        };
        debug!(column = %column, median, "Filling with median");
        report.medians.push((column.clone(), median));
        if let Some(fill) = fill_numeric(table, column, median)? {
            report.fills.push(fill);
        }
    }

    for column in &policy.zero_fill {
        match fill_numeric(table, column, 0.0)? {
            Some(fill) => report.fills.push(fill),
            None => {
                warn!(column = %column, "Zero-fill column not found; skipped");
                report.skipped_columns.push(column.clone());
            }
        }
    }

    for rule in &policy.label_fill {
        match fill_label(table, &rule.column, &rule.label)? {
            Some(fill) => report.fills.push(fill),
            None => {
                warn!(column = %rule.column, "Label-fill column not found; skipped");
                report.skipped_columns.push(rule.column.clone());
            }
        }
    }

    report.rows_missing_geolocation = drop_rows_missing_geolocation(
        table,
        &policy.latitude_column,
        &policy.longitude_column,
    )?;

    for fill in &report.fills {
        if fill.filled > 0 {
            info!(column = %fill.column, filled = fill.filled, value = %fill.value, "Imputed missing values");
        }
    }
    info!(
        removed = report.rows_missing_geolocation,
        remaining = table.height(),
        "Removed rows without geolocation"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, DataFrame};

    fn table(columns: Vec<Column>) -> AccidentTable {
        AccidentTable::new(DataFrame::new(columns).unwrap())
    }

    #[test]
    fn test_fill_numeric_with_median() {
        let mut table = table(vec![Column::from(Series::new(
            "number_of_motor_vehicles".into(),
            vec![Some(1i64), Some(2), None, Some(3)],
        ))]);
        let median = column_median(&table, "number_of_motor_vehicles")
            .unwrap()
            .unwrap();
        assert_eq!(median, 2.0);

        let fill = fill_numeric(&mut table, "number_of_motor_vehicles", median)
            .unwrap()
            .unwrap();
        assert_eq!(fill.filled, 1);
        assert_eq!(fill.value, "2");

        let column = table.data.column("number_of_motor_vehicles").unwrap();
        let values: Vec<Option<f64>> = column.f64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(1.0), Some(2.0), Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_fill_numeric_absent_column() {
        let mut table = table(vec![Column::from(Series::new("lat".into(), vec![1.0]))]);
        assert!(fill_numeric(&mut table, "number_of_injuries", 0.0).unwrap().is_none());
    }

    #[test]
    fn test_fill_label_casts_numeric_column() {
        let mut table = table(vec![Column::from(Series::new(
            "precinct".into(),
            vec![Some(1i64), None],
        ))]);
        let fill = fill_label(&mut table, "precinct", "UNKNOWN").unwrap().unwrap();

        assert_eq!(fill.filled, 1);
        let column = table.data.column("precinct").unwrap();
        let values: Vec<Option<&str>> = column.str().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some("1"), Some("UNKNOWN")]);
        assert_eq!(table.semantic_type("precinct"), Some(SemanticType::Category));
    }

    #[test]
    fn test_drop_rows_missing_geolocation() {
        let mut table = table(vec![
            Column::from(Series::new("lat".into(), vec![Some(36.1), None, Some(36.3), Some(f64::NAN)])),
            Column::from(Series::new("long".into(), vec![Some(-86.7), Some(-86.8), None, Some(-86.9)])),
        ]);
        let removed = drop_rows_missing_geolocation(&mut table, "lat", "long").unwrap();

        assert_eq!(removed, 3);
        assert_eq!(table.height(), 1);
    }

    #[test]
    fn test_drop_rows_without_coordinate_column() {
        let mut table = table(vec![Column::from(Series::new("lat".into(), vec![36.1, 36.2]))]);
        let removed = drop_rows_missing_geolocation(&mut table, "lat", "long").unwrap();

        assert_eq!(removed, 2);
        assert_eq!(table.height(), 0);
    }

    #[test]
    fn test_median_taken_before_geolocation_drop() {
        // The row without a latitude carries the largest vehicle count; the
        // median must still include it.
        let mut table = table(vec![
            Column::from(Series::new(
                "number_of_motor_vehicles".into(),
                vec![Some(1i64), None, Some(2), Some(9)],
            )),
            Column::from(Series::new("lat".into(), vec![Some(36.1), Some(36.2), Some(36.3), None])),
            Column::from(Series::new("long".into(), vec![-86.1, -86.2, -86.3, -86.4])),
        ]);
        let policy = MissingValuePolicy {
            zero_fill: vec![],
            label_fill: vec![],
            ..MissingValuePolicy::default()
        };
        let report = apply_missing_value_policy(&mut table, &policy).unwrap();

        assert_eq!(report.median_for("number_of_motor_vehicles"), Some(2.0));
        assert_eq!(report.rows_missing_geolocation, 1);
        let values: Vec<Option<f64>> = table
            .data
            .column("number_of_motor_vehicles")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(values, vec![Some(1.0), Some(2.0), Some(2.0)]);
    }

    #[test]
    fn test_policy_skips_absent_columns() {
        let mut table = table(vec![
            Column::from(Series::new("lat".into(), vec![36.1])),
            Column::from(Series::new("long".into(), vec![-86.1])),
        ]);
        let report = apply_missing_value_policy(&mut table, &MissingValuePolicy::default()).unwrap();

        assert_eq!(report.skipped_columns.len(), 8);
        assert!(report.fills.is_empty());
        assert_eq!(table.height(), 1);
    }
}
