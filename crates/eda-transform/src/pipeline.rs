//! Ordered cleaning pipeline for the accident dataset.
//!
//! Steps run in a fixed order because each depends on the previous one:
//!
//! 1. normalize column names (policy columns are addressed by normalized name)
//! 2. parse the timestamp and derive year, month, hour, weekday
//! 3. drop low-value columns
//! 4. apply the missing-value policy (median fill, zero fill, label fill,
//!    geolocation filter)
//! 5. derive season from the timestamp
//!
//! # Example
//!
//! ```ignore
//! use eda_transform::{CleaningOptions, clean_dataset};
//!
//! let loaded = eda_ingest::load_accident_table(path)?;
//! let cleaned = clean_dataset(loaded.table, &CleaningOptions::default())?;
//! println!("{} rows kept", cleaned.report.rows_after);
//! ```

use eda_model::columns::POLICY_COLUMNS;
use eda_model::{AccidentTable, Result};
use serde::Serialize;
use tracing::{info, info_span, warn};

use crate::imputation::{ImputationReport, apply_missing_value_policy};
use crate::normalization::{
    ColumnRename, TimestampSummary, derive_calendar_features, normalize_columns,
};
use crate::options::CleaningOptions;
use crate::prune::drop_low_value_columns;
use crate::season::derive_season;

/// Remaining nulls in one column after cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NullCount {
    pub column: String,
    /// `None` when the column is not in the table.
    pub nulls: Option<usize>,
}

/// Summary of one cleaning run.
#[derive(Debug, Clone, Serialize)]
pub struct CleaningReport {
    pub rows_before: usize,
    pub rows_after: usize,
    pub columns_before: usize,
    pub columns_after: usize,
    pub renamed: Vec<ColumnRename>,
    pub timestamps: TimestampSummary,
    pub dropped_columns: Vec<String>,
    pub imputation: ImputationReport,
    pub remaining_nulls: Vec<NullCount>,
}

impl CleaningReport {
    /// True when every policy column is present and null-free.
    pub fn is_fully_imputed(&self) -> bool {
        self.remaining_nulls.iter().all(|n| n.nulls == Some(0))
    }
}

/// A cleaned table with the report of how it got there.
#[derive(Debug, Clone)]
pub struct CleanedDataset {
    pub table: AccidentTable,
    pub report: CleaningReport,
}

/// Counts nulls in each listed column.
pub fn null_counts(table: &AccidentTable, columns: &[&str]) -> Vec<NullCount> {
    columns
        .iter()
        .map(|name| NullCount {
            column: (*name).to_string(),
            nulls: table.data.column(name).ok().map(|c| c.null_count()),
        })
        .collect()
}

/// Runs every cleaning step over a freshly loaded table.
pub fn clean_dataset(mut table: AccidentTable, options: &CleaningOptions) -> Result<CleanedDataset> {
    let rows_before = table.height();
    let columns_before = table.width();

    let renamed = info_span!("normalize_columns").in_scope(|| normalize_columns(&mut table))?;

    let timestamps = info_span!("parse_timestamps", column = %options.timestamp_column)
        .in_scope(|| {
            derive_calendar_features(
                &mut table,
                &options.timestamp_column,
                &options.timestamp_format,
            )
        })?;

    let dropped_columns = info_span!("drop_columns")
        .in_scope(|| drop_low_value_columns(&mut table, &options.drop_columns))?;

    let imputation = info_span!("impute")
        .in_scope(|| apply_missing_value_policy(&mut table, &options.missing_values))?;

    info_span!("derive_season").in_scope(|| {
        derive_season(
            &mut table,
            &options.timestamp_column,
            &options.timestamp_format,
        )
    })?;

    table.sync_schema();

    let remaining_nulls = null_counts(&table, &POLICY_COLUMNS);
    for count in &remaining_nulls {
        match count.nulls {
            Some(0) => info!(column = %count.column, nulls = 0, "Policy column complete"),
            Some(nulls) => warn!(column = %count.column, nulls, "Nulls remain after cleaning"),
            None => warn!(column = %count.column, "Policy column missing from cleaned table"),
        }
    }

    let report = CleaningReport {
        rows_before,
        rows_after: table.height(),
        columns_before,
        columns_after: table.width(),
        renamed,
        timestamps,
        dropped_columns,
        imputation,
        remaining_nulls,
    };
    info!(
        rows_before = report.rows_before,
        rows_after = report.rows_after,
        columns_after = report.columns_after,
        "Cleaning complete"
    );

    Ok(CleanedDataset { table, report })
}
