//! Accident dataset cleaning.
//!
//! This crate turns a freshly loaded [`eda_model::AccidentTable`] into the
//! cleaned table the charts consume:
//!
//! - **normalization**: column names, timestamp parsing, numeric coercion
//! - **prune**: removal of low-value columns
//! - **imputation**: the per-column missing-value policy
//! - **season**: season labels from the timestamp
//! - **pipeline**: the ordered run of all steps with a [`CleaningReport`]

pub mod imputation;
pub mod normalization;
pub mod options;
pub mod pipeline;
pub mod prune;
pub mod season;

pub use imputation::{
    ColumnFill, ImputationReport, apply_missing_value_policy, column_median,
    drop_rows_missing_geolocation, fill_label, fill_numeric,
};
pub use normalization::{
    CalendarFeatures, ColumnRename, TIMESTAMP_FORMAT, TimestampSummary,
    derive_calendar_features, normalize_columns, parse_timestamp,
};
pub use options::{CleaningOptions, LabelFill, MissingValuePolicy};
pub use pipeline::{CleanedDataset, CleaningReport, NullCount, clean_dataset, null_counts};
pub use prune::drop_low_value_columns;
pub use season::derive_season;
