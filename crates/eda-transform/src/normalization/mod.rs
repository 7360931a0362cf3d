//! Normalization steps: column names, timestamps, numeric coercion.

pub mod columns;
pub mod datetime;
pub mod numeric;

pub use columns::{ColumnRename, normalize_columns};
pub use datetime::{
    CalendarFeatures, TIMESTAMP_FORMAT, TimestampSummary, derive_calendar_features,
    millis_to_timestamp, parse_timestamp, parse_timestamp_with_format, timestamp_millis,
};
pub use numeric::{column_f64_values, column_median_value, float_values};
