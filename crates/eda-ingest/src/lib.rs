//! Accident data ingestion.
//!
//! Loads the delimited source file into a Polars DataFrame wrapped in an
//! [`eda_model::AccidentTable`], and provides the column-name normalization
//! rules the cleaning pipeline applies right after loading.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use eda_ingest::{load_accident_table, normalize_header_names};
//!
//! let loaded = load_accident_table(Path::new("data/nashville_accidents_data.csv"))?;
//! let names = normalize_header_names(&loaded.raw_headers);
//! ```

mod csv;
mod error;
mod loader;
mod polars_utils;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    CsvHeaders, MAX_CSV_FILE_SIZE, MISSING_VALUE_TOKENS, check_file_size,
    check_file_size_with_limit, is_normalized_name, normalize_column_name, normalize_header_names,
    read_csv_schema, read_csv_table, validate_dataframe_shape, validate_encoding,
};

// === Loading ===
pub use loader::{DEFAULT_DATASET_PATH, LoadedTable, load_accident_table};

// === Value Helpers ===
pub use polars_utils::{any_to_string, format_numeric};
