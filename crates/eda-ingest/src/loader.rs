//! Loads the accident source file into an [`AccidentTable`].

use std::path::Path;

use eda_model::AccidentTable;
use tracing::{debug, info};

use crate::csv::{check_file_size, read_csv_table, validate_dataframe_shape, validate_encoding};
use crate::error::Result;

/// Default location of the accident dataset, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "data/nashville_accidents_data.csv";

/// Loaded table plus the header row as it appeared in the file.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: AccidentTable,
    pub raw_headers: Vec<String>,
}

/// Reads the source file and wraps it with an inferred semantic schema.
///
/// This is the only fatal step: missing, unreadable, empty or malformed
/// input is returned as an [`crate::IngestError`].
pub fn load_accident_table(path: &Path) -> Result<LoadedTable> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let (df, headers) = read_csv_table(path)?;
    validate_dataframe_shape(&df, path)?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded accident dataset"
    );
    for column in df.get_columns() {
        debug!(
            column = %column.name(),
            dtype = %column.dtype(),
            nulls = column.null_count(),
            "Source column"
        );
    }

    Ok(LoadedTable {
        table: AccidentTable::new(df),
        raw_headers: headers.columns,
    })
}
