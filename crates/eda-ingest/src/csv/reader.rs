//! CSV file reading into a Polars DataFrame.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, NullValues, SerReader};

use crate::error::{IngestError, Result};

use super::header::CsvHeaders;

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Cell values read as missing in every column, in addition to empty cells.
pub const MISSING_VALUE_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn missing_value_tokens() -> NullValues {
    NullValues::AllColumns(MISSING_VALUE_TOKENS.iter().map(|token| (*token).into()).collect())
}

fn open_error(path: &Path, err: std::io::Error) -> IngestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped in read_csv_schema)
    Ok(())
}

/// Reads the raw header row.
pub fn read_csv_schema(path: &Path) -> Result<CsvHeaders> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let record = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let columns: Vec<String> = record
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            if idx == 0 {
                value.trim_start_matches('\u{feff}').to_string()
            } else {
                value.to_string()
            }
        })
        .collect();

    if columns.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if columns.iter().all(|value| value.trim().is_empty()) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    Ok(CsvHeaders::new(columns))
}

/// Validate DataFrame shape after loading.
pub fn validate_dataframe_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.height() == 0 {
        return Err(IngestError::EmptyDataFrame {
            path: path.to_path_buf(),
        });
    }

    if df.width() > 500 {
        tracing::warn!(
            path = %path.display(),
            columns = df.width(),
            "Dataset has more than 500 columns - may impact performance"
        );
    }

    Ok(())
}

/// Reads a CSV file into a Polars DataFrame.
///
/// Column dtypes are inferred from the whole file so a late text value in an
/// otherwise numeric column does not abort the parse. Empty cells and the
/// [`MISSING_VALUE_TOKENS`] are read as null.
///
/// Returns both the DataFrame and the raw header row.
pub fn read_csv_table(path: &Path) -> Result<(DataFrame, CsvHeaders)> {
    let headers = read_csv_schema(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(
            CsvParseOptions::default().with_null_values(Some(missing_value_tokens())),
        )
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.width() != headers.len() {
        tracing::warn!(
            path = %path.display(),
            header_columns = headers.len(),
            frame_columns = df.width(),
            "Header width differs from parsed frame width"
        );
    }

    Ok((df, headers))
}
