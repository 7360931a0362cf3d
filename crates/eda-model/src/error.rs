use thiserror::Error;

/// Errors raised by frame operations while cleaning a loaded table.
///
/// Per-row data-quality problems never surface here; they are resolved by
/// the cleaning policy. These variants indicate a frame operation failed.
#[derive(Debug, Error)]
pub enum EdaError {
    /// Column not found in the table.
    #[error("column '{column}' not found in table")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for EdaError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EdaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EdaError::ColumnNotFound {
            column: "lat".to_string(),
        };
        assert_eq!(err.to_string(), "column 'lat' not found in table");
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("lat".into());
        let err: EdaError = polars_err.into();
        assert!(matches!(err, EdaError::DataFrame { .. }));
    }
}
