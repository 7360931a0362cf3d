//! Shared types for the accident EDA workspace.
//!
//! - **columns**: normalized column names the cleaning policy refers to
//! - **calendar**: season labels and weekday ordering
//! - **schema**: semantic column types and the [`AccidentTable`] wrapper
//! - **error**: error type for frame operations inside the pipeline

pub mod calendar;
pub mod columns;
pub mod error;
pub mod schema;

pub use calendar::{SEASON_ORDER, Season, WEEKDAY_ORDER};
pub use error::{EdaError, Result};
pub use schema::{AccidentTable, SemanticType, TableSchema};
