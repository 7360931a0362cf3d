//! Cleaning policy configuration.
//!
//! [`CleaningOptions::default`] is the fixed policy for the accident
//! dataset. The struct exists so steps read their column lists from one
//! place and tests can run the pipeline against a reduced table.

use eda_model::columns::{
    COLLISION_TYPE_DESCRIPTION, DATE_AND_TIME, HIT_AND_RUN, ILLUMINATION_DESCRIPTION, LAT,
    LONG, LOW_VALUE_COLUMNS, NUMBER_OF_FATALITIES, NUMBER_OF_INJURIES,
    NUMBER_OF_MOTOR_VEHICLES, PRECINCT, WEATHER_DESCRIPTION,
};
use serde::{Deserialize, Serialize};

use crate::normalization::TIMESTAMP_FORMAT;

/// Label written into missing cells of a categorical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFill {
    pub column: String,
    pub label: String,
}

impl LabelFill {
    pub fn new(column: &str, label: &str) -> Self {
        Self {
            column: column.to_string(),
            label: label.to_string(),
        }
    }
}

/// Missing-value policy, applied in field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingValuePolicy {
    /// Filled with the column median computed before any other fill.
    pub median_fill: Vec<String>,
    /// Filled with zero.
    pub zero_fill: Vec<String>,
    /// Filled with a fixed label.
    pub label_fill: Vec<LabelFill>,
    /// Rows missing either coordinate are removed.
    pub latitude_column: String,
    pub longitude_column: String,
}

impl Default for MissingValuePolicy {
    fn default() -> Self {
        Self {
            median_fill: vec![NUMBER_OF_MOTOR_VEHICLES.to_string()],
            zero_fill: vec![
                NUMBER_OF_INJURIES.to_string(),
                NUMBER_OF_FATALITIES.to_string(),
            ],
            label_fill: vec![
                LabelFill::new(HIT_AND_RUN, "UNKNOWN"),
                LabelFill::new(COLLISION_TYPE_DESCRIPTION, "UNSPECIFIED"),
                LabelFill::new(WEATHER_DESCRIPTION, "UNKNOWN"),
                LabelFill::new(ILLUMINATION_DESCRIPTION, "UNKNOWN"),
                LabelFill::new(PRECINCT, "UNKNOWN"),
            ],
            latitude_column: LAT.to_string(),
            longitude_column: LONG.to_string(),
        }
    }
}

/// Options for a full cleaning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningOptions {
    /// Column holding the accident timestamp (normalized name).
    pub timestamp_column: String,
    /// chrono format of the timestamp column.
    pub timestamp_format: String,
    /// Columns removed when present.
    pub drop_columns: Vec<String>,
    pub missing_values: MissingValuePolicy,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            timestamp_column: DATE_AND_TIME.to_string(),
            timestamp_format: TIMESTAMP_FORMAT.to_string(),
            drop_columns: LOW_VALUE_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
            missing_values: MissingValuePolicy::default(),
        }
    }
}
