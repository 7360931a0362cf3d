//! Raw dataset profile: shape, column types, nulls, numeric describe, head.

use comfy_table::{Cell, CellAlignment, Color};
use eda_ingest::{any_to_string, format_numeric};
use eda_model::{Result, SemanticType};
use eda_transform::normalization::float_values;
use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::info;

use crate::stats::Distribution;
use crate::style::{align_column, count_cell, dim_cell, styled_table};

/// Rows shown in the head preview.
pub const HEAD_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: String,
    pub semantic: SemanticType,
    pub nulls: usize,
}

/// Describe statistics for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub column: String,
    #[serde(flatten)]
    pub stats: Distribution,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetProfile {
    pub rows: usize,
    pub columns: Vec<ColumnProfile>,
    pub numeric: Vec<NumericSummary>,
    /// First rows as display strings, nulls as empty strings.
    pub head: Vec<Vec<String>>,
}

impl DatasetProfile {
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        let mut columns = Vec::with_capacity(df.width());
        let mut numeric = Vec::new();
        for column in df.get_columns() {
            let dtype = column.dtype();
            let semantic = SemanticType::from_dtype(dtype);
            columns.push(ColumnProfile {
                name: column.name().to_string(),
                dtype: dtype.to_string(),
                semantic,
                nulls: column.null_count(),
            });
            if matches!(semantic, SemanticType::Integer | SemanticType::Float) {
                numeric.push(NumericSummary {
                    column: column.name().to_string(),
                    stats: Distribution::from_chunked(&float_values(column)?)?,
                });
            }
        }

        let mut head = Vec::new();
        for row in 0..df.height().min(HEAD_ROWS) {
            let mut values = Vec::with_capacity(df.width());
            for column in df.get_columns() {
                values.push(any_to_string(column.get(row)?));
            }
            head.push(values);
        }

        let profile = Self {
            rows: df.height(),
            columns,
            numeric,
            head,
        };
        info!(
            rows = profile.rows,
            columns = profile.width(),
            nulls = profile.total_nulls(),
            "Profiled dataset"
        );
        Ok(profile)
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn total_nulls(&self) -> usize {
        self.columns.iter().map(|c| c.nulls).sum()
    }

    /// Renders shape, column, describe and head tables.
    pub fn render(&self) -> String {
        let mut out = format!("Shape: {} rows x {} columns\n", self.rows, self.width());
        out.push_str(&self.columns_table());
        out.push('\n');
        if !self.numeric.is_empty() {
            out.push_str(&self.describe_table());
            out.push('\n');
        }
        out.push_str(&self.head_table());
        out
    }

    fn columns_table(&self) -> String {
        let mut table = styled_table(&["Column", "Dtype", "Kind", "Nulls"]);
        align_column(&mut table, 3, CellAlignment::Right);
        for column in &self.columns {
            table.add_row(vec![
                Cell::new(&column.name),
                dim_cell(&column.dtype),
                Cell::new(column.semantic.as_str()),
                count_cell(Some(column.nulls), Color::Yellow),
            ]);
        }
        table.to_string()
    }

    fn describe_table(&self) -> String {
        let mut table = styled_table(&[
            "Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max",
        ]);
        for index in 1..9 {
            align_column(&mut table, index, CellAlignment::Right);
        }
        for summary in &self.numeric {
            let stats = &summary.stats;
            table.add_row(vec![
                Cell::new(&summary.column),
                Cell::new(stats.count),
                stat_cell(stats.mean),
                stat_cell(stats.std),
                stat_cell(stats.min),
                stat_cell(stats.q1),
                stat_cell(stats.median),
                stat_cell(stats.q3),
                stat_cell(stats.max),
            ]);
        }
        table.to_string()
    }

    fn head_table(&self) -> String {
        let names: Vec<&str> = self.columns.iter().map(|c| c.name.as_str()).collect();
        let mut table = styled_table(&names);
        for row in &self.head {
            table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
        }
        table.to_string()
    }
}

fn stat_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) => Cell::new(format_numeric((v * 1000.0).round() / 1000.0)),
        None => dim_cell("-"),
    }
}
