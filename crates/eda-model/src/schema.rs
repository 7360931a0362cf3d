//! Semantic column types layered over the Polars frame.
//!
//! Polars dtypes only say how values are stored. The cleaning steps also
//! need to know what a column *means* (a category label vs. free text, a
//! timestamp vs. a number), so each column carries a [`SemanticType`] that
//! is inferred at load time and refined as the pipeline runs.

use std::collections::BTreeMap;

use polars::prelude::{DataFrame, DataType};
use serde::{Deserialize, Serialize};

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SemanticType {
    Integer,
    Float,
    Text,
    Timestamp,
    Category,
}

impl SemanticType {
    /// Infers the semantic type from a physical dtype.
    ///
    /// String columns start out as `Text`; the pipeline promotes the
    /// policy columns to `Category` once they have been filled.
    pub fn from_dtype(dtype: &DataType) -> Self {
        if dtype.is_integer() {
            Self::Integer
        } else if dtype.is_float() {
            Self::Float
        } else if dtype.is_temporal() {
            Self::Timestamp
        } else {
            Self::Text
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Timestamp => "timestamp",
            Self::Category => "category",
        }
    }
}

/// Column name to semantic type mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    types: BTreeMap<String, SemanticType>,
}

impl TableSchema {
    /// Infers a schema from every column of the frame.
    pub fn infer(df: &DataFrame) -> Self {
        let types = df
            .get_columns()
            .iter()
            .map(|column| {
                (
                    column.name().as_str().to_string(),
                    SemanticType::from_dtype(column.dtype()),
                )
            })
            .collect();
        Self { types }
    }

    pub fn get(&self, column: &str) -> Option<SemanticType> {
        self.types.get(column).copied()
    }

    pub fn set(&mut self, column: impl Into<String>, semantic: SemanticType) {
        self.types.insert(column.into(), semantic);
    }

    pub fn remove(&mut self, column: &str) -> Option<SemanticType> {
        self.types.remove(column)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// The accident dataset as it moves through the cleaning steps.
///
/// Owns the frame and its semantic schema. Step functions take the table by
/// `&mut` so the ordering of steps stays explicit at the call site.
#[derive(Debug, Clone)]
pub struct AccidentTable {
    /// The dataset contents.
    pub data: DataFrame,
    /// Semantic type per column.
    pub schema: TableSchema,
}

impl AccidentTable {
    /// Wraps a freshly loaded frame, inferring the schema from its dtypes.
    pub fn new(data: DataFrame) -> Self {
        let schema = TableSchema::infer(&data);
        Self { data, schema }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.data.height()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.data.width()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str().to_string())
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.data.get_column_index(name).is_some()
    }

    pub fn semantic_type(&self, name: &str) -> Option<SemanticType> {
        self.schema.get(name)
    }

    pub fn set_semantic_type(&mut self, name: &str, semantic: SemanticType) {
        self.schema.set(name, semantic);
    }

    /// Drops schema entries for columns no longer in the frame and infers
    /// entries for columns that were added without one.
    pub fn sync_schema(&mut self) {
        let names = self.column_names();
        let stale: Vec<String> = self
            .schema
            .types
            .keys()
            .filter(|name| !names.contains(name))
            .cloned()
            .collect();
        for name in stale {
            self.schema.remove(&name);
        }
        for column in self.data.get_columns() {
            let name = column.name().as_str();
            if self.schema.get(name).is_none() {
                self.schema
                    .set(name, SemanticType::from_dtype(column.dtype()));
            }
        }
    }
}
