//! Column-name normalization applied to a loaded table.

use eda_ingest::normalize_header_names;
use eda_model::{AccidentTable, Result, TableSchema};
use serde::Serialize;
use tracing::debug;

/// One column whose name changed during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRename {
    pub from: String,
    pub to: String,
}

/// Renames every column to its normalized form.
///
/// Semantic types follow their column. Running this on an already
/// normalized table changes nothing and returns no renames.
pub fn normalize_columns(table: &mut AccidentTable) -> Result<Vec<ColumnRename>> {
    let current = table.column_names();
    let normalized = normalize_header_names(&current);
    if current == normalized {
        return Ok(Vec::new());
    }

    let semantics: Vec<_> = current
        .iter()
        .map(|name| table.semantic_type(name))
        .collect();
    table
        .data
        .set_column_names(normalized.iter().map(String::as_str))?;

    let mut schema = TableSchema::default();
    for (name, semantic) in normalized.iter().zip(semantics) {
        if let Some(semantic) = semantic {
            schema.set(name.as_str(), semantic);
        }
    }
    table.schema = schema;
    table.sync_schema();

    let renames: Vec<ColumnRename> = current
        .into_iter()
        .zip(normalized)
        .filter(|(from, to)| from != to)
        .map(|(from, to)| ColumnRename { from, to })
        .collect();
    for rename in &renames {
        debug!(from = %rename.from, to = %rename.to, "Renamed column");
    }
    Ok(renames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eda_model::SemanticType;
    use polars::prelude::{Column, DataFrame, NamedFrom, Series};

    fn raw_table() -> AccidentTable {
        let df = DataFrame::new(vec![
            Column::from(Series::new("Street Address".into(), vec!["1 MAIN ST"])),
            Column::from(Series::new(" Number of Injuries".into(), vec![1i64])),
            Column::from(Series::new("Lat".into(), vec![36.1])),
        ])
        .unwrap();
        AccidentTable::new(df)
    }

    #[test]
    fn test_normalize_columns_renames() {
        let mut table = raw_table();
        let renames = normalize_columns(&mut table).unwrap();

        assert_eq!(
            table.column_names(),
            vec!["street_address", "number_of_injuries", "lat"]
        );
        assert_eq!(renames.len(), 3);
        assert_eq!(renames[0].from, "Street Address");
        assert_eq!(renames[0].to, "street_address");
    }

    #[test]
    fn test_normalize_columns_carries_semantic_types() {
        let mut table = raw_table();
        normalize_columns(&mut table).unwrap();

        assert_eq!(
            table.semantic_type("number_of_injuries"),
            Some(SemanticType::Integer)
        );
        assert_eq!(table.semantic_type("lat"), Some(SemanticType::Float));
        assert_eq!(table.semantic_type("Lat"), None);
    }

    #[test]
    fn test_normalize_columns_idempotent() {
        let mut table = raw_table();
        normalize_columns(&mut table).unwrap();
        let before = table.column_names();

        let renames = normalize_columns(&mut table).unwrap();

        assert!(renames.is_empty());
        assert_eq!(table.column_names(), before);
    }
}
