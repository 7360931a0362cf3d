//! Removal of columns that carry no analytical value.

use eda_model::{AccidentTable, Result};
use tracing::debug;

/// Drops each listed column that exists. Names not in the table are ignored.
///
/// Returns the names actually removed, in list order.
pub fn drop_low_value_columns(table: &mut AccidentTable, columns: &[String]) -> Result<Vec<String>> {
    let mut dropped = Vec::new();
    for name in columns {
        if !table.has_column(name) {
            debug!(column = %name, "Column not present; nothing to drop");
            continue;
        }
        table.data.drop_in_place(name)?;
        table.schema.remove(name);
        dropped.push(name.clone());
    }
    Ok(dropped)
}
