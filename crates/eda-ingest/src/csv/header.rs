//! CSV header parsing and column-name normalization.

use std::collections::HashSet;

/// Raw header row as it appears in the source file.
#[derive(Debug, Clone)]
pub struct CsvHeaders {
    /// Header cells, BOM stripped, otherwise untouched.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Normalizes a single column name.
///
/// Trims, lowercases, turns spaces into underscores and strips anything
/// outside `[a-z0-9_]`. Applying it to its own output is a no-op.
///
/// ```
/// use eda_ingest::normalize_column_name;
///
/// assert_eq!(normalize_column_name(" Street Address "), "street_address");
/// assert_eq!(normalize_column_name("street_address"), "street_address");
/// assert_eq!(normalize_column_name("Zip Code (5)"), "zip_code_5");
/// ```
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(' ', "_")
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '_')
        .collect()
}

/// Normalizes a full header row.
///
/// Names that normalize to nothing become `column_<index>`. When two names
/// collapse to the same value the later one gets a `_2`, `_3`, ... suffix.
pub fn normalize_header_names(raw: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut names = Vec::with_capacity(raw.len());
    for (idx, value) in raw.iter().enumerate() {
        let mut base = normalize_column_name(value);
        if base.is_empty() {
            base = format!("column_{idx}");
        }
        let mut candidate = base.clone();
        let mut suffix = 2usize;
        while seen.contains(&candidate) {
            candidate = format!("{base}_{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        names.push(candidate);
    }
    names
}

/// Returns true if the name already satisfies `[a-z0-9_]+`.
pub fn is_normalized_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
}
