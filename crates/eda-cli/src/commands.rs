//! Subcommand implementations. Each returns data; printing happens in `main`.

use std::path::Path;

use anyhow::{Context, Result};
use eda_ingest::{LoadedTable, load_accident_table};
use eda_report::{Chart, ChartKind, DatasetProfile, build_chart, standard_charts};
use eda_transform::{CleanedDataset, CleaningOptions, clean_dataset};
use tracing::{info, info_span};

fn load(input: &Path) -> Result<LoadedTable> {
    let _span = info_span!("load", path = %input.display()).entered();
    load_accident_table(input)
        .with_context(|| format!("failed to load accident data from {}", input.display()))
}

/// Loads the raw table and profiles it without cleaning.
pub fn run_profile(input: &Path) -> Result<DatasetProfile> {
    let loaded = load(input)?;
    DatasetProfile::from_frame(&loaded.table.data).context("profile dataset")
}

/// Loads and cleans the dataset with the default policy.
pub fn run_clean(input: &Path) -> Result<CleanedDataset> {
    let loaded = load(input)?;
    let options = CleaningOptions::default();
    let cleaned = clean_dataset(loaded.table, &options).context("clean dataset")?;
    info!(
        rows = cleaned.report.rows_after,
        columns = cleaned.report.columns_after,
        "Dataset ready for charts"
    );
    Ok(cleaned)
}

/// Cleans the dataset and builds one chart, or the full sequence when `chart` is `None`.
pub fn run_charts(input: &Path, chart: Option<ChartKind>, top: Option<usize>) -> Result<Vec<Chart>> {
    let cleaned = run_clean(input)?;
    let _span = info_span!("charts").entered();
    match chart {
        Some(kind) => {
            let chart = build_chart(&cleaned.table, kind, top)
                .with_context(|| format!("build chart {kind:?}"))?;
            Ok(vec![chart])
        }
        None => standard_charts(&cleaned.table, top).context("build charts"),
    }
}
