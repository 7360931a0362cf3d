//! Terminal output for the profile, the cleaning report and the charts.

use comfy_table::{Attribute, Cell, CellAlignment, Color};

use eda_report::style::{align_column, count_cell, dim_cell, styled_table};
use eda_report::{Chart, DatasetProfile, render_chart};
use eda_transform::CleaningReport;

pub fn print_profile(profile: &DatasetProfile) {
    println!("{}", profile.render());
}

pub fn print_charts(charts: &[Chart]) {
    for chart in charts {
        println!("{}\n", render_chart(chart));
    }
}

pub fn print_report_json(report: &CleaningReport) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn print_report(report: &CleaningReport) {
    println!(
        "Rows: {} -> {} ({} removed for missing coordinates)",
        report.rows_before, report.rows_after, report.imputation.rows_missing_geolocation
    );
    println!(
        "Columns: {} -> {}",
        report.columns_before, report.columns_after
    );
    println!(
        "Timestamps: {} parsed, {} unparseable, {} missing",
        report.timestamps.parsed, report.timestamps.unparseable, report.timestamps.missing
    );
    if !report.dropped_columns.is_empty() {
        println!("Dropped: {}", report.dropped_columns.join(", "));
    }

    let mut table = styled_table(&["Column", "Filled", "Value", "Median", "Remaining nulls"]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for count in &report.remaining_nulls {
        let fill = report.imputation.fill_for(&count.column);
        let median = report.imputation.median_for(&count.column);
        let column = match count.nulls {
            None => dim_cell(&count.column),
            Some(_) => Cell::new(&count.column).add_attribute(Attribute::Bold),
        };
        table.add_row(vec![
            column,
            count_cell(fill.map(|f| f.filled), Color::Green),
            fill.map_or_else(|| dim_cell("-"), |f| Cell::new(&f.value)),
            median.map_or_else(|| dim_cell("-"), Cell::new),
            count_cell(count.nulls, Color::Red),
        ]);
    }
    println!("{table}");

    if !report.imputation.skipped_columns.is_empty() {
        println!(
            "Skipped (not in dataset): {}",
            report.imputation.skipped_columns.join(", ")
        );
    }
}
