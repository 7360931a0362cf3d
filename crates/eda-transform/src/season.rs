//! Season derivation from the accident timestamp.

use chrono::Datelike;
use eda_model::columns::{MONTH, SEASON};
use eda_model::{AccidentTable, Result, Season, SemanticType};
use polars::prelude::{NamedFrom, Series};
use tracing::warn;

use crate::normalization::{millis_to_timestamp, timestamp_millis};

/// Recomputes `month` from the timestamp column and adds `season`.
///
/// Rows with an unknown time get a null month and fall into autumn, the
/// season of every month outside winter, spring and summer.
pub fn derive_season(table: &mut AccidentTable, timestamp_column: &str, format: &str) -> Result<()> {
    let height = table.height();
    let millis = match table.data.column(timestamp_column) {
        Ok(column) => timestamp_millis(column, format)?,
        Err(_) => {
            warn!(column = timestamp_column, "Timestamp column not found; every row is autumn");
            vec![None; height]
        }
    };

    let months: Vec<Option<u32>> = millis
        .into_iter()
        .map(|value| value.and_then(millis_to_timestamp).map(|ts| ts.month()))
        .collect();
    let seasons: Vec<&str> = months
        .iter()
        .map(|month| Season::from_optional_month(*month).label())
        .collect();
    let months: Vec<Option<i32>> = months
        .into_iter()
        .map(|month| month.and_then(|m| i32::try_from(m).ok()))
        .collect();

    table.data.with_column(Series::new(MONTH.into(), months))?;
    table.data.with_column(Series::new(SEASON.into(), seasons))?;
    table.set_semantic_type(MONTH, SemanticType::Integer);
    table.set_semantic_type(SEASON, SemanticType::Category);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalization::TIMESTAMP_FORMAT;
    use polars::prelude::{Column, DataFrame};

    #[test]
    fn test_derive_season_from_text_timestamps() {
        let df = DataFrame::new(vec![Column::from(Series::new(
            "date_and_time".into(),
            vec![
                Some("01/10/2021 08:00:00 AM"),
                Some("04/10/2021 08:00:00 AM"),
                Some("07/10/2021 08:00:00 AM"),
                Some("10/10/2021 08:00:00 AM"),
                Some("not-a-date"),
                None,
            ],
        ))])
        .unwrap();
        let mut table = AccidentTable::new(df);

        derive_season(&mut table, "date_and_time", TIMESTAMP_FORMAT).unwrap();

        let seasons: Vec<Option<&str>> = table
            .data
            .column("season")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(
            seasons,
            vec![
                Some("WINTER"),
                Some("SPRING"),
                Some("SUMMER"),
                Some("AUTUMN"),
                Some("AUTUMN"),
                Some("AUTUMN")
            ]
        );
        let months: Vec<Option<i32>> = table
            .data
            .column("month")
            .unwrap()
            .i32()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(months, vec![Some(1), Some(4), Some(7), Some(10), None, None]);
        assert_eq!(table.semantic_type("season"), Some(SemanticType::Category));
    }

    #[test]
    fn test_derive_season_without_timestamp_column() {
        let df = DataFrame::new(vec![Column::from(Series::new("lat".into(), vec![36.1, 36.2]))])
            .unwrap();
        let mut table = AccidentTable::new(df);

        derive_season(&mut table, "date_and_time", TIMESTAMP_FORMAT).unwrap();

        let season = table.data.column("season").unwrap();
        assert_eq!(season.null_count(), 0);
        assert_eq!(season.str().unwrap().get(0), Some("AUTUMN"));
        assert_eq!(table.data.column("month").unwrap().null_count(), 2);
    }
}
