//! Charts over a cleaned fixture dataset.

use std::io::Write;

use eda_ingest::load_accident_table;
use eda_model::AccidentTable;
use eda_report::{
    Bar, ChartData, ChartKind, DatasetProfile, build_chart, render_chart, standard_charts,
};
use eda_transform::{CleaningOptions, clean_dataset};
use tempfile::NamedTempFile;

const ACCIDENTS: &str = "\
Accident Number,Date and Time,Number of Motor Vehicles,Number of Injuries,Number of Fatalities,Hit and Run,Collision Type Description,Weather Description,Illumination Description,Street Address,Precinct,Lat,Long,ObjectId
1,03/14/2021 02:30:00 PM,1,0,0,N,REAR END,CLEAR,DAYLIGHT,1 MAIN ST,WEST,36.16,-86.78,1
2,07/04/2021 11:15:00 PM,2,,,,ANGLE,,DARK - LIGHTED,2 BROADWAY,,36.15,-86.77,2
3,not-a-date,,1,0,Y,,RAIN,,3 CHURCH ST,EAST,36.17,-86.79,3
4,01/02/2020 08:00:00 AM,3,2,1,N,SIDESWIPE,CLOUDY,DAWN,4 ELM ST,NORTH,,-86.70,4
";

fn fixture() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", ACCIDENTS).unwrap();
    file
}

fn cleaned() -> AccidentTable {
    let file = fixture();
    let loaded = load_accident_table(file.path()).unwrap();
    clean_dataset(loaded.table, &CleaningOptions::default())
        .unwrap()
        .table
}

fn bars(kind: ChartKind, top: Option<usize>) -> Vec<Bar> {
    match build_chart(&cleaned(), kind, top).unwrap().data {
        ChartData::Bars(bars) => bars,
        ChartData::Boxes(_) => panic!("expected bars for {kind:?}"),
    }
}

fn summary(bars: &[Bar]) -> String {
    bars.iter()
        .map(|b| format!("{}={}", b.label, b.count))
        .collect::<Vec<_>>()
        .join(",")
}

#[test]
fn standard_sequence_has_six_charts_in_order() {
    let charts = standard_charts(&cleaned(), None).unwrap();
    let kinds: Vec<ChartKind> = charts.iter().map(|c| c.kind).collect();

    assert_eq!(kinds, ChartKind::ALL.to_vec());
}

#[test]
fn weekday_counts_follow_calendar_order() {
    insta::assert_snapshot!(
        summary(&bars(ChartKind::WeekdayCounts, None)),
        @"Monday=0,Tuesday=0,Wednesday=0,Thursday=0,Friday=0,Saturday=0,Sunday=2"
    );
}

#[test]
fn season_counts_put_unknown_times_in_autumn() {
    insta::assert_snapshot!(
        summary(&bars(ChartKind::SeasonCounts, None)),
        @"WINTER=0,SPRING=1,SUMMER=1,AUTUMN=1"
    );
}

#[test]
fn top_weather_breaks_ties_by_label() {
    insta::assert_snapshot!(
        summary(&bars(ChartKind::TopWeather, None)),
        @"CLEAR=1,RAIN=1,UNKNOWN=1"
    );
    assert_eq!(bars(ChartKind::TopCollisionTypes, Some(2)).len(), 2);
}

#[test]
fn hour_box_plot_groups_by_weather() {
    let chart = build_chart(&cleaned(), ChartKind::HourByWeather, None).unwrap();
    let ChartData::Boxes(boxes) = &chart.data else {
        panic!("expected boxes");
    };
    let labels: Vec<&str> = boxes.iter().map(|b| b.label.as_str()).collect();

    assert_eq!(labels, vec!["CLEAR", "UNKNOWN"]);
    assert_eq!(boxes[1].median, 23.0);
    assert!(render_chart(&chart).contains("Accident hour by weather condition"));
}

#[test]
fn raw_profile_counts_nulls_before_cleaning() {
    let file = fixture();
    let loaded = load_accident_table(file.path()).unwrap();
    let profile = DatasetProfile::from_frame(&loaded.table.data).unwrap();

    assert_eq!(profile.rows, 4);
    assert_eq!(profile.width(), 14);
    let precinct = profile
        .columns
        .iter()
        .find(|c| c.name == "Precinct")
        .unwrap();
    assert_eq!(precinct.nulls, 1);
}
