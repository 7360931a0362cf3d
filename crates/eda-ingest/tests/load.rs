//! Integration tests for loading the accident dataset.

use std::io::Write;
use std::path::Path;

use eda_ingest::{IngestError, load_accident_table, normalize_header_names};
use eda_model::SemanticType;
use tempfile::NamedTempFile;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

const SAMPLE: &str = "\
Accident Number,Date and Time,Number of Motor Vehicles,Number of Injuries,Hit and Run,Precinct,Lat,Long
20210001,03/14/2021 02:30:00 PM,2,0,N,WEST,36.16,-86.78
20210002,not-a-date,,1,,EAST,,-86.70
";

#[test]
fn load_infers_semantic_types() {
    let file = create_temp_csv(SAMPLE);
    let loaded = load_accident_table(file.path()).unwrap();
    let table = &loaded.table;

    assert_eq!(table.height(), 2);
    assert_eq!(table.width(), 8);
    assert_eq!(
        table.semantic_type("Number of Motor Vehicles"),
        Some(SemanticType::Integer)
    );
    assert_eq!(table.semantic_type("Lat"), Some(SemanticType::Float));
    assert_eq!(table.semantic_type("Precinct"), Some(SemanticType::Text));
    assert_eq!(table.semantic_type("Date and Time"), Some(SemanticType::Text));
}

#[test]
fn load_keeps_raw_headers() {
    let file = create_temp_csv(SAMPLE);
    let loaded = load_accident_table(file.path()).unwrap();

    assert_eq!(loaded.raw_headers[0], "Accident Number");
    let normalized = normalize_header_names(&loaded.raw_headers);
    assert_eq!(normalized[2], "number_of_motor_vehicles");
    assert_eq!(normalized[7], "long");
}

#[test]
fn load_missing_file_is_fatal() {
    let result = load_accident_table(Path::new("does/not/exist.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn load_empty_file_is_fatal() {
    let file = create_temp_csv("");
    let result = load_accident_table(file.path());
    assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
}

#[test]
fn load_header_only_file_is_fatal() {
    let file = create_temp_csv("Lat,Long\n");
    let result = load_accident_table(file.path());
    assert!(matches!(result, Err(IngestError::EmptyDataFrame { .. })));
}
