use cpm_schedule::{
    GraphExport, ImportError, RegistryError, Schedule, ScheduleReport, ReportRow,
    load_activities_from_csv, load_activities_from_json, load_activities_from_path,
};
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

fn temp_with(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn json_list_imports_and_computes() {
    let file = temp_with(
        ".json",
        r#"[
            { "name": "A", "duration": 2 },
            { "name": "B", "duration": 5, "predecessors": [] },
            { "name": "C", "duration": 3, "predecessors": ["A", "B"] }
        ]"#,
    );
    let schedule = load_activities_from_json(file.path()).unwrap();
    assert_eq!(schedule.len(), 3);
    assert_eq!(schedule.project_finish(), 8);
    assert_eq!(schedule.critical_path(), ["B", "C"]);
}

#[test]
fn json_project_object_keeps_metadata() {
    let file = temp_with(
        ".json",
        r#"{
            "metadata": { "project_name": "House", "project_description": "Build", "time_unit": "weeks" },
            "activities": [ { "name": "Dig", "duration": 1 } ]
        }"#,
    );
    let schedule = load_activities_from_path(file.path()).unwrap();
    assert_eq!(schedule.metadata().project_name, "House");
    assert_eq!(schedule.metadata().time_unit, "weeks");
    assert_eq!(schedule.len(), 1);
}

#[test]
fn csv_accepts_dash_and_semicolons() {
    let file = temp_with(
        ".csv",
        "name,duration,predecessors\nA,3,-\nB,2,A\nC,4,\"A;B\"\n",
    );
    let schedule = load_activities_from_path(file.path()).unwrap();
    assert_eq!(schedule.project_finish(), 9);
    assert_eq!(
        schedule.find_activity("C").unwrap().predecessors,
        vec!["A".to_string(), "B".to_string()]
    );
}

#[test]
fn forward_reference_in_file_reports_record() {
    let file = temp_with(".csv", "name,duration,predecessors\nA,1,-\nX,1,Y\nY,1,-\n");
    match load_activities_from_csv(file.path()) {
        Err(ImportError::Registry { record, source }) => {
            assert_eq!(record, 2);
            assert_eq!(source.kind(), "unknown_predecessor");
            assert!(matches!(source, RegistryError::UnknownPredecessor { .. }));
        }
        other => panic!("expected registry rejection, got {other:?}"),
    }
}

#[test]
fn malformed_predecessor_field_is_invalid_data() {
    let file = temp_with(".csv", "name,duration,predecessors\nA,1,-\nB,1,\"A,,\"\n");
    assert!(matches!(
        load_activities_from_csv(file.path()),
        Err(ImportError::InvalidData { record: 2, .. })
    ));
}

#[test]
fn json_names_follow_console_rules() {
    let file = temp_with(
        ".json",
        r#"[ { "name": "A", "duration": 1 }, { "name": "B C", "duration": 2 } ]"#,
    );
    match load_activities_from_json(file.path()) {
        Err(ImportError::InvalidData { record, message }) => {
            assert_eq!(record, 2);
            assert!(message.contains("B C"), "{message}");
        }
        other => panic!("expected invalid data, got {other:?}"),
    }
}

#[test]
fn json_predecessor_tokens_are_checked() {
    let file = temp_with(
        ".json",
        r#"[ { "name": "A", "duration": 1 }, { "name": "B", "duration": 2, "predecessors": ["A;"] } ]"#,
    );
    assert!(matches!(
        load_activities_from_json(file.path()),
        Err(ImportError::InvalidData { record: 2, .. })
    ));
}

#[test]
fn csv_name_with_punctuation_is_invalid_data() {
    let file = temp_with(".csv", "name,duration,predecessors
x;y,1,-
");
    assert!(matches!(
        load_activities_from_csv(file.path()),
        Err(ImportError::InvalidData { record: 1, .. })
    ));
}

fn sample_schedule() -> Schedule {
    let mut schedule = Schedule::new();
    schedule.add_activity("A", 2, Vec::<String>::new()).unwrap();
    schedule.add_activity("B", 5, Vec::<String>::new()).unwrap();
    schedule.add_activity("C", 3, ["A", "B"]).unwrap();
    schedule
}

#[test]
fn csv_report_lists_every_row() {
    let report = ScheduleReport::from_schedule(&sample_schedule());
    let file = NamedTempFile::new().unwrap();
    report.write_csv(file.path()).unwrap();

    let mut reader = csv::Reader::from_path(file.path()).unwrap();
    let rows: Vec<ReportRow> = reader.deserialize().map(Result::unwrap).collect();
    assert_eq!(rows, report.rows());
    assert_eq!(rows[0].slack, 3);
    assert!(!rows[0].critical);
}

#[test]
fn json_report_includes_summary() {
    let report = ScheduleReport::from_schedule(&sample_schedule());
    let file = NamedTempFile::new().unwrap();
    report.write_json(file.path()).unwrap();

    let value: serde_json::Value =
        serde_json::from_reader(std::fs::File::open(file.path()).unwrap()).unwrap();
    assert_eq!(value["summary"]["project_finish"], 8);
    assert_eq!(value["rows"].as_array().unwrap().len(), 3);
}

#[test]
fn html_export_is_written() {
    let export = GraphExport::from_schedule(&sample_schedule());
    let file = Builder::new().suffix(".html").tempfile().unwrap();
    export.write_html(file.path()).unwrap();

    let html = std::fs::read_to_string(file.path()).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("vis.DataSet"));
    assert!(html.contains("\"color\": \"red\""));
}
