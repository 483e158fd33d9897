mod common;

use common::office_tables;
use ifc_assistant::export::{export_csv, export_json};
use pretty_assertions::assert_eq;
use serde_json::Value;

#[test]
fn csv_tables_mirror_records() {
    let tables = office_tables();
    let dir = tempfile::tempdir().unwrap();

    let written = export_csv(&tables, dir.path().join("out")).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        ["doors.csv", "windows.csv", "beams.csv", "columns.csv", "spaces.csv", "floors.csv"]
    );

    let doors = std::fs::read_to_string(dir.path().join("out/doors.csv")).unwrap();
    assert_eq!(
        doors,
        "Name,ID,Location,Width,Height\n\
         Single Flush,100,Level 1,900 mm,2100 mm\n\
         Single Flush,101,Level 2,Unknown,Unknown\n"
    );

    let columns = std::fs::read_to_string(dir.path().join("out/columns.csv")).unwrap();
    assert_eq!(
        columns.lines().next(),
        Some("Name,ID,Location,Length,Cross Section Area,Volume,Height,Width")
    );
}

#[test]
fn json_document_holds_all_tables() {
    let tables = office_tables();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.json");

    export_json(&tables, &path).unwrap();
    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(doc["project_name"], "Office Block");
    assert_eq!(doc["beams"][0]["Volume"], "2.5 m³");
    assert_eq!(doc["columns"][0]["Volume"], "2.5 mm³");
    assert_eq!(doc["spaces"][1]["Area"], "Unknown");
    assert_eq!(doc["floors"].as_array().map(Vec::len), Some(2));
}
