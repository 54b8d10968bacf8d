//! Integration tests for CSV export.

use chrono::NaiveDate;
use taskdeck::db::Database;
use taskdeck::export::{export_csv, export_csv_file};

fn setup_db() -> Database {
    Database::open_in_memory().expect("Failed to create in-memory database")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn export_writes_header_and_rows_with_display_dates() {
    let db = setup_db();
    db.add_task("Report", Some("quarterly"), date(2025, 3, 15), "Work")
        .unwrap();
    db.add_task("Call home", None, date(2025, 3, 16), "Family")
        .unwrap();

    let mut out = Vec::new();
    let count = export_csv(&db, &mut out).unwrap();
    assert_eq!(count, 2);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "ID;Title;Description;Date;Status;Category");
    assert_eq!(lines[1], "1;Report;quarterly;15.03.2025;New;Work");
    assert_eq!(lines[2], "2;Call home;;16.03.2025;New;Family");
}

#[test]
fn export_preserves_non_ascii_text() {
    let db = setup_db();
    db.add_task("Отчёт", Some("описание"), date(2025, 3, 15), "Work")
        .unwrap();

    let mut out = Vec::new();
    export_csv(&db, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Отчёт;описание;15.03.2025"));
}

#[test]
fn fields_containing_the_delimiter_are_quoted() {
    let db = setup_db();
    db.add_task("a;b", None, date(2025, 1, 1), "General")
        .unwrap();

    let mut out = Vec::new();
    export_csv(&db, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.lines().nth(1).unwrap().starts_with("1;\"a;b\";"));
}

#[test]
fn export_to_file_round_trips() {
    let db = setup_db();
    db.add_task("On disk", None, date(2025, 3, 15), "General")
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.csv");

    let count = export_csv_file(&db, &path).unwrap();
    assert_eq!(count, 1);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("ID;Title;Description;Date;Status;Category"));
    assert!(text.contains("On disk"));
}

#[test]
fn empty_store_exports_header_only() {
    let db = setup_db();

    let mut out = Vec::new();
    let count = export_csv(&db, &mut out).unwrap();
    assert_eq!(count, 0);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.trim_end(), "ID;Title;Description;Date;Status;Category");
}
