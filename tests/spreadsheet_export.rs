// tests/spreadsheet_export.rs

mod common;
use crate::common::init_tracing;

use ganttplan::export::{spreadsheet_grid, CellStyle};
use ganttplan::schedule::schedule;
use ganttplan::types::Language;
use ganttplan_test_utils::builders::TaskInputBuilder;

#[test]
fn empty_schedule_yields_header_only() {
    init_tracing();

    let sheet = spreadsheet_grid(&[], Language::En);

    assert_eq!(sheet.header.len(), 2); // id + task label, no week columns
    assert!(sheet.rows.is_empty());
}

#[test]
fn header_spans_all_weeks_with_language_prefix() {
    init_tracing();

    let tasks = schedule(&[
        TaskInputBuilder::new("T1").duration(2).build(),
        TaskInputBuilder::new("T2").duration(3).after("T1").build(),
    ]);
    let sheet = spreadsheet_grid(&tasks, Language::En);

    // 2 info columns + weeks 1..=5.
    assert_eq!(sheet.header.len(), 7);
    assert_eq!(sheet.header[0].value, "ID");
    assert_eq!(sheet.header[1].value, "Task");
    assert_eq!(sheet.header[2].value, "W1");
    assert_eq!(sheet.header[6].value, "W5");
    assert!(sheet.header.iter().all(|c| c.style == CellStyle::Header));
}

#[test]
fn portuguese_labels_use_s_prefix() {
    init_tracing();

    let tasks = schedule(&[TaskInputBuilder::new("T1").duration(1).build()]);
    let sheet = spreadsheet_grid(&tasks, Language::Pt);

    assert_eq!(sheet.header[1].value, "Tarefa");
    assert_eq!(sheet.header[2].value, "S1");
}

#[test]
fn occupied_weeks_are_marked() {
    init_tracing();

    let tasks = schedule(&[
        TaskInputBuilder::new("T1").duration(2).build(),
        TaskInputBuilder::new("T2").duration(3).after("T1").build(),
    ]);
    let sheet = spreadsheet_grid(&tasks, Language::En);

    let t2_row = sheet
        .rows
        .iter()
        .find(|r| r[0].value == "T2")
        .expect("T2 row present");

    // Week columns start at index 2; T2 occupies weeks 3..=5.
    let styles: Vec<CellStyle> = t2_row[2..].iter().map(|c| c.style).collect();
    assert_eq!(
        styles,
        vec![
            CellStyle::Blank,
            CellStyle::Blank,
            CellStyle::Occupied,
            CellStyle::Occupied,
            CellStyle::Occupied,
        ]
    );
    assert_eq!(t2_row[4].value, "X");
    assert_eq!(t2_row[2].value, "");
}

#[test]
fn rows_follow_topological_order() {
    init_tracing();

    // Dependent listed before its predecessor in the schedule input.
    let tasks = schedule(&[
        TaskInputBuilder::new("C").duration(1).after("B").build(),
        TaskInputBuilder::new("B").duration(1).after("A").build(),
        TaskInputBuilder::new("A").duration(1).build(),
    ]);
    let sheet = spreadsheet_grid(&tasks, Language::En);

    let ids: Vec<&str> = sheet.rows.iter().map(|r| r[0].value.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);
}

#[test]
fn grid_serializes_for_external_writers() {
    init_tracing();

    let tasks = schedule(&[TaskInputBuilder::new("T1").duration(1).build()]);
    let sheet = spreadsheet_grid(&tasks, Language::En);

    let json = serde_json::to_value(&sheet).expect("sheet serializes");
    assert_eq!(json["header"][0]["value"], "ID");
    assert_eq!(json["header"][0]["style"], "header");
    assert_eq!(json["rows"][0][2]["style"], "occupied");
}
