// tests/draft_validation.rs

mod common;
use crate::common::init_tracing;

use ganttplan::errors::GanttplanError;
use ganttplan::schedule::schedule;
use ganttplan::{TaskDraft, TaskPatch};
use ganttplan_test_utils::builders::TaskInputBuilder;

#[test]
fn missing_fields_are_rejected_in_order() {
    init_tracing();

    let err = TaskDraft::new().validate(&[]).unwrap_err();
    assert!(matches!(err, GanttplanError::MissingField("id")));

    let err = TaskDraft::new().id("T1").validate(&[]).unwrap_err();
    assert!(matches!(err, GanttplanError::MissingField("name")));

    let err = TaskDraft::new().id("T1").name("Kickoff").validate(&[]).unwrap_err();
    assert!(matches!(err, GanttplanError::MissingField("duration")));
}

#[test]
fn blank_id_counts_as_missing() {
    init_tracing();

    let err = TaskDraft::new()
        .id("   ")
        .name("Kickoff")
        .duration(1)
        .validate(&[])
        .unwrap_err();

    assert!(matches!(err, GanttplanError::MissingField("id")));
}

#[test]
fn duplicate_id_is_rejected() {
    init_tracing();

    let existing = schedule(&[TaskInputBuilder::new("T1").build()]);
    let err = TaskDraft::new()
        .id("T1")
        .name("Clone")
        .duration(1)
        .validate(&existing)
        .unwrap_err();

    assert!(matches!(err, GanttplanError::DuplicateId(id) if id == "T1"));
}

#[test]
fn zero_duration_is_rejected() {
    init_tracing();

    let err = TaskDraft::new()
        .id("T1")
        .name("Instant")
        .duration(0)
        .validate(&[])
        .unwrap_err();

    assert!(matches!(err, GanttplanError::InvalidDuration(0)));
}

#[test]
fn unknown_predecessor_is_rejected_at_the_boundary() {
    init_tracing();

    // The scheduler would fall back silently, but the form boundary rejects.
    let err = TaskDraft::new()
        .id("T2")
        .name("Dependent")
        .duration(1)
        .predecessor("ghost")
        .validate(&[])
        .unwrap_err();

    assert!(matches!(
        err,
        GanttplanError::InvalidPredecessor { predecessor, .. } if predecessor == "ghost"
    ));
}

#[test]
fn self_referencing_predecessor_is_rejected() {
    init_tracing();

    let existing = schedule(&[TaskInputBuilder::new("T1").build()]);
    let err = TaskPatch::new()
        .predecessor("T1")
        .validate(&existing[0], &existing)
        .unwrap_err();

    assert!(matches!(
        err,
        GanttplanError::InvalidPredecessor { task, predecessor } if task == "T1" && predecessor == "T1"
    ));
}

#[test]
fn blank_predecessor_means_none() {
    init_tracing();

    let input = TaskDraft::new()
        .id("T1")
        .name("Kickoff")
        .duration(2)
        .predecessor("  ")
        .validate(&[])
        .unwrap();

    assert_eq!(input.predecessor, None);
}

#[test]
fn id_and_predecessor_are_trimmed() {
    init_tracing();

    let existing = schedule(&[TaskInputBuilder::new("T1").build()]);
    let input = TaskDraft::new()
        .id(" T2 ")
        .name("Dependent")
        .duration(1)
        .predecessor(" T1 ")
        .validate(&existing)
        .unwrap();

    assert_eq!(input.id, "T2");
    assert_eq!(input.predecessor.as_deref(), Some("T1"));
}

#[test]
fn patch_preserves_unset_fields() {
    init_tracing();

    let existing = schedule(&[
        TaskInputBuilder::new("T1").build(),
        TaskInputBuilder::new("T2").name("Original").duration(4).after("T1").build(),
    ]);
    let t2 = existing.iter().find(|t| t.id == "T2").unwrap();

    let input = TaskPatch::new().duration(6).validate(t2, &existing).unwrap();

    assert_eq!(input.name, "Original");
    assert_eq!(input.duration, 6);
    assert_eq!(input.predecessor.as_deref(), Some("T1"));
}

#[test]
fn patch_rejects_zero_duration() {
    init_tracing();

    let existing = schedule(&[TaskInputBuilder::new("T1").build()]);
    let err = TaskPatch::new()
        .duration(0)
        .validate(&existing[0], &existing)
        .unwrap_err();

    assert!(matches!(err, GanttplanError::InvalidDuration(0)));
}
