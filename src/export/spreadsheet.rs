// src/export/spreadsheet.rs

//! Spreadsheet grid model consumed by the workbook-writing collaborator.
//!
//! This module only builds the grid (values + styling classes); actual
//! workbook serialization happens outside the crate.

use serde::Serialize;
use tracing::debug;

use crate::schedule::task::Task;
use crate::schedule::topo::topo_order;
use crate::types::Language;

/// Styling class for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStyle {
    /// Header-row cell.
    Header,
    /// Task id/name cell.
    Info,
    /// Week cell inside the task's occupied range.
    Occupied,
    /// Week cell outside the task's occupied range.
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetCell {
    pub value: String,
    pub style: CellStyle,
}

impl SheetCell {
    fn new(value: impl Into<String>, style: CellStyle) -> Self {
        Self {
            value: value.into(),
            style,
        }
    }
}

/// The full export grid: one header row, then one row per task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sheet {
    pub header: Vec<SheetCell>,
    pub rows: Vec<Vec<SheetCell>>,
}

/// Build the export grid for the given schedule.
///
/// Rows are in topological order (predecessors above dependents); the week
/// columns span `1..=max(end_week)`. Occupied weeks are marked with an "X"
/// cell carrying the [`CellStyle::Occupied`] style.
pub fn spreadsheet_grid(tasks: &[Task], language: Language) -> Sheet {
    let ordered = topo_order(tasks);
    let max_week = ordered.iter().map(|t| t.end_week).max().unwrap_or(0);

    let mut header = vec![
        SheetCell::new(language.id_label(), CellStyle::Header),
        SheetCell::new(language.task_label(), CellStyle::Header),
    ];
    for week in 1..=max_week {
        header.push(SheetCell::new(
            format!("{}{}", language.week_prefix(), week),
            CellStyle::Header,
        ));
    }

    let mut rows = Vec::with_capacity(ordered.len());
    for task in &ordered {
        let mut row = vec![
            SheetCell::new(task.id.clone(), CellStyle::Info),
            SheetCell::new(task.name.clone(), CellStyle::Info),
        ];
        for week in 1..=max_week {
            if task.occupies_week(week) {
                row.push(SheetCell::new("X", CellStyle::Occupied));
            } else {
                row.push(SheetCell::new("", CellStyle::Blank));
            }
        }
        rows.push(row);
    }

    debug!(
        tasks = rows.len(),
        weeks = max_week,
        "built spreadsheet grid"
    );

    Sheet { header, rows }
}
