// src/lib.rs

//! Project-task scheduling core for a Gantt-style planner.
//!
//! Users define tasks (id, name, duration in weeks, optional single
//! predecessor); this crate computes the time-boxed schedule, the
//! topological ordering used for export, and the spreadsheet grid the
//! export collaborator writes out. Rendering and persistence live outside
//! the crate.

pub mod errors;
pub mod export;
pub mod logging;
pub mod project;
pub mod schedule;
pub mod types;

pub use crate::errors::{GanttplanError, Result};
pub use crate::export::{spreadsheet_grid, Sheet};
pub use crate::project::{ProjectStore, TaskDraft, TaskMutation, TaskPatch};
pub use crate::schedule::{schedule, topo_order, topo_order_strict, Task, TaskId, TaskInput};
pub use crate::types::{Language, ViewMode};
