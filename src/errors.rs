// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Validation errors are raised at the mutation boundary (draft/patch
//! validation) before the scheduler is ever invoked; the scheduler and the
//! topological sorter themselves never raise them.

use thiserror::Error;

use crate::schedule::TaskId;

#[derive(Error, Debug)]
pub enum GanttplanError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Duplicate task id: {0}")]
    DuplicateId(TaskId),

    #[error("Duration must be at least 1 week (got {0})")]
    InvalidDuration(u32),

    #[error("Invalid predecessor '{predecessor}' for task '{task}'")]
    InvalidPredecessor { task: TaskId, predecessor: TaskId },

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Cycle detected in predecessor chain involving task '{0}'")]
    CyclicDependency(TaskId),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, GanttplanError>;
