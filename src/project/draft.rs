// src/project/draft.rs

//! Draft and patch types for the mutation boundary.
//!
//! Form input arrives as partial records; these types hold the partial state
//! and are validated before anything touches the committed collection. A
//! draft is never merged directly into the schedule.

use crate::errors::{GanttplanError, Result};
use crate::schedule::task::{Task, TaskId, TaskInput};

/// Partial record for a task being created.
///
/// All fields optional; [`TaskDraft::validate`] turns a complete draft into a
/// [`TaskInput`] or reports the first validation failure.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub duration: Option<u32>,
    pub predecessor: Option<String>,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn duration(mut self, weeks: u32) -> Self {
        self.duration = Some(weeks);
        self
    }

    pub fn predecessor(mut self, id: &str) -> Self {
        self.predecessor = Some(id.to_string());
        self
    }

    /// Validate this draft against the committed collection.
    ///
    /// Checks, in order:
    /// - id, name and duration are present and non-empty
    /// - id is unique among `existing`
    /// - duration is at least one week
    /// - predecessor, if given, names an existing task other than the draft
    ///   itself (an empty or whitespace-only predecessor means "none")
    pub fn validate(&self, existing: &[Task]) -> Result<TaskInput> {
        let id = match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => return Err(GanttplanError::MissingField("id")),
        };
        let name = match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => return Err(GanttplanError::MissingField("name")),
        };
        let duration = self
            .duration
            .ok_or(GanttplanError::MissingField("duration"))?;

        if existing.iter().any(|t| t.id == id) {
            return Err(GanttplanError::DuplicateId(id));
        }
        if duration == 0 {
            return Err(GanttplanError::InvalidDuration(duration));
        }

        let predecessor = normalize_predecessor(self.predecessor.as_deref());
        if let Some(pred) = &predecessor {
            validate_predecessor(&id, pred, existing)?;
        }

        Ok(TaskInput {
            id,
            name,
            duration,
            predecessor,
        })
    }
}

/// Partial record for editing an existing task.
///
/// `None` fields are left unchanged; `predecessor: Some(None)` clears the
/// reference.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub duration: Option<u32>,
    pub predecessor: Option<Option<String>>,
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn duration(mut self, weeks: u32) -> Self {
        self.duration = Some(weeks);
        self
    }

    pub fn predecessor(mut self, id: &str) -> Self {
        self.predecessor = Some(Some(id.to_string()));
        self
    }

    pub fn clear_predecessor(mut self) -> Self {
        self.predecessor = Some(None);
        self
    }

    /// Validate this patch against the committed collection and produce the
    /// updated definition for `task`.
    pub fn validate(&self, task: &Task, existing: &[Task]) -> Result<TaskInput> {
        let mut input = task.to_input();

        if let Some(name) = &self.name {
            input.name = name.clone();
        }
        if let Some(duration) = self.duration {
            if duration == 0 {
                return Err(GanttplanError::InvalidDuration(duration));
            }
            input.duration = duration;
        }
        if let Some(change) = &self.predecessor {
            input.predecessor = normalize_predecessor(change.as_deref());
            if let Some(pred) = &input.predecessor {
                validate_predecessor(&input.id, pred, existing)?;
            }
        }

        Ok(input)
    }
}

/// Empty or whitespace-only predecessor input means "no predecessor".
fn normalize_predecessor(raw: Option<&str>) -> Option<TaskId> {
    match raw.map(str::trim) {
        Some(pred) if !pred.is_empty() => Some(pred.to_string()),
        _ => None,
    }
}

fn validate_predecessor(task_id: &str, pred: &str, existing: &[Task]) -> Result<()> {
    if pred == task_id || !existing.iter().any(|t| t.id == pred) {
        return Err(GanttplanError::InvalidPredecessor {
            task: task_id.to_string(),
            predecessor: pred.to_string(),
        });
    }
    Ok(())
}
