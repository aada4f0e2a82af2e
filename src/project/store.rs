// src/project/store.rs

//! The single owned task collection and its mutation entry point.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::{GanttplanError, Result};
use crate::project::draft::{TaskDraft, TaskPatch};
use crate::schedule::scheduler::schedule;
use crate::schedule::task::{Task, TaskId, TaskInput};
use crate::types::{Language, ViewMode};

/// Minimum number of week columns the chart timeline shows.
const MIN_TIMELINE_WEEKS: u32 = 12;

/// Presentational settings stored alongside the task collection.
///
/// Neither field affects scheduling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub language: Language,
    pub view_mode: ViewMode,
}

/// A mutation of the task collection.
///
/// Everything the application can do to tasks is expressed as one of these
/// and routed through [`ProjectStore::apply`].
#[derive(Debug, Clone)]
pub enum TaskMutation {
    Add(TaskDraft),
    Update { id: TaskId, patch: TaskPatch },
    Remove { id: TaskId },
}

/// Exclusive owner of the task collection.
///
/// There is exactly one copy of the collection and no history: every
/// successful mutation replaces it wholesale with a freshly scheduled one.
/// State is memory-resident only and lost when the store is dropped.
#[derive(Debug, Default)]
pub struct ProjectStore {
    tasks: Vec<Task>,
    settings: ViewSettings,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed, fully scheduled collection, in scheduling order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Greatest occupied week across all tasks, with a floor of 12 so the
    /// chart timeline never collapses for small projects.
    pub fn max_week(&self) -> u32 {
        self.tasks
            .iter()
            .map(|t| t.end_week)
            .max()
            .unwrap_or(0)
            .max(MIN_TIMELINE_WEEKS)
    }

    pub fn settings(&self) -> ViewSettings {
        self.settings
    }

    pub fn set_language(&mut self, language: Language) {
        self.settings.language = language;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.settings.view_mode = view_mode;
    }

    /// Single mutation entry point.
    ///
    /// Validation failures leave the collection untouched; on success the
    /// whole collection is replaced with a freshly scheduled one (never an
    /// incremental patch).
    pub fn apply(&mut self, mutation: TaskMutation) -> Result<()> {
        match mutation {
            TaskMutation::Add(draft) => self.add_task(draft),
            TaskMutation::Update { id, patch } => self.update_task(&id, patch),
            TaskMutation::Remove { id } => {
                self.remove_task(&id);
                Ok(())
            }
        }
    }

    /// Validate and commit a new task, rescheduling the whole collection.
    pub fn add_task(&mut self, draft: TaskDraft) -> Result<()> {
        let input = draft.validate(&self.tasks)?;
        info!(task = %input.id, duration = input.duration, "adding task");

        let mut inputs = self.current_inputs();
        inputs.push(input);
        self.reschedule(inputs);
        Ok(())
    }

    /// Validate and commit an edit to an existing task.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> Result<()> {
        let task = self
            .tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| GanttplanError::TaskNotFound(id.to_string()))?;
        let updated = patch.validate(task, &self.tasks)?;
        info!(task = %id, "updating task");

        let inputs = self
            .tasks
            .iter()
            .map(|t| {
                if t.id == id {
                    updated.clone()
                } else {
                    t.to_input()
                }
            })
            .collect();
        self.reschedule(inputs);
        Ok(())
    }

    /// Remove a task and reschedule the remainder.
    ///
    /// Removing an unknown id is a no-op. Dependents of the removed task keep
    /// their now-dangling reference and fall back to week 1 on the next pass.
    pub fn remove_task(&mut self, id: &str) {
        if !self.tasks.iter().any(|t| t.id == id) {
            warn!(task = %id, "remove for unknown task; ignoring");
            return;
        }
        info!(task = %id, "removing task");

        let inputs = self
            .tasks
            .iter()
            .filter(|t| t.id != id)
            .map(Task::to_input)
            .collect();
        self.reschedule(inputs);
    }

    fn current_inputs(&self) -> Vec<TaskInput> {
        self.tasks.iter().map(Task::to_input).collect()
    }

    fn reschedule(&mut self, inputs: Vec<TaskInput>) {
        self.tasks = schedule(&inputs);
        debug!(tasks = self.tasks.len(), "collection rescheduled");
    }
}
