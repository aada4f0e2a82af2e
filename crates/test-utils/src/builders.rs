#![allow(dead_code)]

use ganttplan::project::ProjectStore;
use ganttplan::schedule::TaskInput;
use ganttplan::TaskDraft;

/// Builder for `TaskInput` to simplify test setup.
pub struct TaskInputBuilder {
    input: TaskInput,
}

impl TaskInputBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            input: TaskInput {
                id: id.to_string(),
                name: format!("Task {id}"),
                duration: 1,
                predecessor: None,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.input.name = name.to_string();
        self
    }

    pub fn duration(mut self, weeks: u32) -> Self {
        self.input.duration = weeks;
        self
    }

    pub fn after(mut self, predecessor: &str) -> Self {
        self.input.predecessor = Some(predecessor.to_string());
        self
    }

    pub fn build(self) -> TaskInput {
        self.input
    }
}

/// Build a `ProjectStore` pre-populated through the real mutation path.
///
/// Tasks are added in order, so predecessors must appear before dependents.
pub struct ProjectStoreBuilder {
    drafts: Vec<TaskDraft>,
}

impl ProjectStoreBuilder {
    pub fn new() -> Self {
        Self { drafts: Vec::new() }
    }

    pub fn with_task(mut self, id: &str, duration: u32) -> Self {
        self.drafts
            .push(TaskDraft::new().id(id).name(&format!("Task {id}")).duration(duration));
        self
    }

    pub fn with_task_after(mut self, id: &str, duration: u32, predecessor: &str) -> Self {
        self.drafts.push(
            TaskDraft::new()
                .id(id)
                .name(&format!("Task {id}"))
                .duration(duration)
                .predecessor(predecessor),
        );
        self
    }

    pub fn build(self) -> ProjectStore {
        let mut store = ProjectStore::new();
        for draft in self.drafts {
            store
                .add_task(draft)
                .expect("Failed to build valid store from builder");
        }
        store
    }
}

impl Default for ProjectStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
