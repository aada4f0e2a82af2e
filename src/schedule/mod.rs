// src/schedule/mod.rs

//! Task model and scheduling.
//!
//! - [`task`] defines the task model and the display color palette.
//! - [`scheduler`] maps task definitions to a time-boxed schedule.
//! - [`topo`] orders tasks so predecessors precede dependents (export only).

pub mod scheduler;
pub mod task;
pub mod topo;

pub use scheduler::schedule;
pub use task::{ChartColor, Task, TaskId, TaskInput, PALETTE_SIZE};
pub use topo::{ensure_acyclic, topo_order, topo_order_strict};
