// src/schedule/scheduler.rs

//! The scheduling pass: maps task definitions to a time-boxed schedule.

use tracing::{debug, warn};

use crate::schedule::task::{ChartColor, Task, TaskInput};

/// Compute a full schedule from an unordered collection of task definitions.
///
/// Pure function, recomputed in full on every mutation; the input order is
/// the insertion order of the collection.
///
/// The pass considers tasks in a *stable partition*: tasks without a
/// predecessor first, tasks with one second, relative order preserved within
/// each group. This is weaker than a topological sort: a predecessor-bearing
/// task whose predecessor also has a predecessor is only resolved correctly
/// when the input order already respects the chain. A predecessor that is
/// dangling, self-referencing, or simply not scheduled yet falls back to
/// week 1 without error.
pub fn schedule(inputs: &[TaskInput]) -> Vec<Task> {
    let mut ordered: Vec<&TaskInput> = inputs.iter().collect();
    // Stable, so relative order within each bucket is the insertion order.
    ordered.sort_by_key(|t| t.predecessor.is_some());

    let mut scheduled: Vec<Task> = Vec::with_capacity(inputs.len());

    for input in ordered {
        let start_week = match &input.predecessor {
            None => 1,
            Some(pred_id) => {
                // Only tasks already appended count; the accumulator is the
                // lookup source.
                match scheduled.iter().find(|t| &t.id == pred_id) {
                    Some(pred) => pred.end_week + 1,
                    None => {
                        warn!(
                            task = %input.id,
                            predecessor = %pred_id,
                            "predecessor not scheduled yet or missing; falling back to week 1"
                        );
                        1
                    }
                }
            }
        };

        let color = ChartColor::for_position(scheduled.len());
        let task = Task::from_input(input.clone(), start_week, color);
        debug!(
            task = %task.id,
            start_week = task.start_week,
            end_week = task.end_week,
            "scheduled task"
        );
        scheduled.push(task);
    }

    scheduled
}
