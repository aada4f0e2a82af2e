// src/schedule/task.rs

//! Task model: user-supplied definitions and scheduled output.

use serde::{Deserialize, Serialize};

/// Unique task identifier, used as the join key for predecessor references.
pub type TaskId = String;

/// Number of display colors in the cyclic palette.
pub const PALETTE_SIZE: usize = 5;

/// A user-supplied task definition, before scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInput {
    pub id: TaskId,
    pub name: String,
    /// Number of weeks the task occupies. Always >= 1 for validated input.
    pub duration: u32,
    /// Reference to the task that must complete before this one starts.
    /// `None` means the task starts at week 1.
    #[serde(default)]
    pub predecessor: Option<TaskId>,
}

/// A fully scheduled task with derived week range and display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub duration: u32,
    #[serde(default)]
    pub predecessor: Option<TaskId>,
    /// First occupied week. Always >= 1.
    pub start_week: u32,
    /// Last occupied week: `start_week + duration - 1`.
    pub end_week: u32,
    /// Cosmetic display color, assigned by position in the scheduled output.
    pub color: ChartColor,
}

impl Task {
    pub fn from_input(input: TaskInput, start_week: u32, color: ChartColor) -> Self {
        let end_week = start_week + input.duration - 1;
        Self {
            id: input.id,
            name: input.name,
            duration: input.duration,
            predecessor: input.predecessor,
            start_week,
            end_week,
            color,
        }
    }

    /// Strip the derived fields back down to the user-supplied definition.
    pub fn to_input(&self) -> TaskInput {
        TaskInput {
            id: self.id.clone(),
            name: self.name.clone(),
            duration: self.duration,
            predecessor: self.predecessor.clone(),
        }
    }

    /// Whether the given week falls inside this task's occupied range.
    pub fn occupies_week(&self, week: u32) -> bool {
        week >= self.start_week && week <= self.end_week
    }
}

/// Display color token from the fixed five-entry palette.
///
/// Not semantically meaningful and not stable across rescheduling: the token
/// is a pure function of the task's position in the scheduled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartColor {
    Chart1,
    Chart2,
    Primary,
    Secondary,
    Accent,
}

impl ChartColor {
    /// Color for the task at `position` in the scheduled output
    /// (`position % PALETTE_SIZE`).
    pub fn for_position(position: usize) -> Self {
        match position % PALETTE_SIZE {
            0 => ChartColor::Chart1,
            1 => ChartColor::Chart2,
            2 => ChartColor::Primary,
            3 => ChartColor::Secondary,
            _ => ChartColor::Accent,
        }
    }

    /// CSS class token the chart renderer keys its styling on.
    pub fn css_class(self) -> &'static str {
        match self {
            ChartColor::Chart1 => "bg-chart-1",
            ChartColor::Chart2 => "bg-chart-2",
            ChartColor::Primary => "bg-primary",
            ChartColor::Secondary => "bg-secondary",
            ChartColor::Accent => "bg-accent",
        }
    }
}
