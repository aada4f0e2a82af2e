use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display language for exported labels.
///
/// Purely presentational: switching languages changes the strings the export
/// grid carries, never the computed schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Pt,
    En,
    Es,
}

impl Default for Language {
    fn default() -> Self {
        Language::Pt
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt" => Ok(Language::Pt),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(format!(
                "invalid language: {other} (expected \"pt\", \"en\" or \"es\")"
            )),
        }
    }
}

impl Language {
    /// Single-letter prefix used for week column labels ("S1", "W1", ...).
    pub fn week_prefix(self) -> &'static str {
        match self {
            Language::Pt | Language::Es => "S",
            Language::En => "W",
        }
    }

    /// Header label for the task-name column in the export grid.
    pub fn task_label(self) -> &'static str {
        match self {
            Language::Pt => "Tarefa",
            Language::En => "Task",
            Language::Es => "Tarea",
        }
    }

    /// Header label for the id column in the export grid.
    pub fn id_label(self) -> &'static str {
        "ID"
    }
}

/// Which view the application is currently showing.
///
/// Stored alongside the task collection for convenience; has no effect on
/// scheduling or export contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Gantt,
    Table,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Gantt
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gantt" => Ok(ViewMode::Gantt),
            "table" => Ok(ViewMode::Table),
            other => Err(format!(
                "invalid view mode: {other} (expected \"gantt\" or \"table\")"
            )),
        }
    }
}
