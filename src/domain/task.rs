//! Task entity parsed from the backlog document.

use serde::{Deserialize, Serialize};

/// A single task extracted from the backlog's Tasks region.
///
/// Tasks are authored in the backlog document and are read-only here;
/// the orchestrator tracks state at the workstream level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Stable identifier, e.g. "TASK-001"
    pub id: String,
    /// Free-text description from the checklist line
    pub description: String,
    /// Status from the `Status:` annotation
    pub status: TaskStatus,
    /// Optional phase label from the `Phase:` annotation
    pub phase: Option<String>,
    /// Task ids this task depends on (may be empty)
    pub dependencies: Vec<String>,
}

impl Task {
    /// Create a task with default annotations
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            status: TaskStatus::NotStarted,
            phase: None,
            dependencies: Vec::new(),
        }
    }
}

/// Closed task status set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    NotStarted,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Parse an annotation value tolerantly; unknown values fall back to
    /// `NotStarted` rather than failing the parse.
    pub fn parse(value: &str) -> Self {
        let normalized = value.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "in progress" | "wip" | "started" => Self::InProgress,
            "done" | "complete" | "completed" => Self::Done,
            _ => Self::NotStarted,
        }
    }

    /// Display name matching the backlog annotation vocabulary
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "TODO",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_parse() {
        assert_eq!(TaskStatus::parse("TODO"), TaskStatus::NotStarted);
        assert_eq!(TaskStatus::parse("not started"), TaskStatus::NotStarted);
        assert_eq!(TaskStatus::parse("not-started"), TaskStatus::NotStarted);
        assert_eq!(TaskStatus::parse("In Progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("in_progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("WIP"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("Done"), TaskStatus::Done);
        assert_eq!(TaskStatus::parse("completed"), TaskStatus::Done);
    }

    #[test]
    fn test_task_status_parse_unknown_defaults() {
        assert_eq!(TaskStatus::parse("blocked???"), TaskStatus::NotStarted);
        assert_eq!(TaskStatus::parse(""), TaskStatus::NotStarted);
    }

    #[test]
    fn test_task_new_defaults() {
        let task = Task::new("TASK-001", "Implement login");
        assert_eq!(task.id, "TASK-001");
        assert_eq!(task.status, TaskStatus::NotStarted);
        assert!(task.phase.is_none());
        assert!(task.dependencies.is_empty());
    }
}
