//! Workstream entity and its lifecycle state machine.

use serde::{Deserialize, Serialize};

/// A named, disjoint group of tasks worked in an isolated branch + worktree.
///
/// Serialized field names follow the sprint store's JSON contract
/// (`fileConflicts`, `completedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workstream {
    /// Slug name, unique within the sprint
    pub name: String,
    /// Lifecycle status, the sole field mutated during orchestration
    pub status: WorkstreamStatus,
    /// Owned task ids (non-empty, disjoint across workstreams)
    pub tasks: Vec<String>,
    /// Checkout path, relative to the project root
    pub worktree: String,
    /// Other workstream names or external markers this one waits on
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Advisory file-path conflict markers
    #[serde(default)]
    pub file_conflicts: Vec<String>,
    /// RFC 3339 completion timestamp, set by the `complete` transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

impl Workstream {
    /// Create a freshly defined workstream at the initial status
    pub fn new(name: impl Into<String>, tasks: Vec<String>, worktree: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: WorkstreamStatus::ReadyToStart,
            tasks,
            worktree: worktree.into(),
            dependencies: Vec::new(),
            file_conflicts: Vec::new(),
            completed_at: None,
        }
    }

    /// Branch name derived from the workstream name.
    ///
    /// Destructive git operations only ever target names produced here,
    /// which keeps the integration branch and unrelated branches out of
    /// reach.
    pub fn branch_name(&self) -> String {
        format!("feature/{}-workstream", self.name)
    }

    /// Whether this workstream has no cross-workstream dependencies
    pub fn is_parallel_safe(&self) -> bool {
        self.dependencies.is_empty()
    }
}

/// Workstream lifecycle status.
///
/// Forward transitions: ready_to_start -> in_progress -> completed ->
/// merged_and_cleaned. Resuming a completed workstream re-opens it to
/// in_progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkstreamStatus {
    #[default]
    ReadyToStart,
    InProgress,
    Completed,
    MergedAndCleaned,
}

impl WorkstreamStatus {
    /// Wire/display form matching the store's JSON values
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadyToStart => "ready_to_start",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::MergedAndCleaned => "merged_and_cleaned",
        }
    }

    /// Whether cleanup without completion deserves a warning
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::MergedAndCleaned)
    }
}

impl std::fmt::Display for WorkstreamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Slugify a human-supplied workstream label: lowercase, internal
/// whitespace collapsed to single hyphens.
pub fn slugify(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
