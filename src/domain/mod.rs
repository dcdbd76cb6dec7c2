//! Domain entities for sprint-cli.
//!
//! This module contains the core business entities:
//! - Task: a backlog item owned by at most one workstream
//! - Workstream: a disjoint task group with a lifecycle status
//! - SprintConfig: the persisted sprint store document
//! - Project: the repository context for one invocation
//! - Worktree: a registered git worktree

mod project;
mod sprint;
mod task;
mod workstream;
mod worktree;

pub use project::Project;
pub use sprint::SprintConfig;
pub use task::{Task, TaskStatus};
pub use workstream::{slugify, Workstream, WorkstreamStatus};
pub use worktree::Worktree;
