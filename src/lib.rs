//! sprint-cli: sprint workstream orchestration over git worktrees
//!
//! This crate coordinates parallel development workstreams derived from a
//! sprint backlog document, mapping each workstream onto an isolated
//! branch + worktree checkout and tracking its lifecycle.

pub mod config;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod services;
pub mod status;

pub use config::ProjectConfig;
pub use error::{AppError, Result};
pub use orchestrator::Orchestrator;
