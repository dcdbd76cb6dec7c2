//! Unified error types for sprint-cli.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Gate error: {0}")]
    Gate(#[from] GateError),

    #[error("Backlog file not found: {}", .0.display())]
    BacklogNotFound(PathBuf),

    #[error("Sprint configuration not found. Run `sprint analyze <backlog-file>` first.")]
    StoreMissing,

    #[error("Workstream '{name}' not found. Available workstreams: {}", .available.join(", "))]
    UnknownWorkstream { name: String, available: Vec<String> },

    #[error("Not inside a git project (no .git found). Pass --project-root explicitly.")]
    NoProjectRoot,

    #[error("{0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git/worktree operation errors
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Not a git repository: {}", .0.display())]
    NotARepository(PathBuf),

    #[error("Branch not found: {0}")]
    BranchNotFound(String),

    #[error("Refusing to touch the integration branch '{0}'")]
    ProtectedBranch(String),

    #[error("Refusing to remove the primary checkout at {}", .0.display())]
    PrimaryCheckout(PathBuf),

    #[error("Git operation failed: {0}")]
    Operation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Sprint store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Malformed sprint configuration at {}: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Workstream definition errors
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No valid workstreams could be defined from the given specification")]
    NoValidWorkstreams,

    #[error("No workstreams defined, nothing to persist")]
    NothingDefined,

    #[error(
        "No workstreams defined. Options:\n  \
         1. Interactive mode: sprint analyze <backlog-file> --interactive\n  \
         2. Flag mode: sprint analyze <backlog-file> --workstreams \"ws1:TASK-001,TASK-002;ws2:TASK-003\"\n  \
         3. Edit the backlog file to add a \"## Workstreams\" section and re-run"
    )]
    NoDefinitionMode,

    #[error("IO error during prompt: {0}")]
    Io(#[from] std::io::Error),
}

/// Quality-gate errors
#[derive(Debug, Error)]
pub enum GateError {
    #[error("Required gate '{name}' failed: {command}")]
    Failed { name: String, command: String },

    #[error("Failed to run gate '{name}': {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for Git operations
pub type GitResult<T> = std::result::Result<T, GitError>;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for resolver operations
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;
