//! Registered git worktree record.

use std::path::PathBuf;

/// A worktree as reported by `git worktree list --porcelain`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worktree {
    /// Full path to the worktree directory
    pub path: PathBuf,
    /// Checked-out branch name ("(detached)" when HEAD is detached)
    pub branch: String,
    /// The primary repository checkout, never removed by cleanup
    pub is_main: bool,
}

impl Worktree {
    pub fn new(path: PathBuf, branch: String, is_main: bool) -> Self {
        Self {
            path,
            branch,
            is_main,
        }
    }
}
