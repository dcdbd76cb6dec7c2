//! Git service for branch and worktree operations.
//!
//! Shells out to the git CLI; all operations are blocking. Failures carry
//! the trimmed stderr of the underlying command. The only retry anywhere
//! is the single graceful -> forced fallback on worktree removal.

use crate::domain::Worktree;
use crate::error::{GitError, GitResult};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Outcome of a worktree removal attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Graceful `git worktree remove` succeeded
    Removed,
    /// Graceful removal failed, `--force` succeeded
    RemovedForced,
    /// Both attempts failed
    Failed(String),
}

/// Git service bound to one repository root
pub struct GitService {
    repo_root: PathBuf,
}

impl GitService {
    /// Create a new GitService for a repository
    pub fn new(repo_root: PathBuf) -> GitResult<Self> {
        if !repo_root.join(".git").exists() {
            return Err(GitError::NotARepository(repo_root));
        }
        Ok(Self { repo_root })
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    fn run(&self, args: &[&str]) -> GitResult<Output> {
        Command::new("git")
            .args(args)
            .current_dir(&self.repo_root)
            .output()
            .map_err(|e| GitError::Operation(format!("failed to run git {:?}: {}", args, e)))
    }

    fn run_checked(&self, args: &[&str]) -> GitResult<Output> {
        let output = self.run(args)?;
        if output.status.success() {
            Ok(output)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(GitError::Operation(format!(
                "git {} failed: {}",
                args.join(" "),
                stderr.trim()
            )))
        }
    }

    /// Check if a local branch exists
    pub fn branch_exists(&self, branch: &str) -> GitResult<bool> {
        let output = self.run(&[
            "show-ref",
            "--verify",
            "--quiet",
            &format!("refs/heads/{}", branch),
        ])?;
        Ok(output.status.success())
    }

    /// Create a branch from a start point without touching the checkout
    pub fn create_branch(&self, branch: &str, start_point: &str) -> GitResult<()> {
        self.run_checked(&["branch", branch, start_point])?;
        Ok(())
    }

    /// Delete a local branch. Returns `Ok(false)` when the branch was
    /// already gone, which callers tolerate.
    pub fn delete_branch(&self, branch: &str) -> GitResult<bool> {
        let output = self.run(&["branch", "-D", branch])?;
        if output.status.success() {
            return Ok(true);
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        if stderr.contains("not found") {
            Ok(false)
        } else {
            Err(GitError::Operation(format!(
                "git branch -D {} failed: {}",
                branch,
                stderr.trim()
            )))
        }
    }

    /// Get the branch checked out in the primary repository
    pub fn current_branch(&self) -> GitResult<String> {
        let output = self.run_checked(&["branch", "--show-current"])?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Switch the primary checkout to another branch
    pub fn switch(&self, branch: &str) -> GitResult<()> {
        self.run_checked(&["switch", branch])?;
        Ok(())
    }

    /// List all registered worktrees (porcelain parse)
    pub fn list_worktrees(&self) -> GitResult<Vec<Worktree>> {
        let output = self.run_checked(&["worktree", "list", "--porcelain"])?;
        let stdout = String::from_utf8_lossy(&output.stdout);

        let mut worktrees: Vec<Worktree> = Vec::new();
        let mut current_path: Option<PathBuf> = None;
        let mut current_branch: Option<String> = None;

        for line in stdout.lines() {
            if let Some(path) = line.strip_prefix("worktree ") {
                // Save the previous entry before starting a new one
                if let Some(prev) = current_path.take() {
                    let branch = take_branch(&mut current_branch);
                    let is_main = worktrees.is_empty();
                    worktrees.push(Worktree::new(prev, branch, is_main));
                }
                current_path = Some(PathBuf::from(path.trim()));
            } else if let Some(branch_ref) = line.strip_prefix("branch refs/heads/") {
                current_branch = Some(branch_ref.to_string());
            } else if line == "detached" {
                current_branch = Some("(detached)".to_string());
            }
        }

        // Don't forget the last entry
        if let Some(prev) = current_path.take() {
            let branch = take_branch(&mut current_branch);
            let is_main = worktrees.is_empty();
            worktrees.push(Worktree::new(prev, branch, is_main));
        }

        Ok(worktrees)
    }

    /// Check whether a path is a registered worktree of this repository
    pub fn is_registered_worktree(&self, path: &Path) -> GitResult<bool> {
        Ok(self.worktree_at(path)?.is_some())
    }

    /// The registered worktree at a path, if any
    pub fn worktree_at(&self, path: &Path) -> GitResult<Option<Worktree>> {
        let target = canonical_or_self(path);
        Ok(self
            .list_worktrees()?
            .into_iter()
            .find(|wt| canonical_or_self(&wt.path) == target))
    }

    /// Worktrees (other than the primary checkout) that have a branch
    /// checked out
    pub fn worktrees_on_branch(&self, branch: &str) -> GitResult<Vec<Worktree>> {
        Ok(self
            .list_worktrees()?
            .into_iter()
            .filter(|wt| !wt.is_main && wt.branch == branch)
            .collect())
    }

    /// Register a new worktree at `path` for an existing branch
    pub fn add_worktree(&self, path: &Path, branch: &str) -> GitResult<()> {
        let path_str = path.to_string_lossy();
        self.run_checked(&["worktree", "add", path_str.as_ref(), branch])?;
        Ok(())
    }

    /// Remove a registered worktree: graceful first, `--force` on failure.
    pub fn remove_worktree(&self, path: &Path) -> RemovalOutcome {
        let path_str = path.to_string_lossy().to_string();

        match self.run(&["worktree", "remove", &path_str]) {
            Ok(output) if output.status.success() => RemovalOutcome::Removed,
            Ok(_) => match self.run(&["worktree", "remove", "--force", &path_str]) {
                Ok(output) if output.status.success() => RemovalOutcome::RemovedForced,
                Ok(output) => {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    RemovalOutcome::Failed(stderr.trim().to_string())
                }
                Err(e) => RemovalOutcome::Failed(e.to_string()),
            },
            Err(e) => RemovalOutcome::Failed(e.to_string()),
        }
    }
}

fn take_branch(branch: &mut Option<String>) -> String {
    branch.take().unwrap_or_else(|| "(detached)".to_string())
}

fn canonical_or_self(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
