//! Project entity representing the repository context.
//!
//! The project root is an explicit parameter threaded through every
//! operation; walking up from the current directory is only the default
//! when no root is given.

use crate::config::ProjectConfig;
use std::path::{Path, PathBuf};

/// Resolved repository context for one invocation
#[derive(Debug, Clone)]
pub struct Project {
    /// Repository root path
    pub root_path: PathBuf,
    /// Sprint store location (absolute path)
    pub store_path: PathBuf,
    /// Directory for workstream worktrees (absolute path)
    pub worktree_directory: PathBuf,
    /// Branch workstream branches are created from
    pub integration_branch: String,
    /// Loaded configuration
    pub config: ProjectConfig,
}

impl Project {
    /// Create a new Project from a root path and configuration
    pub fn new(root_path: PathBuf, config: ProjectConfig) -> Self {
        let store_path = root_path.join(&config.sprint.store_path);
        let worktree_directory = root_path.join(&config.worktree.directory);

        Self {
            root_path,
            store_path,
            worktree_directory,
            integration_branch: config.git.integration_branch.clone(),
            config,
        }
    }

    /// Discover the project root by walking up from the start directory
    pub fn discover(start_path: Option<PathBuf>) -> Option<PathBuf> {
        let start = start_path
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        let mut current = start.as_path();
        loop {
            // .git may be a directory or a file (worktree)
            let git_path = current.join(".git");
            if git_path.exists() {
                return Some(current.to_path_buf());
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => return None,
            }
        }
    }

    /// Checkout path for a workstream name, relative to the project root.
    /// This is the deterministic value recorded in the sprint store.
    pub fn worktree_rel_path(&self, name: &str) -> String {
        let dir = &self.config.worktree.directory;
        format!("{}/{}", dir.display(), name)
    }

    /// Resolve a store-relative worktree path against the project root
    pub fn resolve_worktree(&self, stored: &str) -> PathBuf {
        let path = Path::new(stored);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root_path.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;

    #[test]
    fn test_project_new() {
        let config = ProjectConfig::default();
        let project = Project::new(PathBuf::from("/tmp/test-project"), config);

        assert_eq!(project.root_path, PathBuf::from("/tmp/test-project"));
        assert_eq!(
            project.store_path,
            PathBuf::from("/tmp/test-project/.sprint/sprint-config.json")
        );
        assert_eq!(
            project.worktree_directory,
            PathBuf::from("/tmp/test-project/.worktrees")
        );
        assert_eq!(project.integration_branch, "develop");
    }

    #[test]
    fn test_worktree_rel_path() {
        let project = Project::new(PathBuf::from("/tmp/p"), ProjectConfig::default());
        assert_eq!(project.worktree_rel_path("ui"), ".worktrees/ui");
    }

    #[test]
    fn test_resolve_worktree() {
        let project = Project::new(PathBuf::from("/tmp/p"), ProjectConfig::default());
        assert_eq!(
            project.resolve_worktree(".worktrees/ui"),
            PathBuf::from("/tmp/p/.worktrees/ui")
        );
        assert_eq!(
            project.resolve_worktree("/abs/worktrees/ui"),
            PathBuf::from("/abs/worktrees/ui")
        );
    }

    #[test]
    fn test_discover_finds_git_root() {
        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path().join("repo");
        let nested = root.join("src/deep");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::create_dir(root.join(".git")).unwrap();

        let found = Project::discover(Some(nested)).unwrap();
        assert_eq!(found, root);
    }
}
