//! Workstream lifecycle orchestration.
//!
//! Owns the project context, git back end, sprint store, and gate runner,
//! and drives each workstream through its state machine. Every operation
//! reads the store, applies one transition or teardown, and writes the
//! store back; a missing store fails fast with a directive to run the
//! definition step first.

use crate::domain::{Project, SprintConfig, Workstream, WorkstreamStatus};
use crate::error::{AppError, GitError, Result};
use crate::services::backlog::{self, BacklogDocument};
use crate::services::resolver::{self, DefinitionMode};
use crate::services::{GateRunner, GitService, RemovalOutcome, SprintStore};
use std::fs;
use std::path::Path;

/// Outcome of one worktree teardown attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorktreeOutcome {
    Removed,
    RemovedForced,
    /// Nothing on disk and nothing registered
    AlreadyGone,
    /// Failure tolerated during bulk cleanup
    Failed(String),
}

impl WorktreeOutcome {
    pub fn succeeded(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

/// Outcome of one branch deletion attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchOutcome {
    Deleted,
    /// Branch was not found; it may already be gone
    AlreadyGone,
    Failed(String),
}

impl BranchOutcome {
    pub fn succeeded(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

/// Per-workstream teardown report
#[derive(Debug, Clone)]
pub struct RemovalReport {
    pub name: String,
    pub worktree: WorktreeOutcome,
    pub branch: BranchOutcome,
}

/// Aggregated tallies for bulk cleanup
#[derive(Debug, Clone, Default)]
pub struct CleanupSummary {
    pub reports: Vec<RemovalReport>,
}

impl CleanupSummary {
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn worktrees_removed(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| {
                matches!(
                    r.worktree,
                    WorktreeOutcome::Removed | WorktreeOutcome::RemovedForced
                )
            })
            .count()
    }

    pub fn worktrees_failed(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.worktree, WorktreeOutcome::Failed(_)))
            .count()
    }

    pub fn branches_deleted(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.branch, BranchOutcome::Deleted))
            .count()
    }

    pub fn branches_failed(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.branch, BranchOutcome::Failed(_)))
            .count()
    }
}

/// Drives workstream lifecycles for one project
pub struct Orchestrator {
    project: Project,
    git: GitService,
    store: SprintStore,
    gate: GateRunner,
}

impl Orchestrator {
    pub fn new(project: Project) -> Result<Self> {
        let git = GitService::new(project.root_path.clone())?;
        let store = SprintStore::new(project.store_path.clone());
        let gate = GateRunner::new(project.config.gate.clone());

        Ok(Self {
            project,
            git,
            store,
            gate,
        })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn store(&self) -> &SprintStore {
        &self.store
    }

    fn require_store(&self) -> Result<SprintConfig> {
        Ok(self.store.load()?.ok_or(AppError::StoreMissing)?)
    }

    /// Parse the backlog, resolve the workstream grouping, and persist the
    /// sprint store. When the grouping was derived (not already present in
    /// the document), the document is rewritten with the canonical
    /// Workstreams section.
    pub fn analyze(&self, backlog_path: &Path, mode: DefinitionMode<'_>) -> Result<SprintConfig> {
        if !backlog_path.exists() {
            return Err(AppError::BacklogNotFound(backlog_path.to_path_buf()));
        }

        let content = fs::read_to_string(backlog_path)?;
        let doc = BacklogDocument::parse(&content);
        tracing::info!("Parsed {} tasks from {}", doc.tasks.len(), backlog_path.display());

        let had_existing = !doc.workstreams.is_empty();
        let mut drafts = resolver::resolve(&doc.tasks, doc.workstreams, mode)?;

        if !had_existing {
            resolver::infer_dependencies(&doc.tasks, &mut drafts);
            let updated = backlog::insert_workstreams_section(&content, &drafts);
            fs::write(backlog_path, updated)?;
            println!("Updated backlog file with workstreams: {}", backlog_path.display());
        }

        let sprint_name = backlog_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "sprint".to_string());

        let workstreams = drafts
            .into_iter()
            .map(|draft| {
                let worktree = self.project.worktree_rel_path(&draft.name);
                let mut ws = Workstream::new(draft.name, draft.tasks, worktree);
                ws.dependencies = draft.dependencies;
                ws
            })
            .collect();

        let config = SprintConfig::new(sprint_name, workstreams);
        self.store.save(&config)?;
        println!("Sprint configuration saved to {}", self.store.path().display());

        Ok(config)
    }

    /// Ensure every workstream has its branch and worktree. Idempotent:
    /// existing branches and correctly-bound worktrees are no-op successes.
    /// The first failure aborts the whole operation.
    pub fn create_all(&self) -> Result<()> {
        let config = self.require_store()?;

        let integration = &self.project.integration_branch;
        if !self.git.branch_exists(integration)? {
            return Err(GitError::BranchNotFound(integration.clone()).into());
        }

        for ws in &config.workstreams {
            println!("Creating branch and worktree for {}...", ws.name);
            self.create_workstream(ws)?;
        }

        Ok(())
    }

    fn create_workstream(&self, ws: &Workstream) -> Result<()> {
        let branch = ws.branch_name();

        if self.git.branch_exists(&branch)? {
            println!("  Branch '{}' already exists.", branch);
        } else {
            println!(
                "  Creating branch '{}' from {}...",
                branch, self.project.integration_branch
            );
            self.git
                .create_branch(&branch, &self.project.integration_branch)?;
        }

        let path = self.project.resolve_worktree(&ws.worktree);

        if let Some(existing) = self.git.worktree_at(&path)? {
            if existing.branch == branch {
                println!("  Worktree at {} already exists.", ws.worktree);
                return Ok(());
            }
            // Registered but bound to something else: stale, never merged with
            tracing::warn!(
                "Stale worktree at {} (on '{}'), removing",
                path.display(),
                existing.branch
            );
            if let RemovalOutcome::Failed(reason) = self.git.remove_worktree(&path) {
                return Err(GitError::Operation(format!(
                    "failed to remove stale worktree {}: {}",
                    path.display(),
                    reason
                ))
                .into());
            }
        } else if path.exists() {
            // Leftover directory from an aborted run
            tracing::warn!("Removing unregistered directory at {}", path.display());
            fs::remove_dir_all(&path)?;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.git.add_worktree(&path, &branch)?;
        println!("  Worktree created at {}.", ws.worktree);

        Ok(())
    }

    /// Mark a workstream as being worked on. Resuming a completed
    /// workstream re-opens it and clears the completion timestamp.
    pub fn resume(&self, name: &str) -> Result<Workstream> {
        let mut config = self.require_store()?;
        let available = config.names();
        let Some(ws) = config.workstream_mut(name) else {
            return Err(AppError::UnknownWorkstream {
                name: name.to_string(),
                available,
            });
        };

        ws.status = WorkstreamStatus::InProgress;
        ws.completed_at = None;
        let resumed = ws.clone();

        self.store.save(&config)?;
        Ok(resumed)
    }

    /// Mark a workstream completed, gated by the configured quality checks
    /// unless skipped. A failing required gate aborts with no state change.
    pub fn complete(&self, name: &str, skip_gates: bool) -> Result<Workstream> {
        let mut config = self.require_store()?;
        let available = config.names();
        let Some(ws) = config.workstream_mut(name) else {
            return Err(AppError::UnknownWorkstream {
                name: name.to_string(),
                available,
            });
        };

        if skip_gates {
            println!("Skipping quality gates (--skip-gates)");
        } else if self.gate.is_enabled() {
            let checkout = self.project.resolve_worktree(&ws.worktree);
            if checkout.exists() {
                println!("Running quality gates before marking complete...");
                self.gate.run(&checkout)?;
            } else {
                tracing::warn!(
                    "Checkout {} does not exist, skipping gates",
                    checkout.display()
                );
            }
        }

        ws.status = WorkstreamStatus::Completed;
        ws.completed_at = Some(
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        );
        let completed = ws.clone();

        self.store.save(&config)?;
        Ok(completed)
    }

    /// Tear down one workstream's worktree and branch, keeping its record
    /// in the store at the terminal cleaned status.
    pub fn clean_one(&self, name: &str) -> Result<RemovalReport> {
        let mut config = self.require_store()?;
        let Some(ws) = config.workstream(name).cloned() else {
            return Err(AppError::UnknownWorkstream {
                name: name.to_string(),
                available: config.names(),
            });
        };

        if !ws.status.is_finished() {
            tracing::warn!("Workstream '{}' is {}, cleaning anyway", ws.name, ws.status);
        }

        let report = self.remove_workstream(&ws);

        if let Some(ws) = config.workstream_mut(name) {
            ws.status = WorkstreamStatus::MergedAndCleaned;
        }
        self.store.save(&config)?;

        Ok(report)
    }

    /// Tear down every workstream (best effort), then delete the store.
    pub fn clean_all(&self) -> Result<CleanupSummary> {
        let config = self.require_store()?;

        let incomplete: Vec<&Workstream> = config
            .workstreams
            .iter()
            .filter(|ws| !ws.status.is_finished())
            .collect();
        if !incomplete.is_empty() {
            println!("Warning: some workstreams may not be completed:");
            for ws in &incomplete {
                println!("  - {}: {}", ws.name, ws.status);
            }
            println!("Proceeding with cleanup anyway...");
        }

        let mut summary = CleanupSummary::default();
        for ws in &config.workstreams {
            summary.reports.push(self.remove_workstream(ws));
        }

        self.store.delete()?;
        println!("Removed sprint configuration");

        Ok(summary)
    }

    /// Remove one workstream's worktree and branch. Failures are recorded
    /// in the report rather than propagated; callers decide what is fatal.
    fn remove_workstream(&self, ws: &Workstream) -> RemovalReport {
        let path = self.project.resolve_worktree(&ws.worktree);
        let worktree = self.remove_checkout(&ws.name, &path);
        let branch = self.remove_branch(&ws.branch_name());

        RemovalReport {
            name: ws.name.clone(),
            worktree,
            branch,
        }
    }

    fn remove_checkout(&self, name: &str, path: &Path) -> WorktreeOutcome {
        // The primary checkout is never a removal target, whatever the
        // store claims.
        let root = self
            .project
            .root_path
            .canonicalize()
            .unwrap_or_else(|_| self.project.root_path.clone());
        if path.canonicalize().map(|p| p == root).unwrap_or(false) {
            return WorktreeOutcome::Failed(
                GitError::PrimaryCheckout(path.to_path_buf()).to_string(),
            );
        }

        let registered = match self.git.is_registered_worktree(path) {
            Ok(registered) => registered,
            Err(e) => return WorktreeOutcome::Failed(e.to_string()),
        };

        if registered {
            match self.git.remove_worktree(path) {
                RemovalOutcome::Removed => {
                    println!("  Removed worktree: {}", name);
                    WorktreeOutcome::Removed
                }
                RemovalOutcome::RemovedForced => {
                    println!("  Removed worktree (forced): {}", name);
                    WorktreeOutcome::RemovedForced
                }
                RemovalOutcome::Failed(reason) => {
                    tracing::warn!("Failed to remove worktree {}: {}", name, reason);
                    WorktreeOutcome::Failed(reason)
                }
            }
        } else if path.exists() {
            match fs::remove_dir_all(path) {
                Ok(()) => {
                    println!("  Removed directory: {}", name);
                    WorktreeOutcome::Removed
                }
                Err(e) => {
                    tracing::warn!("Failed to remove directory {}: {}", path.display(), e);
                    WorktreeOutcome::Failed(e.to_string())
                }
            }
        } else {
            println!("  Worktree not found: {} (may already be removed)", name);
            WorktreeOutcome::AlreadyGone
        }
    }

    fn remove_branch(&self, branch: &str) -> BranchOutcome {
        if branch == self.project.integration_branch {
            return BranchOutcome::Failed(
                GitError::ProtectedBranch(branch.to_string()).to_string(),
            );
        }

        // Switch the primary checkout away before deleting its branch
        match self.git.current_branch() {
            Ok(current) if current == branch => {
                if let Err(e) = self.git.switch(&self.project.integration_branch) {
                    return BranchOutcome::Failed(e.to_string());
                }
            }
            Ok(_) => {}
            Err(e) => return BranchOutcome::Failed(e.to_string()),
        }

        match self.git.delete_branch(branch) {
            Ok(true) => {
                println!("  Deleted local branch: {}", branch);
                BranchOutcome::Deleted
            }
            Ok(false) => {
                println!("  Branch not found or already deleted: {}", branch);
                BranchOutcome::AlreadyGone
            }
            Err(e) => {
                tracing::warn!("Failed to delete branch {}: {}", branch, e);
                BranchOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GateCommand, GateConfig, ProjectConfig};
    use std::path::PathBuf;
    use std::process::Command;
    use tempfile::TempDir;

    fn run_git(dir: &Path, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .expect("failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    fn setup_repo() -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().to_path_buf();

        run_git(&path, &["init", "-b", "develop"]);
        run_git(&path, &["config", "user.email", "test@test.com"]);
        run_git(&path, &["config", "user.name", "Test"]);
        std::fs::write(path.join("README.md"), "# Test").unwrap();
        run_git(&path, &["add", "."]);
        run_git(&path, &["commit", "-m", "Initial commit"]);

        (temp, path)
    }

    fn orchestrator_with_config(root: &Path, config: ProjectConfig) -> Orchestrator {
        let project = Project::new(root.to_path_buf(), config);
        Orchestrator::new(project).unwrap()
    }

    fn orchestrator(root: &Path) -> Orchestrator {
        orchestrator_with_config(root, ProjectConfig::default())
    }

    const BACKLOG: &str = "\
# Sprint: test

## Tasks

- [ ] TASK-001: First task
- [ ] TASK-002: Second task
- [ ] TASK-003: Third task
- [ ] TASK-004: Fourth task
- [ ] TASK-005: Fifth task

## Notes
";

    fn write_backlog(root: &Path) -> PathBuf {
        let path = root.join("sprint-1-test.md");
        std::fs::write(&path, BACKLOG).unwrap();
        path
    }

    fn analyze_ui_api(orch: &Orchestrator, root: &Path) -> SprintConfig {
        let backlog = write_backlog(root);
        orch.analyze(
            &backlog,
            DefinitionMode::Declarative("ui:TASK-001,TASK-002;api:TASK-003,TASK-004"),
        )
        .unwrap()
    }

    #[test]
    fn test_analyze_end_to_end() {
        let (_temp, root) = setup_repo();
        let orch = orchestrator(&root);
        let config = analyze_ui_api(&orch, &root);

        assert_eq!(config.sprint, "sprint-1-test");
        assert_eq!(config.names(), vec!["ui", "api"]);
        for ws in &config.workstreams {
            assert_eq!(ws.status, WorkstreamStatus::ReadyToStart);
            assert!(!ws.tasks.contains(&"TASK-005".to_string()));
        }

        // Document was rewritten with the canonical section
        let content = std::fs::read_to_string(root.join("sprint-1-test.md")).unwrap();
        assert!(content.contains("## Workstreams"));
        assert!(content.find("## Workstreams").unwrap() < content.find("## Notes").unwrap());

        // Store exists at the configured path
        assert!(root.join(".sprint/sprint-config.json").exists());
    }

    #[test]
    fn test_analyze_pass_through_is_idempotent() {
        let (_temp, root) = setup_repo();
        let orch = orchestrator(&root);
        let first = analyze_ui_api(&orch, &root);

        // Re-running over the rewritten document, even with a spec, keeps
        // the existing grouping.
        let second = orch
            .analyze(
                &root.join("sprint-1-test.md"),
                DefinitionMode::Declarative("other:TASK-005"),
            )
            .unwrap();

        assert_eq!(second.names(), first.names());
        assert_eq!(second.workstreams[0].tasks, first.workstreams[0].tasks);
    }

    #[test]
    fn test_analyze_missing_backlog() {
        let (_temp, root) = setup_repo();
        let orch = orchestrator(&root);
        let result = orch.analyze(&root.join("missing.md"), DefinitionMode::None);
        assert!(matches!(result, Err(AppError::BacklogNotFound(_))));
    }

    #[test]
    fn test_create_all_requires_store() {
        let (_temp, root) = setup_repo();
        let orch = orchestrator(&root);
        assert!(matches!(orch.create_all(), Err(AppError::StoreMissing)));
    }

    #[test]
    fn test_create_all_is_idempotent() {
        let (_temp, root) = setup_repo();
        let orch = orchestrator(&root);
        analyze_ui_api(&orch, &root);

        orch.create_all().unwrap();
        assert!(root.join(".worktrees/ui").exists());
        assert!(root.join(".worktrees/api").exists());

        // Second run is a no-op success with the same set of worktrees
        orch.create_all().unwrap();
        let git = GitService::new(root.clone()).unwrap();
        let worktrees = git.list_worktrees().unwrap();
        assert_eq!(worktrees.len(), 3); // primary + ui + api
        assert!(git.branch_exists("feature/ui-workstream").unwrap());
        assert!(git.branch_exists("feature/api-workstream").unwrap());
    }

    #[test]
    fn test_create_all_replaces_stale_directory() {
        let (_temp, root) = setup_repo();
        let orch = orchestrator(&root);
        analyze_ui_api(&orch, &root);

        // Unregistered leftover directory at the configured path
        let stale = root.join(".worktrees/ui");
        std::fs::create_dir_all(&stale).unwrap();
        std::fs::write(stale.join("junk.txt"), "stale").unwrap();

        orch.create_all().unwrap();
        assert!(!stale.join("junk.txt").exists());
        let git = GitService::new(root.clone()).unwrap();
        assert!(git.is_registered_worktree(&stale).unwrap());
    }

    #[test]
    fn test_create_all_missing_integration_branch() {
        let (_temp, root) = setup_repo();
        let mut config = ProjectConfig::default();
        config.git.integration_branch = "missing-branch".to_string();
        let orch = orchestrator_with_config(&root, config);
        analyze_ui_api(&orch, &root);

        assert!(matches!(
            orch.create_all(),
            Err(AppError::Git(GitError::BranchNotFound(_)))
        ));
    }

    #[test]
    fn test_resume_sets_in_progress() {
        let (_temp, root) = setup_repo();
        let orch = orchestrator(&root);
        analyze_ui_api(&orch, &root);

        let ws = orch.resume("ui").unwrap();
        assert_eq!(ws.status, WorkstreamStatus::InProgress);

        let stored = orch.store().load().unwrap().unwrap();
        assert_eq!(
            stored.workstream("ui").unwrap().status,
            WorkstreamStatus::InProgress
        );
        // Other workstreams untouched
        assert_eq!(
            stored.workstream("api").unwrap().status,
            WorkstreamStatus::ReadyToStart
        );
    }

    #[test]
    fn test_resume_unknown_lists_names() {
        let (_temp, root) = setup_repo();
        let orch = orchestrator(&root);
        analyze_ui_api(&orch, &root);

        let err = orch.resume("nope").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("ui"));
        assert!(message.contains("api"));
    }

    #[test]
    fn test_complete_records_timestamp() {
        let (_temp, root) = setup_repo();
        let orch = orchestrator(&root);
        analyze_ui_api(&orch, &root);

        let ws = orch.complete("ui", false).unwrap();
        assert_eq!(ws.status, WorkstreamStatus::Completed);
        assert!(ws.completed_at.is_some());

        // Re-opening clears the timestamp
        let reopened = orch.resume("ui").unwrap();
        assert_eq!(reopened.status, WorkstreamStatus::InProgress);
        assert!(reopened.completed_at.is_none());
    }

    #[test]
    fn test_complete_unknown_does_not_create_store() {
        let (_temp, root) = setup_repo();
        let orch = orchestrator(&root);

        assert!(matches!(
            orch.complete("ui", false),
            Err(AppError::StoreMissing)
        ));
        assert!(!orch.store().exists());
    }

    #[test]
    fn test_complete_gate_failure_leaves_state() {
        let (_temp, root) = setup_repo();
        let mut config = ProjectConfig::default();
        config.gate = GateConfig {
            enabled: true,
            commands: vec![GateCommand {
                name: Some("always-fails".to_string()),
                command: "exit 1".to_string(),
                required: true,
                description: None,
            }],
        };
        let orch = orchestrator_with_config(&root, config);
        analyze_ui_api(&orch, &root);
        orch.create_all().unwrap();

        assert!(matches!(
            orch.complete("ui", false),
            Err(AppError::Gate(_))
        ));
        let stored = orch.store().load().unwrap().unwrap();
        assert_eq!(
            stored.workstream("ui").unwrap().status,
            WorkstreamStatus::ReadyToStart
        );

        // Skipping the gates completes anyway
        let ws = orch.complete("ui", true).unwrap();
        assert_eq!(ws.status, WorkstreamStatus::Completed);
    }

    #[test]
    fn test_clean_one_keeps_store_with_terminal_status() {
        let (_temp, root) = setup_repo();
        let orch = orchestrator(&root);
        analyze_ui_api(&orch, &root);
        orch.create_all().unwrap();

        let report = orch.clean_one("ui").unwrap();
        assert_eq!(report.worktree, WorktreeOutcome::Removed);
        assert_eq!(report.branch, BranchOutcome::Deleted);

        assert!(orch.store().exists());
        let stored = orch.store().load().unwrap().unwrap();
        assert_eq!(
            stored.workstream("ui").unwrap().status,
            WorkstreamStatus::MergedAndCleaned
        );
        assert!(!root.join(".worktrees/ui").exists());

        let git = GitService::new(root.clone()).unwrap();
        assert!(!git.branch_exists("feature/ui-workstream").unwrap());
        // The other workstream is untouched
        assert!(root.join(".worktrees/api").exists());
    }

    #[test]
    fn test_clean_one_tolerates_missing_artifacts() {
        let (_temp, root) = setup_repo();
        let orch = orchestrator(&root);
        analyze_ui_api(&orch, &root);
        // No create_all: nothing on disk

        let report = orch.clean_one("ui").unwrap();
        assert_eq!(report.worktree, WorktreeOutcome::AlreadyGone);
        assert_eq!(report.branch, BranchOutcome::AlreadyGone);
    }

    #[test]
    fn test_clean_all_removes_store_and_preserves_primary() {
        let (_temp, root) = setup_repo();
        let orch = orchestrator(&root);
        analyze_ui_api(&orch, &root);
        orch.create_all().unwrap();

        let summary = orch.clean_all().unwrap();
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.worktrees_removed(), 2);
        assert_eq!(summary.branches_deleted(), 2);
        assert_eq!(summary.worktrees_failed(), 0);

        assert!(!orch.store().exists());

        let git = GitService::new(root.clone()).unwrap();
        let worktrees = git.list_worktrees().unwrap();
        assert_eq!(worktrees.len(), 1, "only the primary checkout remains");
        assert!(git.branch_exists("develop").unwrap());
        assert_eq!(git.current_branch().unwrap(), "develop");
        assert!(root.join("README.md").exists());
    }

    #[test]
    fn test_clean_switches_away_from_workstream_branch() {
        let (_temp, root) = setup_repo();
        let orch = orchestrator(&root);
        analyze_ui_api(&orch, &root);
        orch.create_all().unwrap();

        // Remove the ui worktree first so the primary checkout can take
        // the branch over.
        let git = GitService::new(root.clone()).unwrap();
        git.remove_worktree(&root.join(".worktrees/ui"));
        git.switch("feature/ui-workstream").unwrap();

        let report = orch.clean_one("ui").unwrap();
        assert_eq!(report.branch, BranchOutcome::Deleted);
        assert_eq!(git.current_branch().unwrap(), "develop");
    }
}
