//! Configuration management for sprint-cli.
//!
//! Supports layered configuration: defaults → project → user → env

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub sprint: SprintConfigSection,
    #[serde(default)]
    pub worktree: WorktreeConfig,
    #[serde(default)]
    pub git: GitConfig,
    #[serde(default)]
    pub gate: GateConfig,
}

impl ProjectConfig {
    /// Load configuration with hierarchy: defaults → project → user → env
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. Project-specific config (.sprint.toml in project root)
        if let Some(root) = project_root {
            let project_config = root.join(".sprint.toml");
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }
        }

        // 3. User config (~/.config/sprint-cli/config.toml)
        if let Some(config_dir) = directories::ProjectDirs::from("com", "sprint-cli", "sprint-cli")
        {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 4. Environment variables (SPRINT__*)
        builder = builder.add_source(
            Environment::with_prefix("SPRINT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration with default settings only
    pub fn load_defaults() -> Self {
        Self::default()
    }
}

/// Sprint store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintConfigSection {
    /// Store file location (relative to project root)
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

impl Default for SprintConfigSection {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from(".sprint/sprint-config.json")
}

/// Worktree-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorktreeConfig {
    /// Directory where worktrees are created (relative to project root)
    #[serde(default = "default_worktree_directory")]
    pub directory: PathBuf,
}

impl Default for WorktreeConfig {
    fn default() -> Self {
        Self {
            directory: default_worktree_directory(),
        }
    }
}

fn default_worktree_directory() -> PathBuf {
    PathBuf::from(".worktrees")
}

/// Git-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitConfig {
    /// Branch that workstream branches are created from
    #[serde(default = "default_integration_branch")]
    pub integration_branch: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            integration_branch: default_integration_branch(),
        }
    }
}

fn default_integration_branch() -> String {
    "develop".to_string()
}

/// Quality-gate configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateConfig {
    /// Whether gates run before `sprint complete` marks a workstream done
    #[serde(default)]
    pub enabled: bool,
    /// Commands executed in the workstream checkout, in order
    #[serde(default)]
    pub commands: Vec<GateCommand>,
}

/// A single quality-gate command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateCommand {
    /// Display name (falls back to the command string)
    #[serde(default)]
    pub name: Option<String>,
    /// Shell command to run
    pub command: String,
    /// A failing required gate aborts completion; non-required gates warn
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl GateCommand {
    /// Name shown in progress output
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.command)
    }
}

fn default_required() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProjectConfig::default();
        assert_eq!(
            config.sprint.store_path,
            PathBuf::from(".sprint/sprint-config.json")
        );
        assert_eq!(config.worktree.directory, PathBuf::from(".worktrees"));
        assert_eq!(config.git.integration_branch, "develop");
        assert!(!config.gate.enabled);
        assert!(config.gate.commands.is_empty());
    }

    #[test]
    fn test_gate_command_display_name() {
        let named = GateCommand {
            name: Some("lint".to_string()),
            command: "cargo clippy".to_string(),
            required: true,
            description: None,
        };
        assert_eq!(named.display_name(), "lint");

        let unnamed = GateCommand {
            name: None,
            command: "cargo test".to_string(),
            required: false,
            description: None,
        };
        assert_eq!(unnamed.display_name(), "cargo test");
    }

    #[test]
    fn test_project_config_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(".sprint.toml"),
            "[git]\nintegration_branch = \"main\"\n",
        )
        .unwrap();

        let config = ProjectConfig::load(Some(temp.path())).unwrap();
        assert_eq!(config.git.integration_branch, "main");
        // Untouched sections keep their defaults
        assert_eq!(config.worktree.directory, PathBuf::from(".worktrees"));
    }
}
