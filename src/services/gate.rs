//! Quality-gate integration for workstream completion.
//!
//! Pass-through executor of user-configured shell commands; the commands
//! themselves are opaque. A failing required gate blocks completion,
//! non-required failures warn and proceed.

use crate::config::GateConfig;
use crate::error::GateError;
use std::path::Path;
use std::process::Command;

/// Result of a full gate run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateReport {
    pub passed: usize,
    /// Non-required gates that failed (warned, not blocking)
    pub warned: Vec<String>,
}

/// Runs the configured gate commands inside a workstream checkout
pub struct GateRunner {
    config: GateConfig,
}

impl GateRunner {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Whether any gate would run at all
    pub fn is_enabled(&self) -> bool {
        self.config.enabled && !self.config.commands.is_empty()
    }

    /// Run every configured gate in `checkout`, in order.
    ///
    /// Stops at the first failing required gate. Disabled configuration or
    /// an empty command list passes trivially.
    pub fn run(&self, checkout: &Path) -> Result<GateReport, GateError> {
        let mut report = GateReport::default();

        if !self.is_enabled() {
            tracing::debug!("Quality gates not configured, skipping");
            return Ok(report);
        }

        for gate in &self.config.commands {
            let name = gate.display_name();
            println!("Running gate: {}", name);

            let status = Command::new("sh")
                .arg("-c")
                .arg(&gate.command)
                .current_dir(checkout)
                .status()
                .map_err(|source| GateError::Spawn {
                    name: name.to_string(),
                    source,
                })?;

            if status.success() {
                println!("Gate passed: {}", name);
                report.passed += 1;
            } else if gate.required {
                return Err(GateError::Failed {
                    name: name.to_string(),
                    command: gate.command.clone(),
                });
            } else {
                tracing::warn!("Non-required gate '{}' failed, proceeding", name);
                report.warned.push(name.to_string());
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GateCommand;
    use tempfile::TempDir;

    fn gate(command: &str, required: bool) -> GateCommand {
        GateCommand {
            name: None,
            command: command.to_string(),
            required,
            description: None,
        }
    }

    #[test]
    fn test_disabled_gates_pass_trivially() {
        let temp = TempDir::new().unwrap();
        let runner = GateRunner::new(GateConfig {
            enabled: false,
            commands: vec![gate("false", true)],
        });
        let report = runner.run(temp.path()).unwrap();
        assert_eq!(report.passed, 0);
    }

    #[test]
    fn test_passing_gates_counted() {
        let temp = TempDir::new().unwrap();
        let runner = GateRunner::new(GateConfig {
            enabled: true,
            commands: vec![gate("true", true), gate("true", false)],
        });
        let report = runner.run(temp.path()).unwrap();
        assert_eq!(report.passed, 2);
        assert!(report.warned.is_empty());
    }

    #[test]
    fn test_required_failure_aborts() {
        let temp = TempDir::new().unwrap();
        let runner = GateRunner::new(GateConfig {
            enabled: true,
            commands: vec![gate("exit 3", true), gate("true", true)],
        });
        assert!(matches!(
            runner.run(temp.path()),
            Err(GateError::Failed { .. })
        ));
    }

    #[test]
    fn test_non_required_failure_warns_and_proceeds() {
        let temp = TempDir::new().unwrap();
        let runner = GateRunner::new(GateConfig {
            enabled: true,
            commands: vec![gate("exit 1", false), gate("true", true)],
        });
        let report = runner.run(temp.path()).unwrap();
        assert_eq!(report.passed, 1);
        assert_eq!(report.warned, vec!["exit 1"]);
    }

    #[test]
    fn test_gates_run_in_checkout_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker"), "here").unwrap();
        let runner = GateRunner::new(GateConfig {
            enabled: true,
            commands: vec![gate("test -f marker", true)],
        });
        assert!(runner.run(temp.path()).is_ok());
    }
}
