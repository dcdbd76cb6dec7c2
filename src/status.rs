//! Read-only sprint status reporting.

use crate::domain::SprintConfig;

/// Render the full sprint status for human consumption.
pub fn render_status(config: &SprintConfig) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Sprint: {}", config.sprint));
    lines.push(format!("Workstreams: {}", config.workstreams.len()));
    lines.push(String::new());

    for ws in &config.workstreams {
        lines.push(format!("{} [{}]", ws.name, ws.status));
        lines.push(format!("  Tasks: {}", ws.tasks.join(", ")));
        lines.push(format!(
            "  Dependencies: {}",
            if ws.dependencies.is_empty() {
                "None".to_string()
            } else {
                ws.dependencies.join(", ")
            }
        ));
        lines.push(format!(
            "  File conflicts: {}",
            if ws.file_conflicts.is_empty() {
                "None detected".to_string()
            } else {
                ws.file_conflicts.join(", ")
            }
        ));
        lines.push(format!("  Worktree: {}", ws.worktree));
        if let Some(completed_at) = &ws.completed_at {
            lines.push(format!("  Completed: {}", completed_at));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render the post-analysis summary shown after workstream definition.
pub fn render_analysis(config: &SprintConfig) -> String {
    let mut lines = Vec::new();

    for (index, ws) in config.workstreams.iter().enumerate() {
        let mode = if ws.is_parallel_safe() {
            "parallel safe"
        } else {
            "sequential"
        };
        lines.push(format!(
            "WORKSTREAM {}: {} ({} tasks - {})",
            index + 1,
            ws.name,
            ws.tasks.len(),
            mode
        ));
        lines.push(format!("  Tasks: {}", ws.tasks.join(", ")));
        if !ws.dependencies.is_empty() {
            lines.push(format!("  Dependencies: {}", ws.dependencies.join(", ")));
        }
        lines.push(format!("  Worktree: {}", ws.worktree));
    }

    lines.join("\n")
}
