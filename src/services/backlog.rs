//! Backlog document parsing and rewriting.
//!
//! The parser is tolerant by design: unmatched lines are ignored and
//! malformed annotations leave fields at their defaults. Validation of the
//! extracted structure belongs to the resolver.

use crate::domain::{slugify, Task, TaskStatus};
use regex::Regex;

/// Placeholder used in backlog annotations for "nothing assigned yet"
pub const UNASSIGNED_PLACEHOLDER: &str = "(to be assigned)";

/// Annotation lookahead window after a checklist line
const ANNOTATION_WINDOW: usize = 4;

/// A workstream as written in the document's Workstreams region, before
/// the resolver turns it into a persisted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkstreamDraft {
    /// Ordinal from the subsection header
    pub number: u32,
    /// Slugified name
    pub name: String,
    /// Task ids from the `**Tasks**:` line
    pub tasks: Vec<String>,
    /// Dependencies from the `**Dependencies**:` line, placeholders removed
    pub dependencies: Vec<String>,
}

/// Parse result: tasks plus the optional workstream grouping
#[derive(Debug, Clone, Default)]
pub struct BacklogDocument {
    pub tasks: Vec<Task>,
    pub workstreams: Vec<WorkstreamDraft>,
}

impl BacklogDocument {
    /// Parse a backlog document.
    pub fn parse(content: &str) -> Self {
        let lines: Vec<&str> = content.lines().collect();
        Self {
            tasks: parse_tasks(&lines),
            workstreams: parse_workstreams(&lines),
        }
    }
}

/// A level-2 heading ends a region; deeper headings are region-internal.
fn is_section_heading(trimmed: &str) -> bool {
    trimmed.starts_with("## ") && !trimmed.starts_with("###")
}

fn parse_tasks(lines: &[&str]) -> Vec<Task> {
    let task_re = Regex::new(r"^-\s+\[\s*[xX ]?\s*\]\s+(TASK-\d+):\s*(.+)$").unwrap();

    let mut tasks = Vec::new();
    let mut in_section = false;

    for (index, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if trimmed == "## Tasks" {
            in_section = true;
            continue;
        }
        if in_section && is_section_heading(trimmed) {
            break;
        }
        if !in_section {
            continue;
        }

        let Some(caps) = task_re.captures(trimmed) else {
            continue;
        };

        let mut task = Task::new(&caps[1], caps[2].trim());
        scan_annotations(lines, index, &mut task);
        tasks.push(task);
    }

    tasks
}

/// Scan the bounded window after a checklist line for key-value
/// annotations, stopping at the next checklist line or heading.
fn scan_annotations(lines: &[&str], task_index: usize, task: &mut Task) {
    let end = (task_index + 1 + ANNOTATION_WINDOW).min(lines.len());
    for line in &lines[task_index + 1..end] {
        let trimmed = line.trim();
        if let Some(value) = trimmed.strip_prefix("- Status:") {
            task.status = TaskStatus::parse(value);
        } else if let Some(value) = trimmed.strip_prefix("- Phase:") {
            let value = value.trim();
            if !value.is_empty() {
                task.phase = Some(value.to_string());
            }
        } else if let Some(value) = trimmed.strip_prefix("- Dependencies:") {
            task.dependencies = parse_dependency_list(value);
        } else if trimmed.starts_with("- [") || trimmed.starts_with("##") {
            break;
        }
    }
}

/// Split a comma-separated dependency value, normalizing the placeholder
/// to an empty list.
fn parse_dependency_list(value: &str) -> Vec<String> {
    let value = value.trim();
    if value.is_empty() || value == UNASSIGNED_PLACEHOLDER {
        return Vec::new();
    }
    split_csv(value)
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_workstreams(lines: &[&str]) -> Vec<WorkstreamDraft> {
    let header_re = Regex::new(r"Workstream\s+(\d+):\s*([^(]+)").unwrap();
    let tasks_re = Regex::new(r"\*\*Tasks\*\*:\s*(.+)").unwrap();
    let deps_re = Regex::new(r"\*\*Dependencies\*\*:\s*(.+)").unwrap();

    let mut workstreams: Vec<WorkstreamDraft> = Vec::new();
    let mut in_section = false;

    for line in lines {
        let trimmed = line.trim();

        if trimmed == "## Workstreams" {
            in_section = true;
            continue;
        }
        if in_section && is_section_heading(trimmed) {
            break;
        }
        if !in_section {
            continue;
        }

        if trimmed.starts_with("### Workstream") || trimmed.contains("**Workstream**") {
            match header_re.captures(trimmed) {
                Some(caps) => {
                    let number = caps[1].parse().unwrap_or(0);
                    workstreams.push(WorkstreamDraft {
                        number,
                        name: slugify(&caps[2]),
                        tasks: Vec::new(),
                        dependencies: Vec::new(),
                    });
                }
                None => {
                    tracing::warn!("Skipping malformed workstream header: {}", trimmed);
                }
            }
        } else if let Some(current) = workstreams.last_mut() {
            if let Some(caps) = tasks_re.captures(trimmed) {
                current.tasks = split_csv(&caps[1]);
            } else if let Some(caps) = deps_re.captures(trimmed) {
                current.dependencies = split_csv(&caps[1])
                    .into_iter()
                    .filter(|d| d != "None" && d != UNASSIGNED_PLACEHOLDER)
                    .collect();
            }
        }
    }

    workstreams
}

/// Render the canonical Workstreams section for a set of drafts.
pub fn render_workstreams_section(workstreams: &[WorkstreamDraft]) -> Vec<String> {
    let mut section = vec![String::new(), "## Workstreams".to_string(), String::new()];

    for (index, ws) in workstreams.iter().enumerate() {
        section.push(format!("### Workstream {}: {}", index + 1, ws.name));
        section.push(String::new());
        section.push(format!("**Tasks**: {}", ws.tasks.join(", ")));
        if ws.dependencies.is_empty() {
            section.push("**Dependencies**: None".to_string());
        } else {
            section.push(format!("**Dependencies**: {}", ws.dependencies.join(", ")));
        }
        section.push(String::new());
    }

    section
}

/// Insert the canonical Workstreams section into document text.
///
/// Placed before a trailing `---` divider or `## Notes` heading when one
/// exists, otherwise appended at the end.
pub fn insert_workstreams_section(content: &str, workstreams: &[WorkstreamDraft]) -> String {
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();

    let insert_index = lines
        .iter()
        .position(|line| {
            let trimmed = line.trim();
            trimmed == "---" || trimmed.starts_with("## Notes")
        })
        .unwrap_or(lines.len());

    let section = render_workstreams_section(workstreams);
    lines.splice(insert_index..insert_index, section);

    let mut result = lines.join("\n");
    if !result.ends_with('\n') {
        result.push('\n');
    }
    result
}
