//! Workstream definition resolution.
//!
//! Turns an undefined grouping into a validated assignment of tasks to
//! workstreams: an existing grouping passes through untouched, a
//! declarative spec string is parsed and validated, and interactive mode
//! drives a blocking prompt loop. Duplicate assignments resolve
//! first-group-wins.

use crate::domain::{slugify, Task};
use crate::error::{ResolveError, ResolveResult};
use crate::services::backlog::WorkstreamDraft;
use std::collections::HashSet;
use std::io::{self, BufRead, Write};

/// How the caller wants undefined workstreams derived
pub enum DefinitionMode<'a> {
    /// Compact `name:id,id;name:id,id` encoding
    Declarative(&'a str),
    /// Turn-based prompt dialogue
    Interactive(&'a mut dyn Prompter),
    /// Caller offered no way to define workstreams
    None,
}

/// Request/response seam for the interactive dialogue.
///
/// Production uses stdin/stdout; tests script the exchange.
pub trait Prompter {
    /// Show a prompt and read one line of input
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
    /// Show an informational line
    fn say(&mut self, line: &str);
}

/// Stdin/stdout prompter used by the CLI
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn say(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Resolve the workstream grouping for a sprint.
///
/// An existing non-empty grouping is authoritative and returned unchanged,
/// regardless of mode.
pub fn resolve(
    tasks: &[Task],
    existing: Vec<WorkstreamDraft>,
    mode: DefinitionMode<'_>,
) -> ResolveResult<Vec<WorkstreamDraft>> {
    if !existing.is_empty() {
        return Ok(existing);
    }

    match mode {
        DefinitionMode::Declarative(spec) => resolve_from_spec(tasks, spec),
        DefinitionMode::Interactive(prompter) => resolve_interactively(tasks, prompter),
        DefinitionMode::None => Err(ResolveError::NoDefinitionMode),
    }
}

fn resolve_from_spec(tasks: &[Task], spec: &str) -> ResolveResult<Vec<WorkstreamDraft>> {
    let known: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    let mut assigned: HashSet<String> = HashSet::new();
    let mut workstreams = Vec::new();

    for group in spec.split(';').filter(|g| !g.trim().is_empty()) {
        let Some((name, ids)) = group.split_once(':') else {
            tracing::warn!("Skipping malformed workstream group (expected name:ids): {}", group);
            continue;
        };

        let outcome = validate_ids(ids, &known, &mut assigned);
        report_dropped(name, &outcome);

        if outcome.valid.is_empty() {
            tracing::warn!("Workstream '{}' has no valid tasks, dropping it", name.trim());
            continue;
        }

        workstreams.push(WorkstreamDraft {
            number: workstreams.len() as u32 + 1,
            name: slugify(name),
            tasks: outcome.valid,
            dependencies: Vec::new(),
        });
    }

    if workstreams.is_empty() {
        return Err(ResolveError::NoValidWorkstreams);
    }
    Ok(workstreams)
}

fn resolve_interactively(
    tasks: &[Task],
    prompter: &mut dyn Prompter,
) -> ResolveResult<Vec<WorkstreamDraft>> {
    let known: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    let mut assigned: HashSet<String> = HashSet::new();
    let mut workstreams: Vec<WorkstreamDraft> = Vec::new();

    prompter.say("Available tasks:");
    for (index, task) in tasks.iter().enumerate() {
        prompter.say(&format!(
            "  {}. {}: {}",
            index + 1,
            task.id,
            truncate(&task.description, 60)
        ));
    }

    loop {
        let number = workstreams.len() as u32 + 1;
        let name = prompter.ask(&format!(
            "Workstream {} name (or 'done' to finish): ",
            number
        ))?;

        if name.trim().eq_ignore_ascii_case("done") {
            if workstreams.is_empty() {
                return Err(ResolveError::NothingDefined);
            }
            return Ok(workstreams);
        }

        if name.trim().is_empty() {
            prompter.say("Name cannot be empty");
            continue;
        }

        let ids = prompter.ask(&format!(
            "Task IDs for \"{}\" (comma-separated, e.g., TASK-001,TASK-002): ",
            name.trim()
        ))?;

        let outcome = validate_ids(&ids, &known, &mut assigned);
        if !outcome.invalid.is_empty() {
            prompter.say(&format!(
                "Invalid task IDs ignored: {}",
                outcome.invalid.join(", ")
            ));
        }
        if !outcome.duplicates.is_empty() {
            prompter.say(&format!(
                "Already assigned, ignored: {}",
                outcome.duplicates.join(", ")
            ));
        }

        if outcome.valid.is_empty() {
            // Rejected ids were never recorded as assigned, so retrying the
            // same workstream is safe.
            prompter.say("No valid task IDs found. Please try again.");
            continue;
        }

        prompter.say(&format!(
            "Workstream \"{}\" created with {} tasks",
            name.trim(),
            outcome.valid.len()
        ));

        workstreams.push(WorkstreamDraft {
            number,
            name: slugify(&name),
            tasks: outcome.valid,
            dependencies: Vec::new(),
        });

        let remaining: Vec<&str> = tasks
            .iter()
            .map(|t| t.id.as_str())
            .filter(|id| !assigned.contains(*id))
            .collect();
        if !remaining.is_empty() {
            prompter.say(&format!("Remaining unassigned tasks: {}", remaining.len()));
            for id in remaining {
                prompter.say(&format!("  - {}", id));
            }
        }
    }
}

struct ValidationOutcome {
    valid: Vec<String>,
    invalid: Vec<String>,
    duplicates: Vec<String>,
}

/// Validate a comma-separated id list against the known task set and the
/// ids already claimed by earlier groups (first group wins).
fn validate_ids(
    ids: &str,
    known: &HashSet<&str>,
    assigned: &mut HashSet<String>,
) -> ValidationOutcome {
    let mut outcome = ValidationOutcome {
        valid: Vec::new(),
        invalid: Vec::new(),
        duplicates: Vec::new(),
    };

    for id in ids.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !known.contains(id) {
            outcome.invalid.push(id.to_string());
        } else if !assigned.insert(id.to_string()) {
            outcome.duplicates.push(id.to_string());
        } else {
            outcome.valid.push(id.to_string());
        }
    }

    outcome
}

fn report_dropped(name: &str, outcome: &ValidationOutcome) {
    if !outcome.invalid.is_empty() {
        tracing::warn!(
            "Workstream '{}': unknown task ids ignored: {}",
            name.trim(),
            outcome.invalid.join(", ")
        );
    }
    if !outcome.duplicates.is_empty() {
        tracing::warn!(
            "Workstream '{}': already-assigned task ids ignored: {}",
            name.trim(),
            outcome.duplicates.join(", ")
        );
    }
}

/// Record cross-workstream dependencies: each member task's dependency ids
/// that live outside the workstream, at the workstream level.
pub fn infer_dependencies(tasks: &[Task], workstreams: &mut [WorkstreamDraft]) {
    for ws in workstreams.iter_mut() {
        let members: HashSet<&str> = ws.tasks.iter().map(String::as_str).collect();
        let mut deps: Vec<String> = Vec::new();

        for task_id in &ws.tasks {
            let Some(task) = tasks.iter().find(|t| &t.id == task_id) else {
                continue;
            };
            for dep in &task.dependencies {
                if !members.contains(dep.as_str()) && !deps.contains(dep) {
                    deps.push(dep.clone());
                }
            }
        }

        ws.dependencies = deps;
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}
