//! Sprint backlog generation from project documentation.
//!
//! Scans markdown documentation for TODO items and feature lists, groups
//! them into keyword-based workstreams, and renders a backlog document
//! that round-trips through the backlog parser.

use crate::error::{AppError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Inputs for one generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Files or directories to scan (directories are walked for `*.md`)
    pub docs: Vec<PathBuf>,
    /// Backlog file to write
    pub output: PathBuf,
    /// Sprint name; defaults from the output filename
    pub name: Option<String>,
}

/// Summary of a generation run
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub files_analyzed: usize,
    pub tasks_extracted: usize,
    pub workstreams: Vec<String>,
    pub backed_up: bool,
}

/// A task candidate pulled out of documentation
#[derive(Debug, Clone)]
struct Candidate {
    description: String,
    source_file: String,
    section: Option<String>,
}

/// Keyword table mapping candidate descriptions to workstream categories
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "ui-components",
        &[
            "ui", "component", "interface", "design", "layout", "button", "form", "modal",
            "page", "view", "frontend", "style", "css",
        ],
    ),
    (
        "backend-api",
        &[
            "api", "endpoint", "route", "server", "backend", "database", "db", "query",
            "service", "controller",
        ],
    ),
    (
        "authentication",
        &[
            "auth", "login", "signup", "user", "session", "token", "password", "security",
            "permission",
        ],
    ),
    (
        "testing",
        &["test", "testing", "spec", "unit test", "e2e", "integration", "coverage"],
    ),
    (
        "documentation",
        &["doc", "documentation", "readme", "guide", "tutorial", "comment"],
    ),
    (
        "infrastructure",
        &["deploy", "deployment", "ci", "cd", "pipeline", "docker", "config", "environment"],
    ),
    ("data-management", &["data", "migration", "schema", "model", "entity"]),
    (
        "performance",
        &["performance", "optimization", "cache", "speed", "lazy", "bundle"],
    ),
];

/// Generate a backlog document from documentation sources.
pub fn generate(options: &GenerateOptions) -> Result<GenerateSummary> {
    let files = collect_markdown_files(&options.docs)?;
    if files.is_empty() {
        return Err(AppError::InvalidInput(
            "No markdown files found in the given paths".to_string(),
        ));
    }

    let mut candidates = Vec::new();
    let mut source_files = Vec::new();
    for file in &files {
        let content = fs::read_to_string(file)?;
        let extracted = extract_candidates(file, &content);
        if !extracted.is_empty() {
            source_files.push(file.display().to_string());
            candidates.extend(extracted);
        }
    }

    if candidates.is_empty() {
        return Err(AppError::InvalidInput(
            "No tasks extracted. Documentation should contain checkbox TODOs, \
             TODO:/FIXME: lines, or feature/roadmap bullet lists."
                .to_string(),
        ));
    }

    let groups = group_candidates(candidates);
    let sprint_name = options
        .name
        .clone()
        .unwrap_or_else(|| default_sprint_name(&options.output));

    let content = render_backlog(&sprint_name, &groups, &source_files);

    if let Some(parent) = options.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut backed_up = false;
    if options.output.exists() {
        let backup = options.output.with_extension("md.backup");
        fs::copy(&options.output, &backup)?;
        tracing::info!("Backed up existing file to {}", backup.display());
        backed_up = true;
    }

    fs::write(&options.output, content)?;

    Ok(GenerateSummary {
        files_analyzed: files.len(),
        tasks_extracted: groups.iter().map(|(_, tasks)| tasks.len()).sum(),
        workstreams: groups.iter().map(|(name, _)| name.clone()).collect(),
        backed_up,
    })
}

fn collect_markdown_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            tracing::warn!("Path not found, skipping: {}", path.display());
            continue;
        }
        if path.is_file() {
            if path.extension().map(|e| e == "md").unwrap_or(false) {
                files.push(path.clone());
            } else {
                tracing::warn!("Skipping non-markdown file: {}", path.display());
            }
            continue;
        }

        let walker = WalkDir::new(path).into_iter().filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            !(entry.depth() > 0
                && entry.file_type().is_dir()
                && (name.starts_with('.') || name == "node_modules" || name == "target"))
        });

        for entry in walker {
            let entry = entry.map_err(|e| AppError::InvalidInput(e.to_string()))?;
            if entry.file_type().is_file()
                && entry.path().extension().map(|e| e == "md").unwrap_or(false)
            {
                files.push(entry.into_path());
            }
        }
    }

    Ok(files)
}

fn extract_candidates(file: &Path, content: &str) -> Vec<Candidate> {
    let header_re = Regex::new(r"^(#{1,6})\s+(.+)$").unwrap();
    let todo_res = [
        Regex::new(r"^[-*]\s+\[\s*\]\s+(.+)$").unwrap(),
        Regex::new(r"(?i)^[-*]\s+TODO:\s*(.+)$").unwrap(),
        Regex::new(r"(?i)^TODO:\s*(.+)$").unwrap(),
        Regex::new(r"(?i)^FIXME:\s*(.+)$").unwrap(),
    ];
    let feature_section_re = Regex::new(r"(?i)feature|implement|todo|roadmap|upcoming").unwrap();
    let bullet_re = Regex::new(r"^[-*]\s+(.+)$").unwrap();
    let checkbox_re = Regex::new(r"\[[ x]\]").unwrap();

    let source_file = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut candidates: Vec<Candidate> = Vec::new();
    let mut current_section: Option<String> = None;

    for line in content.lines() {
        let trimmed = line.trim();

        if let Some(caps) = header_re.captures(trimmed) {
            current_section = Some(caps[2].to_string());
            continue;
        }

        let mut matched = false;
        for re in &todo_res {
            if let Some(caps) = re.captures(trimmed) {
                candidates.push(Candidate {
                    description: caps[1].trim().to_string(),
                    source_file: source_file.clone(),
                    section: current_section.clone(),
                });
                matched = true;
                break;
            }
        }
        if matched {
            continue;
        }

        // Plain bullets under feature-ish sections
        if let Some(section) = &current_section {
            if feature_section_re.is_match(section) {
                if let Some(caps) = bullet_re.captures(trimmed) {
                    let description = caps[1].trim().to_string();
                    if !checkbox_re.is_match(&description)
                        && description.len() > 10
                        && !candidates.iter().any(|c| c.description == description)
                    {
                        candidates.push(Candidate {
                            description,
                            source_file: source_file.clone(),
                            section: Some(section.clone()),
                        });
                    }
                }
            }
        }
    }

    candidates
}

fn group_candidates(candidates: Vec<Candidate>) -> Vec<(String, Vec<Candidate>)> {
    let mut groups: Vec<(String, Vec<Candidate>)> = Vec::new();
    let mut uncategorized = Vec::new();

    for candidate in candidates {
        let description = candidate.description.to_lowercase();
        let category = CATEGORIES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| description.contains(k)))
            .map(|(name, _)| *name);

        match category {
            Some(name) => match groups.iter_mut().find(|(n, _)| n == name) {
                Some((_, tasks)) => tasks.push(candidate),
                None => groups.push((name.to_string(), vec![candidate])),
            },
            None => uncategorized.push(candidate),
        }
    }

    if !uncategorized.is_empty() {
        groups.push(("general".to_string(), uncategorized));
    }

    groups
}

fn default_sprint_name(output: &Path) -> String {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "sprint".to_string());
    let stripped = Regex::new(r"^sprint-\d+-").unwrap().replace(&stem, "");
    stripped.replace('-', " ")
}

fn task_id(workstream_number: usize, task_number: usize) -> String {
    format!("TASK-{:02}{:02}", workstream_number, task_number)
}

fn render_backlog(
    sprint_name: &str,
    groups: &[(String, Vec<Candidate>)],
    sources: &[String],
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# Sprint: {}", sprint_name));
    lines.push(String::new());
    lines.push(format!("> Generated from documentation: {}", sources.join(", ")));
    lines.push(String::new());
    lines.push("## Overview".to_string());
    lines.push(String::new());
    lines.push("This sprint was automatically generated from project documentation.".to_string());
    lines.push("Review and adjust workstreams, tasks, and dependencies as needed.".to_string());
    lines.push(String::new());

    lines.push("## Tasks".to_string());
    lines.push(String::new());
    for (ws_index, (_, tasks)) in groups.iter().enumerate() {
        for (task_index, task) in tasks.iter().enumerate() {
            let id = task_id(ws_index + 1, task_index + 1);
            lines.push(format!("- [ ] {}: {}", id, task.description));
            lines.push("  - Status: TODO".to_string());
            if let Some(section) = &task.section {
                lines.push(format!("  - Phase: {} ({})", section, task.source_file));
            }
            lines.push("  - Dependencies: (to be assigned)".to_string());
        }
    }
    lines.push(String::new());

    lines.push("## Workstreams".to_string());
    lines.push(String::new());
    for (ws_index, (name, tasks)) in groups.iter().enumerate() {
        let ids: Vec<String> = (1..=tasks.len())
            .map(|n| task_id(ws_index + 1, n))
            .collect();
        lines.push(format!("### Workstream {}: {}", ws_index + 1, name));
        lines.push(String::new());
        lines.push(format!("**Tasks**: {}", ids.join(", ")));
        lines.push("**Dependencies**: None".to_string());
        lines.push(String::new());
    }

    lines.push("---".to_string());
    lines.push(String::new());
    lines.push("## Notes".to_string());
    lines.push(String::new());
    lines.push("- Review task assignments and workstream organization".to_string());
    lines.push("- Update dependencies between workstreams".to_string());
    lines.push(String::new());

    lines.join("\n")
}
