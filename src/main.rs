//! sprint: coordinate parallel sprint workstreams over git worktrees.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sprint_cli::domain::Project;
use sprint_cli::orchestrator::CleanupSummary;
use sprint_cli::services::generate::{self, GenerateOptions};
use sprint_cli::services::resolver::{DefinitionMode, StdinPrompter};
use sprint_cli::{status, AppError, Orchestrator, ProjectConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "sprint")]
#[command(author, version, about = "Sprint workstream orchestrator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root (discovered by walking up to .git when omitted)
    #[arg(long, global = true)]
    project_root: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a backlog file and define workstreams
    Analyze {
        /// Backlog document path
        backlog_file: PathBuf,
        /// Define workstreams through an interactive dialogue
        #[arg(long)]
        interactive: bool,
        /// Declarative definition, e.g. "ui:TASK-001,TASK-002;api:TASK-003"
        #[arg(long)]
        workstreams: Option<String>,
    },
    /// Create branches and worktrees for every workstream
    CreateWorkstreams,
    /// Mark a workstream as in progress
    Resume {
        /// Workstream name
        name: String,
    },
    /// Mark a workstream completed, running quality gates first
    Complete {
        /// Workstream name
        name: String,
        /// Skip the configured quality gates
        #[arg(long)]
        skip_gates: bool,
    },
    /// Show the current sprint status
    Status,
    /// Tear down one workstream, or all of them when no name is given
    Cleanup {
        /// Workstream name (omit to clean everything)
        name: Option<String>,
    },
    /// Tear down every workstream and delete the sprint configuration
    CleanupAll,
    /// Generate a backlog file from project documentation
    Generate {
        /// Comma-separated files or directories to scan for markdown
        #[arg(long)]
        docs: String,
        /// Backlog file to write
        #[arg(long)]
        output: PathBuf,
        /// Sprint name (defaults from the output filename)
        #[arg(long)]
        name: Option<String>,
    },
}

/// Initialize logging with RUST_LOG environment variable support
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    // Generation scans arbitrary documentation paths and does not need a
    // repository context.
    if let Commands::Generate { docs, output, name } = &cli.command {
        let options = GenerateOptions {
            docs: docs
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .collect(),
            output: output.clone(),
            name: name.clone(),
        };
        let summary = generate::generate(&options)?;
        println!("Files analyzed: {}", summary.files_analyzed);
        println!("Tasks extracted: {}", summary.tasks_extracted);
        println!("Workstreams created: {}", summary.workstreams.len());
        for ws in &summary.workstreams {
            println!("  - {}", ws);
        }
        println!("Output: {}", options.output.display());
        println!("\nNext step: sprint analyze {}", options.output.display());
        return Ok(());
    }

    let project_root = match cli.project_root {
        Some(root) => root,
        None => Project::discover(None).ok_or(AppError::NoProjectRoot)?,
    };
    let config = ProjectConfig::load(Some(&project_root))?;
    let project = Project::new(project_root, config);
    let orchestrator = Orchestrator::new(project)?;

    match cli.command {
        Commands::Analyze {
            backlog_file,
            interactive,
            workstreams,
        } => {
            let mut prompter = StdinPrompter;
            let mode = match workstreams.as_deref() {
                Some(spec) => DefinitionMode::Declarative(spec),
                None if interactive => DefinitionMode::Interactive(&mut prompter),
                None => DefinitionMode::None,
            };

            let config = orchestrator.analyze(&backlog_file, mode)?;
            println!();
            println!("{}", status::render_analysis(&config));
            println!("\nNext step: sprint create-workstreams");
        }
        Commands::CreateWorkstreams => {
            orchestrator.create_all()?;
            println!("\nWorkstreams ready. Resume one with: sprint resume <name>");
        }
        Commands::Resume { name } => {
            let ws = orchestrator.resume(&name)?;
            println!("Workstream '{}' is now {}", ws.name, ws.status);
            println!("Worktree: {}", ws.worktree);
            println!("Branch: {}", ws.branch_name());
        }
        Commands::Complete { name, skip_gates } => {
            let ws = orchestrator.complete(&name, skip_gates)?;
            println!("Workstream complete: {}", ws.name);
            println!("Tasks completed:");
            for task in &ws.tasks {
                println!("  - {}", task);
            }
            println!("Branch: {}", ws.branch_name());
        }
        Commands::Status => {
            let config = orchestrator
                .store()
                .load()?
                .ok_or(AppError::StoreMissing)?;
            println!("{}", status::render_status(&config));
        }
        Commands::Cleanup { name: Some(name) } => {
            let report = orchestrator.clean_one(&name)?;
            if !report.worktree.succeeded() || !report.branch.succeeded() {
                println!("Cleanup of '{}' finished with tolerated failures", report.name);
            } else {
                println!("Cleaned up workstream: {}", report.name);
            }
        }
        Commands::Cleanup { name: None } | Commands::CleanupAll => {
            let summary = orchestrator.clean_all()?;
            print_cleanup_summary(&summary);
        }
        Commands::Generate { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn print_cleanup_summary(summary: &CleanupSummary) {
    println!("\nCleanup summary:");
    println!(
        "  Worktrees removed: {}/{}",
        summary.worktrees_removed(),
        summary.total()
    );
    println!(
        "  Branches deleted: {}/{}",
        summary.branches_deleted(),
        summary.total()
    );
    if summary.worktrees_failed() > 0 || summary.branches_failed() > 0 {
        println!(
            "  Failures (tolerated): {} worktrees, {} branches",
            summary.worktrees_failed(),
            summary.branches_failed()
        );
    }
}
