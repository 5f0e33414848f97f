//! TickTick export CLI library
//!
//! Holds the argument definitions and the per-project orchestration loop so
//! both can be exercised in tests without a network or a terminal.

use clap::{Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use ticktick_core::{to_rows, write_csv, ExportConfig, Project, Result, Task, TickTickClient};

#[derive(Parser, Debug)]
#[command(name = "ticktick-export")]
#[command(about = "Export TickTick tasks into Todoist-importable CSV files")]
#[command(version)]
pub struct Cli {
    /// TickTick username (prompted for when omitted)
    #[arg(long, short, env = "TICKTICK_USERNAME")]
    pub username: Option<String>,

    /// API endpoint override
    #[arg(long)]
    pub base_url: Option<String>,

    /// Directory the CSV files are written into
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Export the Inbox and every owned project, one CSV file each
    Export,
    /// List the projects an export run would cover
    Projects,
}

/// Outcome counts of an export run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Projects written to a CSV file
    pub exported: usize,
    /// Projects skipped because their task list was empty
    pub skipped_empty: usize,
    /// Projects that failed to fetch or transform
    pub failed: usize,
}

/// Export the Inbox and every owned project
///
/// Projects are processed strictly one at a time, in listing order, with the
/// Inbox pseudo-project first. A failure in one project is logged and
/// counted; the run continues with the next.
///
/// # Errors
/// Returns an error only when the project listing itself cannot be fetched.
pub fn export_all(client: &TickTickClient, config: &ExportConfig) -> Result<ExportSummary> {
    let projects = client.projects()?;

    let mut summary = ExportSummary::default();

    // The Inbox isn't a listed project
    record(
        &mut summary,
        "Inbox",
        client
            .inbox_tasks()
            .and_then(|tasks| export_project("Inbox", &tasks, &config.output_dir)),
    );

    for project in &projects {
        record(
            &mut summary,
            &project.name,
            client
                .project_tasks(&project.id)
                .and_then(|tasks| export_project(&project.name, &tasks, &config.output_dir)),
        );
    }

    Ok(summary)
}

fn record(summary: &mut ExportSummary, name: &str, outcome: Result<Option<PathBuf>>) {
    match outcome {
        Ok(Some(path)) => {
            tracing::debug!(path = %path.display(), "wrote project file");
            summary.exported += 1;
        }
        Ok(None) => {
            tracing::info!(project = name, "no tasks, skipping");
            summary.skipped_empty += 1;
        }
        Err(error) => {
            tracing::error!(project = name, %error, "export failed, continuing");
            summary.failed += 1;
        }
    }
}

/// Build and write one project's CSV file
///
/// The full row set is built before anything touches the filesystem, and the
/// file is written in a single call, so a transformation failure never
/// leaves a partial file behind. An empty task list produces no file and
/// returns `Ok(None)`.
///
/// # Errors
/// Returns an error if row building or the file write fails.
pub fn export_project(name: &str, tasks: &[Task], output_dir: &Path) -> Result<Option<PathBuf>> {
    tracing::info!("Exporting project \"{name}\"");

    let rows = to_rows(tasks)?;
    if rows.is_empty() {
        return Ok(None);
    }

    let mut buffer = Vec::new();
    write_csv(&rows, &mut buffer)?;

    let path = output_dir.join(format!("{}.csv", file_stem(name)));
    fs::write(&path, buffer)?;
    Ok(Some(path))
}

/// Print the project names an export run would cover
///
/// # Errors
/// Returns an error if writing fails.
pub fn print_projects<W: Write>(projects: &[Project], writer: &mut W) -> Result<()> {
    writeln!(writer, "Inbox")?;
    for project in projects {
        writeln!(writer, "{}", project.name)?;
    }
    Ok(())
}

// Project names become file names; path separators would scatter the output
fn file_stem(name: &str) -> String {
    name.replace(['/', '\\'], "-")
}
