//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::shell::run_shell;
use crate::client::{Optimizer, OptimizerClient};
use crate::config::ClientConfig;
use crate::workbench::{SearchView, Workbench};
use buildsmith_core::BuildsmithError;
use buildsmith_core::primitives::{CATALOG_UNAVAILABLE, NO_SKILLS_FOUND};
use std::io::Write;
use std::path::Path;

/// Resolve configuration and build the optimizer client.
pub fn connect(
    config_file: Option<&Path>,
    url_flag: Option<&str>,
) -> Result<OptimizerClient, BuildsmithError> {
    let config = ClientConfig::load(config_file, url_flag)?;
    tracing::info!(base_url = %config.base_url, "using optimizer");
    OptimizerClient::new(config)
}

/// Parse a `"Name=Level"` argument. The name may itself contain `=`.
pub fn parse_skill_arg(arg: &str) -> Result<(String, u32), BuildsmithError> {
    let (name, level) = arg.rsplit_once('=').ok_or_else(|| {
        BuildsmithError::InvalidSelection(format!("expected Name=Level, got '{arg}'"))
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(BuildsmithError::InvalidSelection(format!(
            "missing skill name in '{arg}'"
        )));
    }

    let level = level
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|&l| l >= 1)
        .ok_or_else(|| {
            BuildsmithError::InvalidSelection(format!(
                "level in '{arg}' must be a positive integer"
            ))
        })?;

    Ok((name.to_string(), level))
}

fn io_err(e: std::io::Error) -> BuildsmithError {
    BuildsmithError::IoError(e.to_string())
}

// =============================================================================
// SKILLS COMMAND
// =============================================================================

/// List catalog entries, optionally filtered.
pub async fn cmd_skills<O, W>(
    optimizer: &O,
    json_mode: bool,
    filter: Option<&str>,
    out: &mut W,
) -> Result<(), BuildsmithError>
where
    O: Optimizer,
    W: Write,
{
    let mut workbench = Workbench::new();
    workbench.load_catalog(optimizer).await?;

    let view = workbench.search(filter.unwrap_or("")).clone();

    if json_mode {
        let entries = match &view {
            SearchView::Matches(entries) => entries.clone(),
            SearchView::NoSkillsFound | SearchView::CatalogUnavailable => Vec::new(),
        };
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| BuildsmithError::IoError(format!("Serializing catalog: {e}")))?;
        return writeln!(out, "{json}").map_err(io_err);
    }

    match view {
        SearchView::Matches(entries) => {
            for entry in entries {
                writeln!(out, "{} (max {})", entry, entry.max_level).map_err(io_err)?;
            }
        }
        SearchView::NoSkillsFound => writeln!(out, "{NO_SKILLS_FOUND}").map_err(io_err)?,
        SearchView::CatalogUnavailable => writeln!(out, "{CATALOG_UNAVAILABLE}").map_err(io_err)?,
    }

    Ok(())
}

// =============================================================================
// OPTIMIZE COMMAND
// =============================================================================

/// Submit the given targets and print the resulting build.
pub async fn cmd_optimize<O, W>(
    optimizer: &O,
    json_mode: bool,
    skills: &[String],
    out: &mut W,
) -> Result<(), BuildsmithError>
where
    O: Optimizer + Sync,
    W: Write,
{
    let mut workbench = Workbench::new();
    workbench.load_catalog(optimizer).await?;

    for arg in skills {
        let (name, level) = parse_skill_arg(arg)?;
        workbench.choose_by_name(&name, level)?;
    }

    tracing::info!(targets = ?workbench.selection().list(), "submitting targets");
    let build = workbench.submit(optimizer).await?;

    if json_mode {
        let json = serde_json::to_string_pretty(&build)
            .map_err(|e| BuildsmithError::IoError(format!("Serializing build: {e}")))?;
        return writeln!(out, "{json}").map_err(io_err);
    }

    if let Some(report) = &workbench.view().report {
        writeln!(out, "{report}").map_err(io_err)?;
    }

    Ok(())
}

// =============================================================================
// SHELL COMMAND
// =============================================================================

/// Run the interactive shell on stdin/stdout.
///
/// A failed catalog load is reported and the shell still starts; searches
/// then show the catalog-unavailable indicator until the program is restarted.
pub async fn cmd_shell<O: Optimizer + Sync>(optimizer: &O) -> Result<(), BuildsmithError> {
    let mut workbench = Workbench::new();
    match workbench.load_catalog(optimizer).await {
        Ok(count) => println!("Loaded {count} skill entries."),
        Err(e) => println!("Error: {e}"),
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_shell(&mut workbench, optimizer, stdin.lock(), &mut stdout).await
}

// =============================================================================
// TESTS
// =============================================================================
