//! # Interactive Shell
//!
//! Line-oriented front end over a [`Workbench`]: one command per line,
//! each followed by a redraw of whatever part of the view it touched.
//!
//! ## Commands
//!
//! - `search [text]`        - filter the catalog (empty text lists everything)
//! - `pick <n>`             - select result `n` of the last search
//! - `add <name> <level>`   - select a skill by name
//! - `remove <name>`        - drop a skill from the selection
//! - `list`                 - show the selection
//! - `close`                - hide the search results
//! - `submit`               - ask the optimizer for a build
//! - `help`, `quit`

use crate::client::Optimizer;
use crate::workbench::{ClickTarget, SearchView, Workbench};
use buildsmith_core::BuildsmithError;
use buildsmith_core::primitives::{CATALOG_UNAVAILABLE, NO_SKILLS_FOUND};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  search [text]       Filter skills (empty text lists everything)
  pick <n>            Select result <n> of the last search
  add <name> <level>  Select a skill by name and level
  remove <name>       Remove a skill from the selection
  list                Show selected skills
  close               Hide search results
  submit              Find a build for the selected skills
  help                Show this help
  quit                Leave the shell";

/// What the shell loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn io_err(e: std::io::Error) -> BuildsmithError {
    BuildsmithError::IoError(e.to_string())
}

/// Run the shell until `quit` or end of input.
///
/// Command errors are printed and the session continues; only I/O errors on
/// `input`/`output` end the loop early.
pub async fn run_shell<O, R, W>(
    workbench: &mut Workbench,
    optimizer: &O,
    input: R,
    output: &mut W,
) -> Result<(), BuildsmithError>
where
    O: Optimizer + Sync,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Type 'help' for commands.").map_err(io_err)?;

    for line in input.lines() {
        let line = line.map_err(io_err)?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        tracing::debug!(command = %line, "shell command");
        if execute_line(workbench, optimizer, line, output).await? == Flow::Quit {
            break;
        }
    }

    Ok(())
}

async fn execute_line<O, W>(
    workbench: &mut Workbench,
    optimizer: &O,
    line: &str,
    output: &mut W,
) -> Result<Flow, BuildsmithError>
where
    O: Optimizer + Sync,
    W: Write,
{
    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map(|(c, r)| (c, r.trim()))
        .unwrap_or((line, ""));

    let outcome = match command {
        "search" => {
            let view = workbench.search(rest).clone();
            write_search(&view, output)
        }
        "pick" => match rest.parse::<usize>() {
            Ok(index) => workbench
                .choose_match(index)
                .and_then(|_| write_selection(workbench, output)),
            Err(_) => Err(BuildsmithError::InvalidSelection(format!(
                "'{rest}' is not a result number"
            ))),
        },
        "add" => parse_name_level(rest)
            .and_then(|(name, level)| workbench.choose_by_name(name, level))
            .and_then(|_| write_selection(workbench, output)),
        "remove" => {
            if !workbench.remove(rest) {
                writeln!(output, "'{rest}' is not selected").map_err(io_err)?;
            }
            write_selection(workbench, output)
        }
        "list" => write_selection(workbench, output),
        "close" => {
            workbench.click(ClickTarget::Elsewhere);
            Ok(())
        }
        "submit" => {
            writeln!(output, "Optimizing...").map_err(io_err)?;
            match workbench.submit(optimizer).await {
                Ok(_) => match &workbench.view().report {
                    Some(report) => writeln!(output, "{report}").map_err(io_err),
                    None => Ok(()),
                },
                Err(e) => Err(e),
            }
        }
        "help" => writeln!(output, "{HELP}").map_err(io_err),
        "quit" | "exit" => return Ok(Flow::Quit),
        other => writeln!(output, "Unknown command '{other}' (try 'help')").map_err(io_err),
    };

    match outcome {
        Ok(()) => Ok(Flow::Continue),
        Err(BuildsmithError::IoError(msg)) => Err(BuildsmithError::IoError(msg)),
        Err(e) => {
            writeln!(output, "Error: {e}").map_err(io_err)?;
            Ok(Flow::Continue)
        }
    }
}

/// Split `"<name words...> <level>"` at its last space.
fn parse_name_level(text: &str) -> Result<(&str, u32), BuildsmithError> {
    let (name, level) = text
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| BuildsmithError::InvalidSelection("usage: add <name> <level>".into()))?;
    let level = level
        .parse::<u32>()
        .ok()
        .filter(|&l| l >= 1)
        .ok_or_else(|| {
            BuildsmithError::InvalidSelection(format!("'{level}' is not a positive level"))
        })?;
    Ok((name.trim(), level))
}

fn write_search<W: Write>(view: &SearchView, output: &mut W) -> Result<(), BuildsmithError> {
    match view {
        SearchView::Matches(entries) => {
            for (i, entry) in entries.iter().enumerate() {
                writeln!(output, "  [{}] {}", i + 1, entry).map_err(io_err)?;
            }
            Ok(())
        }
        SearchView::NoSkillsFound => writeln!(output, "  {NO_SKILLS_FOUND}").map_err(io_err),
        SearchView::CatalogUnavailable => {
            writeln!(output, "  {CATALOG_UNAVAILABLE}").map_err(io_err)
        }
    }
}

fn write_selection<W: Write>(workbench: &Workbench, output: &mut W) -> Result<(), BuildsmithError> {
    let selected = &workbench.view().selected;
    if selected.is_empty() {
        return writeln!(output, "Selected: (none)").map_err(io_err);
    }
    writeln!(output, "Selected:").map_err(io_err)?;
    for line in selected {
        writeln!(output, "  {line}").map_err(io_err)?;
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
