//! Output formatting helpers for human-readable and JSON output.

use std::{fs::File, io::Write, path::Path};

use clap::ValueEnum;
use confluence::{
    diff::{Change, Diff},
    doc::Value,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON documents and one line per change
    Human,
    /// Compact JSON
    Json,
}

/// Open `path` for writing, or stdout when no path is given.
pub fn open_output(path: Option<&Path>) -> std::io::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

/// Write a document.
///
/// Both formats emit JSON so the output can be fed back in; `Human` is
/// indented.
pub fn write_document(
    out: &mut dyn Write,
    doc: &Value,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = doc.to_json()?;
    match format {
        OutputFormat::Human => writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&json)?)?,
    }
    Ok(())
}

/// Write a diff, one line per change in human-readable format.
pub fn write_diff(
    out: &mut dyn Write,
    diff: &Diff,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            if diff.is_empty() {
                writeln!(out, "No changes.")?;
            }
            for change in diff {
                match change {
                    Change::Add { path, value } => writeln!(out, "+ {path}: {value}")?,
                    Change::Remove { path, prev } => writeln!(out, "- {path}: {prev}")?,
                    Change::Replace { path, prev, value } => {
                        writeln!(out, "~ {path}: {prev} -> {value}")?
                    }
                }
            }
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(diff)?)?,
    }
    Ok(())
}
