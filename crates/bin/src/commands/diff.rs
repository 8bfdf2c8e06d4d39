//! Diff command - prints the changes between two documents.

use std::io::Write;

use confluence::diff::diff;
use tracing::info;

use super::read_document;
use crate::cli::DiffArgs;
use crate::output::{OutputFormat, write_diff};

/// Run the diff command
pub fn run(
    args: &DiffArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let original = read_document(&args.original)?;
    let modified = read_document(&args.modified)?;

    let changes = diff(&original, &modified);
    info!(entries = changes.len(), "computed diff");
    write_diff(out, &changes, format)
}
