//! Patch command - applies a diff file to a document.

use std::io::Write;

use confluence::diff::{Diff, patch};
use tracing::info;

use super::{read_document, read_json};
use crate::cli::PatchArgs;
use crate::output::{OutputFormat, write_document};

/// Run the patch command
pub fn run(
    args: &PatchArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut document = read_document(&args.document)?;
    let changes: Diff = read_json(&args.diff)?;

    patch(&mut document, &changes)?;
    info!(entries = changes.len(), "applied diff");
    write_document(out, &document, format)
}
