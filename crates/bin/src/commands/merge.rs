//! Merge command - three-way merges two edits of a common ancestor.

use std::io::Write;

use confluence::{
    diff::{diff, patch},
    doc::deep_clone,
    resolve::{ConflictResolver, FirstWins, TextMerge, resolve_with},
};
use tracing::info;

use super::read_document;
use crate::cli::MergeArgs;
use crate::output::{OutputFormat, write_diff, write_document};

/// Run the merge command
pub fn run(
    args: &MergeArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let ancestor = read_document(&args.ancestor)?;
    let ours = read_document(&args.ours)?;
    let theirs = read_document(&args.theirs)?;

    let mut resolver: Box<dyn ConflictResolver> = if args.text_merge {
        Box::new(TextMerge)
    } else {
        Box::new(FirstWins)
    };

    let ours_diff = diff(&ancestor, &ours);
    let theirs_diff = diff(&ancestor, &theirs);
    let rebased = resolve_with(&ours_diff, &theirs_diff, resolver.as_mut());
    info!(
        ours = ours_diff.len(),
        theirs = theirs_diff.len(),
        rebased = rebased.len(),
        "resolved diffs"
    );

    if args.diff_only {
        return write_diff(out, &rebased, format);
    }

    let mut merged = deep_clone(&ancestor)?;
    patch(&mut merged, &ours_diff)?;
    patch(&mut merged, &rebased)?;
    write_document(out, &merged, format)
}
