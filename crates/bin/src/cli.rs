//! CLI argument definitions for the Confluence binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Structural diff, patch and three-way merge for JSON documents
#[derive(Parser, Debug)]
#[command(name = "confluence")]
#[command(about = "Confluence: diff, patch and merge JSON documents")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "human", env = "CONFLUENCE_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the changes that turn one document into another
    Diff(DiffArgs),
    /// Apply a diff to a document
    Patch(PatchArgs),
    /// Three-way merge two edits of a common ancestor
    Merge(MergeArgs),
}

/// Arguments for the diff command
#[derive(clap::Args, Debug)]
pub struct DiffArgs {
    /// The original document ("-" for stdin)
    pub original: PathBuf,

    /// The modified document ("-" for stdin)
    pub modified: PathBuf,
}

/// Arguments for the patch command
#[derive(clap::Args, Debug)]
pub struct PatchArgs {
    /// The document to patch ("-" for stdin)
    pub document: PathBuf,

    /// A diff as produced by `confluence diff --format json`
    pub diff: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the merge command
#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// The common ancestor
    pub ancestor: PathBuf,

    /// Our edit of the ancestor; wins conflicts by default
    pub ours: PathBuf,

    /// Their edit of the ancestor
    pub theirs: PathBuf,

    /// Merge concurrent edits to the same string character by character
    #[arg(short, long, env = "CONFLUENCE_TEXT_MERGE")]
    pub text_merge: bool,

    /// Print the resolved diff to apply after ours instead of the merged document
    #[arg(long)]
    pub diff_only: bool,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
