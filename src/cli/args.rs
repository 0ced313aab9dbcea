//! CLI argument definitions using clap.
//!
//! `srgen` takes the Go files to scan and writes one registry file next to
//! the first of them unless `--output` says otherwise.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Go source files to scan for marked interfaces
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Destination file (default: services.go next to the first input)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the generated file instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Fail if the destination is missing or out of date
    #[arg(long, conflicts_with = "dry_run")]
    pub check: bool,

    /// Configuration file (overrides discovery of .srgenrc.json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
