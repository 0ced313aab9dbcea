//! Report formatting and printing utilities.
//!
//! Separate from core logic so the generator can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn services_label(count: usize) -> String {
    format!(
        "{} {}",
        count,
        if count == 1 { "service" } else { "services" }
    )
}

/// Print the line reporting a written registry.
pub fn print_written(services: usize, path: &Path) {
    print_written_to(services, path, &mut io::stdout().lock());
}

pub fn print_written_to<W: Write>(services: usize, path: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated {} in {}",
            services_label(services),
            path.display()
        )
        .green()
    );
}

/// Print generated content for `--dry-run`.
pub fn print_dry_run(content: &str) {
    print_dry_run_to(content, &mut io::stdout().lock());
}

pub fn print_dry_run_to<W: Write>(content: &str, writer: &mut W) {
    let _ = write!(writer, "{}", content);
}

/// Print the `--check` verdict for the destination file.
pub fn print_check(up_to_date: bool, services: usize, path: &Path) {
    print_check_to(up_to_date, services, path, &mut io::stdout().lock());
}

pub fn print_check_to<W: Write>(up_to_date: bool, services: usize, path: &Path, writer: &mut W) {
    let msg = if up_to_date {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} is up to date ({})",
                path.display(),
                services_label(services)
            )
            .green()
        )
    } else {
        format!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} is out of date, run srgen to regenerate", path.display()).red()
        )
    };
    let _ = writeln!(writer, "{}", msg);
}

/// Print a fatal error to stderr.
pub fn print_error(err: &anyhow::Error) {
    print_error_to(err, &mut io::stderr().lock());
}

pub fn print_error_to<W: Write>(err: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(writer, "{} {:#}", "error:".red().bold(), err);
}
