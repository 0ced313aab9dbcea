//! Output formatting and validation of rendered source.
//!
//! A formatter either returns canonical text or fails. Failure here always
//! means the renderer produced bad Go, so every error is reported as
//! [`GenerateError::Format`], never as an input problem.

use std::{
    io::Write,
    path::Path,
    process::{Command, Stdio},
};

use serde::Deserialize;
use tracing::debug;

use crate::core::{
    error::{GenerateError, GenerateResult},
    parsers::go::parse_go_source,
};

/// Canonicalizes rendered Go source.
pub trait SourceFormatter {
    fn format(&self, source: &str) -> GenerateResult<String>;
}

/// Which [`SourceFormatter`] to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    #[default]
    Builtin,
    Gofmt,
}

impl FormatterKind {
    pub fn formatter(self) -> Box<dyn SourceFormatter> {
        match self {
            Self::Builtin => Box::new(BuiltinFormatter),
            Self::Gofmt => Box::new(GofmtFormatter::default()),
        }
    }
}

/// Checks that rendered text parses as Go and normalizes whitespace.
///
/// The printer already lays code out the way gofmt does, so nothing is
/// reflowed here.
pub struct BuiltinFormatter;

impl SourceFormatter for BuiltinFormatter {
    fn format(&self, source: &str) -> GenerateResult<String> {
        parse_go_source(source.to_string(), Path::new("<generated>"))
            .map_err(|e| GenerateError::format(e.to_string()))?;

        let mut out: String = source
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n");
        let trimmed = out.trim_end().len();
        out.truncate(trimmed);
        out.push('\n');
        Ok(out)
    }
}

/// Pipes rendered text through an external `gofmt` binary.
pub struct GofmtFormatter {
    program: String,
}

impl Default for GofmtFormatter {
    fn default() -> Self {
        Self {
            program: "gofmt".to_string(),
        }
    }
}

impl GofmtFormatter {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl SourceFormatter for GofmtFormatter {
    fn format(&self, source: &str) -> GenerateResult<String> {
        debug!(program = %self.program, "formatting with external gofmt");

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| GenerateError::format(format!("failed to run {}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source.as_bytes())
                .map_err(|e| GenerateError::format(format!("failed to write to {}: {}", self.program, e)))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| GenerateError::format(format!("failed to wait for {}: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(GenerateError::format(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| GenerateError::format(format!("{} produced invalid UTF-8: {}", self.program, e)))
    }
}
