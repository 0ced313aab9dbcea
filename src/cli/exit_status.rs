use std::process::ExitCode;

use crate::core::{ErrorKind, GenerateError};

/// Exit status for the CLI, following common conventions for linter tools.
///
/// - `Success` (0): registry generated, or up to date under `--check`
/// - `Failure` (1): the inputs or configuration are at fault, or the
///   destination is stale under `--check`
/// - `Error` (2): the generator itself failed (formatter rejected its output,
///   destination could not be written)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed because of its inputs.
    Failure,
    /// Command failed due to an internal error.
    Error,
}

impl ExitStatus {
    /// Classify a failed run. Anything that is not an internal pipeline error
    /// (config problems included) is blamed on the input.
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<GenerateError>().map(GenerateError::kind) {
            Some(ErrorKind::Internal) => Self::Error,
            Some(ErrorKind::Input) | None => Self::Failure,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
