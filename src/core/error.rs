//! Error types for the generation pipeline.
//!
//! Every failure is terminal for the invocation. Errors are split into two
//! kinds so callers can tell a problem in the user's Go sources apart from a
//! defect in the generator itself:
//!
//! - [`ErrorKind::Input`]: malformed source, conflicting packages, a qualifier
//!   without a matching import, an unsupported type under the `error` policy
//! - [`ErrorKind::Internal`]: rendered text rejected by the output formatter,
//!   failure writing the destination file

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Who is at fault for a [`GenerateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input Go sources are inconsistent or malformed.
    Input,
    /// The generator produced something it should not have, or could not
    /// persist its output.
    Internal,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no input files")]
    NoInputs,

    #[error("failed to read {}: {source}", file.display())]
    Read {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("syntax error in {}:{line}:{column}: {message}", file.display())]
    Parse {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("multiple packages: {first}, {second} (in {})", file.display())]
    PackageMismatch {
        first: String,
        second: String,
        file: PathBuf,
    },

    #[error("service {name} is declared in both {} and {}", first.display(), second.display())]
    DuplicateService {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error(
        "{}: {service}.{method} references `{qualifier}` but no import provides it",
        file.display()
    )]
    UnresolvedQualifier {
        file: PathBuf,
        service: String,
        method: String,
        qualifier: String,
    },

    #[error(
        "{}: {service}.{method} uses unsupported type `{type_text}`",
        file.display()
    )]
    UnsupportedType {
        file: PathBuf,
        service: String,
        method: String,
        type_text: String,
    },

    #[error("import name `{name}` refers to both \"{first}\" and \"{second}\"")]
    ImportConflict {
        name: String,
        first: String,
        second: String,
    },

    #[error("failed to load the Go grammar (generator bug): {message}")]
    Grammar { message: String },

    #[error("generated source was rejected by the formatter (generator bug): {message}")]
    Format { message: String },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoInputs
            | Self::Read { .. }
            | Self::Parse { .. }
            | Self::PackageMismatch { .. }
            | Self::DuplicateService { .. }
            | Self::UnresolvedQualifier { .. }
            | Self::UnsupportedType { .. }
            | Self::ImportConflict { .. } => ErrorKind::Input,
            Self::Grammar { .. } | Self::Format { .. } | Self::Write { .. } => {
                ErrorKind::Internal
            }
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let err = GenerateError::PackageMismatch {
            first: "a".to_string(),
            second: "b".to_string(),
            file: PathBuf::from("b.go"),
        };
        assert_eq!(err.kind(), ErrorKind::Input);
        assert_eq!(
            GenerateError::format("unexpected `}`").kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_package_mismatch_message_names_both_packages() {
        let err = GenerateError::PackageMismatch {
            first: "foo".to_string(),
            second: "bar".to_string(),
            file: PathBuf::from("x/bar.go"),
        };
        assert_eq!(err.to_string(), "multiple packages: foo, bar (in x/bar.go)");
    }

    #[test]
    fn test_unresolved_qualifier_message() {
        let err = GenerateError::UnresolvedQualifier {
            file: PathBuf::from("svc.go"),
            service: "Clock".to_string(),
            method: "Now".to_string(),
            qualifier: "time".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "svc.go: Clock.Now references `time` but no import provides it"
        );
    }
}
