//! Source parsers.
//!
//! - `go`: Go source file parser (uses tree-sitter for syntax trees)

pub mod go;
