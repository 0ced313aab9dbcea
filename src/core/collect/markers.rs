//! Marker scanning for type declaration groups.
//!
//! A group opts into generation when the doc comment directly above its
//! `type` keyword contains a line starting with the marker token:
//!
//! ```go
//! // +srgen
//! type (
//!     FooService interface { Do(x int) error }
//!     Plain int // ignored: not an interface
//! )
//! ```
//!
//! **Important**: a blank line between the comment and the declaration breaks
//! the doc comment, exactly like Go's own doc comment rules.

use tracing::{debug, warn};
use tree_sitter::Node;

use crate::core::parsers::go::ParsedGo;

/// Marker recognized when no configuration overrides it.
pub const DEFAULT_MARKER: &str = "+srgen";

/// An interface-shaped type spec from a marked declaration group.
#[derive(Debug, Clone, Copy)]
pub struct MarkedInterface<'t> {
    pub name: &'t str,
    /// The `interface_type` node.
    pub body: Node<'t>,
}

/// Finds marked, interface-shaped declarations in a parsed file.
pub struct MarkerScanner<'m> {
    marker: &'m str,
}

impl<'m> MarkerScanner<'m> {
    pub fn new(marker: &'m str) -> Self {
        Self { marker }
    }

    /// Scan all top-level `type` declarations of a file.
    ///
    /// Groups without the marker are skipped, as are non-interface specs that
    /// share a marked group. Neither is an error.
    pub fn scan<'t>(&self, parsed: &'t ParsedGo) -> Vec<MarkedInterface<'t>> {
        let mut found = Vec::new();

        for decl in parsed.top_level("type_declaration") {
            let marked = doc_comments(decl)
                .into_iter()
                .any(|comment| self.matches(parsed.text(comment)));
            if !marked {
                continue;
            }

            let mut cursor = decl.walk();
            let specs: Vec<_> = decl
                .named_children(&mut cursor)
                .filter(|spec| matches!(spec.kind(), "type_spec" | "type_alias"))
                .collect();

            for spec in specs {
                let (Some(name), Some(body)) = (
                    spec.child_by_field_name("name"),
                    spec.child_by_field_name("type"),
                ) else {
                    continue;
                };
                if body.kind() != "interface_type" {
                    continue;
                }

                let name = parsed.text(name);
                if spec.child_by_field_name("type_parameters").is_some() {
                    warn!(
                        file = %parsed.path.display(),
                        line = spec.start_position().row + 1,
                        "skipping generic interface {}: a registry field needs a concrete type",
                        name
                    );
                    continue;
                }

                debug!(file = %parsed.path.display(), "found marked interface {}", name);
                found.push(MarkedInterface { name, body });
            }
        }

        found
    }

    /// Whether a raw comment (including its `//` or `/* */` syntax) carries
    /// the marker on any of its lines.
    pub fn matches(&self, comment: &str) -> bool {
        comment_lines(comment)
            .iter()
            .any(|line| line.starts_with(self.marker))
    }
}

/// Comment lines with comment syntax and surrounding whitespace removed.
fn comment_lines(text: &str) -> Vec<&str> {
    if let Some(body) = text.strip_prefix("//") {
        return vec![body.trim_start_matches('/').trim()];
    }
    if let Some(body) = text.strip_prefix("/*") {
        let body = body.strip_suffix("*/").unwrap_or(body);
        return body
            .lines()
            .map(|line| line.trim().trim_start_matches('*').trim())
            .collect();
    }
    vec![text.trim()]
}

/// The comment group immediately preceding `decl`, in source order.
///
/// Walks backwards over adjacent comments. The chain stops at a blank line,
/// at any non-comment node, or before a comment that trails code on the
/// same line.
fn doc_comments(decl: Node<'_>) -> Vec<Node<'_>> {
    let mut docs = Vec::new();
    let mut next_row = decl.start_position().row;
    let mut current = decl.prev_named_sibling();

    while let Some(node) = current {
        if node.kind() != "comment" || node.end_position().row + 1 < next_row {
            break;
        }
        docs.push(node);
        next_row = node.start_position().row;
        current = node.prev_named_sibling();
    }

    if let Some(first) = docs.last()
        && let Some(code) = first.prev_named_sibling()
        && code.kind() != "comment"
        && code.end_position().row == first.start_position().row
    {
        docs.pop();
    }

    docs.reverse();
    docs
}
