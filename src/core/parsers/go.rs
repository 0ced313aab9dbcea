use std::{
    fs,
    path::{Path, PathBuf},
};

use tree_sitter::{Node, Parser, Tree};

use crate::core::error::{GenerateError, GenerateResult};

/// Longest snippet of offending source quoted in a syntax error.
const MAX_SNIPPET_CHARS: usize = 24;

/// A Go source file parsed with tree-sitter.
///
/// Owns both the source text and the tree so nodes can be resolved back to
/// text without re-reading the file.
pub struct ParsedGo {
    pub path: PathBuf,
    pub source: String,
    pub tree: Tree,
}

impl ParsedGo {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by `node`.
    pub fn text(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or_default()
    }

    /// Name declared by the file's `package` clause.
    pub fn package_name(&self) -> GenerateResult<&str> {
        let root = self.root();
        let mut cursor = root.walk();
        let clause = root
            .named_children(&mut cursor)
            .find(|child| child.kind() == "package_clause");

        let ident = clause.and_then(|clause| {
            let mut cursor = clause.walk();
            clause
                .named_children(&mut cursor)
                .find(|child| child.kind() == "package_identifier")
        });

        match ident {
            Some(ident) => Ok(self.text(ident)),
            None => Err(GenerateError::Parse {
                file: self.path.clone(),
                line: 1,
                column: 1,
                message: "missing package clause".to_string(),
            }),
        }
    }

    /// Top-level nodes of the given kind, in source order.
    pub fn top_level(&self, kind: &str) -> Vec<Node<'_>> {
        let root = self.root();
        let mut cursor = root.walk();
        root.named_children(&mut cursor)
            .filter(|child| child.kind() == kind)
            .collect()
    }
}

/// Read and parse a Go file from disk.
pub fn parse_go_file(path: &Path) -> GenerateResult<ParsedGo> {
    let code = fs::read_to_string(path).map_err(|source| GenerateError::Read {
        file: path.to_path_buf(),
        source,
    })?;
    parse_go_source(code, path)
}

/// Parse Go source code into a tree.
///
/// tree-sitter recovers from syntax errors instead of failing, so the tree is
/// searched for the first ERROR or MISSING node and that position is reported
/// as a hard parse error.
pub fn parse_go_source(code: String, file_path: &Path) -> GenerateResult<ParsedGo> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| GenerateError::Grammar {
            message: e.to_string(),
        })?;

    let tree = parser
        .parse(&code, None)
        .ok_or_else(|| GenerateError::Parse {
            file: file_path.to_path_buf(),
            line: 1,
            column: 1,
            message: "parser produced no tree".to_string(),
        })?;

    if let Some(node) = first_error(tree.root_node()) {
        let pos = node.start_position();
        let message = if node.is_missing() {
            format!("missing `{}`", node.kind())
        } else {
            let snippet: String = node
                .utf8_text(code.as_bytes())
                .unwrap_or_default()
                .chars()
                .take(MAX_SNIPPET_CHARS)
                .collect();
            format!("unexpected `{}`", snippet.trim())
        };
        return Err(GenerateError::Parse {
            file: file_path.to_path_buf(),
            line: pos.row + 1,
            column: pos.column + 1,
            message,
        });
    }

    Ok(ParsedGo {
        path: file_path.to_path_buf(),
        source: code,
        tree,
    })
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}
