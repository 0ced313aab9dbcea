//! Import collection and usage tracking.
//!
//! Each input file's imports are recorded up front. While signatures are
//! extracted, every `qualifier.Name` reference flips the `used` flag of the
//! imports whose effective name equals `qualifier`. Only used imports make it
//! into the generated file.

use tracing::debug;
use tree_sitter::Node;

use crate::core::parsers::go::ParsedGo;

/// One declared import.
///
/// Identity is the `(alias, path)` pair; `used` is bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRef {
    pub alias: Option<String>,
    /// Import path without quotes.
    pub path: String,
    pub used: bool,
}

impl ImportRef {
    pub fn new(alias: Option<&str>, path: &str) -> Self {
        Self {
            alias: alias.map(str::to_string),
            path: path.to_string(),
            used: false,
        }
    }

    pub fn key(&self) -> (Option<&str>, &str) {
        (self.alias.as_deref(), &self.path)
    }

    /// Name this import is referenced by: the alias, or else the package
    /// name implied by the path.
    pub fn effective_name(&self) -> &str {
        match &self.alias {
            Some(alias) => alias,
            None => default_package_name(&self.path),
        }
    }
}

/// Package name implied by an import path.
///
/// The last path element, skipping a trailing major-version element
/// (`github.com/go-chi/chi/v5` is `chi`) and a gopkg.in version suffix
/// (`gopkg.in/yaml.v3` is `yaml`).
pub fn default_package_name(path: &str) -> &str {
    let mut segments = path.trim_end_matches('/').rsplit('/');
    let last = segments.next().unwrap_or(path);

    let name = if is_major_version(last) {
        segments.next().unwrap_or(last)
    } else {
        last
    };

    match name.rsplit_once(".v") {
        Some((base, version))
            if !base.is_empty() && version.chars().all(|c| c.is_ascii_digit()) =>
        {
            base
        }
        _ => name,
    }
}

fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

/// Ordered, deduplicated set of imports.
///
/// Insertion order is preserved; re-inserting an existing `(alias, path)`
/// ORs the `used` flags together.
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    entries: Vec<ImportRef>,
}

impl ImportSet {
    /// Collect the top-level imports declared in a file.
    pub fn collect(parsed: &ParsedGo) -> Self {
        let mut set = Self::default();
        for decl in parsed.top_level("import_declaration") {
            for spec in import_specs(decl) {
                let Some(path) = spec.child_by_field_name("path") else {
                    continue;
                };
                let alias = spec.child_by_field_name("name").map(|n| parsed.text(n));
                let path = unquote(parsed.text(path));
                debug!(file = %parsed.path.display(), "import {:?} {}", alias, path);
                set.insert(ImportRef::new(alias, path));
            }
        }
        set
    }

    pub fn insert(&mut self, import: ImportRef) {
        match self.entries.iter_mut().find(|e| e.key() == import.key()) {
            Some(existing) => existing.used |= import.used,
            None => self.entries.push(import),
        }
    }

    /// Merge another set into this one, keeping first-seen order.
    pub fn merge(&mut self, other: ImportSet) {
        for import in other.entries {
            self.insert(import);
        }
    }

    /// Mark every import whose effective name is `qualifier` as used.
    ///
    /// Returns false when nothing matched.
    pub fn mark_used(&mut self, qualifier: &str) -> bool {
        let mut matched = false;
        for import in &mut self.entries {
            if import.effective_name() == qualifier {
                import.used = true;
                matched = true;
            }
        }
        matched
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImportRef> {
        self.entries.iter()
    }

    pub fn used(&self) -> impl Iterator<Item = &ImportRef> {
        self.entries.iter().filter(|i| i.used)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn import_specs(decl: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = decl.walk();
    let children: Vec<_> = decl.named_children(&mut cursor).collect();

    let mut specs = Vec::new();
    for child in children {
        match child.kind() {
            "import_spec" => specs.push(child),
            "import_spec_list" => {
                let mut cursor = child.walk();
                specs.extend(
                    child
                        .named_children(&mut cursor)
                        .filter(|n| n.kind() == "import_spec"),
                );
            }
            _ => {}
        }
    }
    specs
}

fn unquote(literal: &str) -> &str {
    literal.trim_matches(|c| c == '"' || c == '`')
}
