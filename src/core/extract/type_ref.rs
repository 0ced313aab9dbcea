use std::fmt;

use tree_sitter::Node;

use crate::core::parsers::go::ParsedGo;

/// A parameter or result type as far as the registry needs to understand it.
///
/// Anything outside the closed set of shapes below resolves to
/// [`TypeRef::Unsupported`]; the extractor decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// `T`
    Name(String),
    /// `*T`
    Pointer(Box<TypeRef>),
    /// `[]T`
    Slice(Box<TypeRef>),
    /// `...T`, only valid as the last parameter.
    Variadic(Box<TypeRef>),
    /// `pkg.T`
    Qualified { package: String, name: String },
    /// Maps, channels, function types, arrays, inline structs and
    /// interfaces, generic instantiations.
    Unsupported { kind: String, text: String },
}

impl TypeRef {
    /// Resolve a type node.
    ///
    /// An unsupported shape anywhere inside a pointer or slice makes the
    /// whole type unsupported.
    pub fn resolve(node: Node<'_>, parsed: &ParsedGo) -> Self {
        let resolved = match node.kind() {
            "type_identifier" | "identifier" => Some(Self::Name(parsed.text(node).to_string())),
            "pointer_type" => first_named_child(node)
                .map(|inner| Self::resolve(inner, parsed))
                .map(|inner| Self::Pointer(Box::new(inner))),
            "slice_type" => node
                .child_by_field_name("element")
                .map(|inner| Self::resolve(inner, parsed))
                .map(|inner| Self::Slice(Box::new(inner))),
            "parenthesized_type" => first_named_child(node).map(|inner| Self::resolve(inner, parsed)),
            "qualified_type" => {
                match (
                    node.child_by_field_name("package"),
                    node.child_by_field_name("name"),
                ) {
                    (Some(package), Some(name)) => Some(Self::Qualified {
                        package: parsed.text(package).to_string(),
                        name: parsed.text(name).to_string(),
                    }),
                    _ => None,
                }
            }
            _ => None,
        };

        match resolved {
            Some(ty) if !ty.is_unsupported() => ty,
            _ => Self::Unsupported {
                kind: node.kind().to_string(),
                text: parsed.text(node).to_string(),
            },
        }
    }

    pub fn variadic(inner: TypeRef) -> Self {
        if inner.is_unsupported() {
            return inner;
        }
        Self::Variadic(Box::new(inner))
    }

    /// True if this type or anything it wraps is unsupported.
    pub fn is_unsupported(&self) -> bool {
        match self {
            Self::Unsupported { .. } => true,
            Self::Pointer(inner) | Self::Slice(inner) | Self::Variadic(inner) => {
                inner.is_unsupported()
            }
            Self::Name(_) | Self::Qualified { .. } => false,
        }
    }

    /// Package qualifier referenced by this type, if any.
    pub fn qualifier(&self) -> Option<&str> {
        match self {
            Self::Qualified { package, .. } => Some(package),
            Self::Pointer(inner) | Self::Slice(inner) | Self::Variadic(inner) => inner.qualifier(),
            Self::Name(_) | Self::Unsupported { .. } => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{}", name),
            Self::Pointer(inner) => write!(f, "*{}", inner),
            Self::Slice(inner) => write!(f, "[]{}", inner),
            Self::Variadic(inner) => write!(f, "...{}", inner),
            Self::Qualified { package, name } => write!(f, "{}.{}", package, name),
            Self::Unsupported { text, .. } => write!(f, "{}", text),
        }
    }
}

fn first_named_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| child.kind() != "comment")
}
