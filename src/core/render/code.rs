//! A small structured model of the Go source the generator emits.
//!
//! This covers only what the registry needs: struct types, functions and
//! methods, and a handful of statement forms. Building the output as data
//! keeps "what to emit" in [`super::registry`] and "how to print it" in
//! [`super::printer`].

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoFile {
    /// Comment lines printed above the package clause, without `//`.
    pub header: Vec<String>,
    pub package: String,
    pub imports: Vec<GoImport>,
    pub decls: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GoImport {
    pub path: String,
    pub alias: Option<String>,
}

impl GoImport {
    pub fn new(alias: Option<&str>, path: &str) -> Self {
        Self {
            path: path.to_string(),
            alias: alias.map(str::to_string),
        }
    }

    /// Whether the path belongs to the Go standard library.
    ///
    /// Follows the goimports heuristic: standard packages never have a dot
    /// in their first path element.
    pub fn is_std(&self) -> bool {
        let first = self.path.split('/').next().unwrap_or_default();
        !first.contains('.')
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Struct(StructDecl),
    Func(FuncDecl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDecl {
    pub doc: Vec<String>,
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A parameter; `name` is `None` for type-only parameter lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: Option<String>,
    pub ty: String,
}

impl Param {
    pub fn named(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: ty.into(),
        }
    }

    pub fn unnamed(ty: impl Into<String>) -> Self {
        Self {
            name: None,
            ty: ty.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub doc: Vec<String>,
    pub receiver: Option<Param>,
    pub name: String,
    pub params: Vec<Param>,
    /// One parameter per line, each followed by a comma.
    pub multiline_params: bool,
    /// Unnamed result types.
    pub results: Vec<String>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `var name ty`
    Var { name: String, ty: String },
    /// `lhs = rhs`
    Assign { lhs: String, rhs: Expr },
    /// `if init; cond { ... }`, `init` optional.
    If {
        init: Option<String>,
        cond: String,
        body: Vec<Stmt>,
    },
    Return(Vec<Expr>),
    /// Expression statement, e.g. a call.
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Raw(String),
    /// `&Type{Key: Value, ...}` when `addr` is set, `Type{...}` otherwise.
    Composite {
        addr: bool,
        ty: String,
        fields: Vec<(String, String)>,
    },
}

impl Expr {
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }
}
