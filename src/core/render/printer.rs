//! Prints a [`GoFile`] in gofmt layout.
//!
//! Indentation is one tab per level. Consecutive struct fields and
//! composite-literal entries are aligned into columns with spaces, the way
//! gofmt's tabwriter does it. Imports are grouped goimports-style: standard
//! library first, then everything else, each group sorted by path.

use super::code::{Decl, Expr, FuncDecl, GoFile, GoImport, Param, Stmt, StructDecl};

pub fn print(file: &GoFile) -> String {
    let mut printer = Printer::default();
    printer.file(file);
    printer.out
}

#[derive(Default)]
struct Printer {
    out: String,
    depth: usize,
}

impl Printer {
    fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push('\t');
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn doc(&mut self, doc: &[String]) {
        for line in doc {
            self.line(&format!("// {}", line));
        }
    }

    fn file(&mut self, file: &GoFile) {
        if !file.header.is_empty() {
            self.doc(&file.header);
            self.blank();
        }

        self.line(&format!("package {}", file.package));

        if !file.imports.is_empty() {
            self.blank();
            self.imports(&file.imports);
        }

        for decl in &file.decls {
            self.blank();
            match decl {
                Decl::Struct(s) => self.struct_decl(s),
                Decl::Func(f) => self.func_decl(f),
            }
        }
    }

    fn imports(&mut self, imports: &[GoImport]) {
        let (mut std, mut other): (Vec<_>, Vec<_>) = imports.iter().partition(|i| i.is_std());
        std.sort();
        std.dedup();
        other.sort();
        other.dedup();

        self.line("import (");
        self.depth += 1;
        for (i, group) in [std, other].iter().filter(|g| !g.is_empty()).enumerate() {
            if i > 0 {
                self.blank();
            }
            for import in group {
                match &import.alias {
                    Some(alias) => self.line(&format!("{} \"{}\"", alias, import.path)),
                    None => self.line(&format!("\"{}\"", import.path)),
                }
            }
        }
        self.depth -= 1;
        self.line(")");
    }

    fn struct_decl(&mut self, decl: &StructDecl) {
        self.doc(&decl.doc);
        self.line(&format!("type {} struct {{", decl.name));
        self.depth += 1;
        let rows: Vec<_> = decl
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.ty.clone()))
            .collect();
        self.aligned(&rows);
        self.depth -= 1;
        self.line("}");
    }

    fn func_decl(&mut self, decl: &FuncDecl) {
        self.doc(&decl.doc);

        let mut head = String::from("func ");
        if let Some(receiver) = &decl.receiver {
            head.push_str(&format!("({}) ", param(receiver)));
        }
        head.push_str(&decl.name);

        let results = results(&decl.results);
        if decl.multiline_params && !decl.params.is_empty() {
            self.line(&format!("{}(", head));
            self.depth += 1;
            for p in &decl.params {
                self.line(&format!("{},", param(p)));
            }
            self.depth -= 1;
            self.line(&format!("){} {{", results));
        } else {
            let params: Vec<_> = decl.params.iter().map(param).collect();
            self.line(&format!("{}({}){} {{", head, params.join(", "), results));
        }

        self.depth += 1;
        self.stmts(&decl.body);
        self.depth -= 1;
        self.line("}");
    }

    fn stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.stmt(stmt);
        }
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Var { name, ty } => self.line(&format!("var {} {}", name, ty)),
            Stmt::Assign { lhs, rhs } => self.expr(&format!("{} = ", lhs), rhs),
            Stmt::If { init, cond, body } => {
                match init {
                    Some(init) => self.line(&format!("if {}; {} {{", init, cond)),
                    None => self.line(&format!("if {} {{", cond)),
                }
                self.depth += 1;
                self.stmts(body);
                self.depth -= 1;
                self.line("}");
            }
            Stmt::Return(values) => match values.as_slice() {
                [] => self.line("return"),
                [single] => self.expr("return ", single),
                many => {
                    let values: Vec<_> = many.iter().map(inline).collect();
                    self.line(&format!("return {}", values.join(", ")));
                }
            },
            Stmt::Expr(expr) => self.expr("", expr),
        }
    }

    /// Print `prefix` followed by `expr`, breaking non-empty composite
    /// literals over several aligned lines.
    fn expr(&mut self, prefix: &str, expr: &Expr) {
        match expr {
            Expr::Composite { addr, ty, fields } if !fields.is_empty() => {
                let amp = if *addr { "&" } else { "" };
                self.line(&format!("{}{}{}{{", prefix, amp, ty));
                self.depth += 1;
                let rows: Vec<_> = fields
                    .iter()
                    .map(|(key, value)| (format!("{}:", key), format!("{},", value)))
                    .collect();
                self.aligned(&rows);
                self.depth -= 1;
                self.line("}");
            }
            _ => self.line(&format!("{}{}", prefix, inline(expr))),
        }
    }

    /// Two-column rows with the first column padded to a common width.
    fn aligned(&mut self, rows: &[(String, String)]) {
        let width = rows
            .iter()
            .map(|(first, _)| first.chars().count())
            .max()
            .unwrap_or(0);
        for (first, second) in rows {
            let pad = width - first.chars().count() + 1;
            self.line(&format!("{}{}{}", first, " ".repeat(pad), second));
        }
    }
}

fn param(p: &Param) -> String {
    match &p.name {
        Some(name) => format!("{} {}", name, p.ty),
        None => p.ty.clone(),
    }
}

fn results(results: &[String]) -> String {
    match results {
        [] => String::new(),
        [single] => format!(" {}", single),
        many => format!(" ({})", many.join(", ")),
    }
}

fn inline(expr: &Expr) -> String {
    match expr {
        Expr::Raw(text) => text.clone(),
        Expr::Composite { addr, ty, fields } => {
            let amp = if *addr { "&" } else { "" };
            let fields: Vec<_> = fields.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
            format!("{}{}{{{}}}", amp, ty, fields.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::render::code::Field;

    fn file(imports: Vec<GoImport>, decls: Vec<Decl>) -> GoFile {
        GoFile {
            header: Vec::new(),
            package: "app".to_string(),
            imports,
            decls,
        }
    }

    #[test]
    fn test_imports_grouped_and_sorted() {
        let out = print(&file(
            vec![
                GoImport::new(None, "strings"),
                GoImport::new(None, "github.com/acme/clock"),
                GoImport::new(None, "fmt"),
                GoImport::new(Some("ctx"), "context"),
                GoImport::new(None, "fmt"),
            ],
            Vec::new(),
        ));
        assert_eq!(
            out,
            "package app\n\nimport (\n\tctx \"context\"\n\t\"fmt\"\n\t\"strings\"\n\n\t\"github.com/acme/clock\"\n)\n"
        );
    }

    #[test]
    fn test_struct_fields_aligned() {
        let out = print(&file(
            Vec::new(),
            vec![Decl::Struct(StructDecl {
                doc: vec!["Registry holds services.".to_string()],
                name: "Registry".to_string(),
                fields: vec![Field::new("BarService", "BarService"), Field::new("Z", "Z")],
            })],
        ));
        assert_eq!(
            out,
            "package app\n\n// Registry holds services.\ntype Registry struct {\n\tBarService BarService\n\tZ          Z\n}\n"
        );
    }

    #[test]
    fn test_empty_struct() {
        let out = print(&file(
            Vec::new(),
            vec![Decl::Struct(StructDecl {
                doc: Vec::new(),
                name: "Empty".to_string(),
                fields: Vec::new(),
            })],
        ));
        assert_eq!(out, "package app\n\ntype Empty struct {\n}\n");
    }

    #[test]
    fn test_func_with_composite_return() {
        let out = print(&file(
            Vec::new(),
            vec![Decl::Func(FuncDecl {
                doc: Vec::new(),
                receiver: None,
                name: "New".to_string(),
                params: vec![Param::named("A", "A"), Param::named("Long", "Long")],
                multiline_params: true,
                results: vec!["*R".to_string()],
                body: vec![Stmt::Return(vec![Expr::Composite {
                    addr: true,
                    ty: "R".to_string(),
                    fields: vec![
                        ("A".to_string(), "A".to_string()),
                        ("Long".to_string(), "Long".to_string()),
                    ],
                }])],
            })],
        ));
        assert_eq!(
            out,
            "package app\n\nfunc New(\n\tA A,\n\tLong Long,\n) *R {\n\treturn &R{\n\t\tA:    A,\n\t\tLong: Long,\n\t}\n}\n"
        );
    }

    #[test]
    fn test_method_with_multiple_results_and_empty_body() {
        let out = print(&file(
            Vec::new(),
            vec![Decl::Func(FuncDecl {
                doc: Vec::new(),
                receiver: Some(Param::named("s", "*M")),
                name: "Get".to_string(),
                params: vec![Param::unnamed("int"), Param::unnamed("...string")],
                multiline_params: false,
                results: vec!["string".to_string(), "error".to_string()],
                body: Vec::new(),
            })],
        ));
        assert_eq!(
            out,
            "package app\n\nfunc (s *M) Get(int, ...string) (string, error) {\n}\n"
        );
    }
}
