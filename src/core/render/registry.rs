//! The registry template, expressed as a [`GoFile`].

use crate::core::{
    collect::ImportRef,
    extract::{MethodSignature, ServiceDescriptor},
    model::RegistryModel,
};

use super::code::{Decl, Expr, Field, FuncDecl, GoFile, GoImport, Param, Stmt, StructDecl};

pub const REGISTRY_TYPE: &str = "ServiceRegistry";

/// Prefix of the alias a helper package gets when a service import already
/// claims its name.
const HELPER_ALIAS_PREFIX: &str = "srgen";

/// Receiver name used by registry methods.
const RECEIVER: &str = "reg";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Emit a `<Service>Mock` implementation per service.
    pub mocks: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { mocks: true }
    }
}

/// Names the `Validate` body uses for its helper packages.
struct Helpers {
    fmt: String,
    strings: String,
}

/// Build the generated file for a registry model.
///
/// Service imports are only referenced by mock signatures, so they are
/// emitted only with mocks.
pub fn registry_file(model: &RegistryModel, options: RenderOptions) -> GoFile {
    let used: Vec<&ImportRef> = if options.mocks {
        model.imports.used().collect()
    } else {
        Vec::new()
    };

    let mut imports: Vec<_> = used
        .iter()
        .map(|i| GoImport::new(i.alias.as_deref(), &i.path))
        .collect();
    let helpers = Helpers {
        fmt: helper_import("fmt", &used, &mut imports),
        strings: helper_import("strings", &used, &mut imports),
    };

    let services = &model.services;
    let mut decls = vec![
        registry_struct(services),
        constructor(services),
        validate(services, &helpers),
        checked(),
        must(),
    ];

    if options.mocks {
        for service in services {
            decls.push(mock_struct(service));
            decls.extend(service.methods.iter().map(|m| mock_method(service, m)));
        }
    }

    GoFile {
        header: vec![format!(
            "Code generated by {}. DO NOT EDIT.",
            env!("CARGO_PKG_NAME")
        )],
        package: model.package_name.clone(),
        imports,
        decls,
    }
}

/// Import a standard helper package and return the name to call it by.
///
/// Reuses a service import of the same path, and aliases the helper when a
/// service import of another path already takes its name.
fn helper_import(path: &str, used: &[&ImportRef], imports: &mut Vec<GoImport>) -> String {
    if let Some(existing) = used.iter().find(|i| i.path == path) {
        return existing.effective_name().to_string();
    }

    if used.iter().any(|i| i.effective_name() == path) {
        let alias = format!("{}{}", HELPER_ALIAS_PREFIX, path);
        imports.push(GoImport::new(Some(&alias), path));
        alias
    } else {
        imports.push(GoImport::new(None, path));
        path.to_string()
    }
}

fn receiver() -> Option<Param> {
    Some(Param::named(RECEIVER, format!("*{}", REGISTRY_TYPE)))
}

fn registry_struct(services: &[ServiceDescriptor]) -> Decl {
    Decl::Struct(StructDecl {
        doc: vec![format!("{} holds one implementation per service.", REGISTRY_TYPE)],
        name: REGISTRY_TYPE.to_string(),
        fields: services
            .iter()
            .map(|s| Field::new(&s.name, &s.name))
            .collect(),
    })
}

fn constructor(services: &[ServiceDescriptor]) -> Decl {
    Decl::Func(FuncDecl {
        doc: vec![format!(
            "New{} returns a {} holding the given services.",
            REGISTRY_TYPE, REGISTRY_TYPE
        )],
        receiver: None,
        name: format!("New{}", REGISTRY_TYPE),
        params: services
            .iter()
            .map(|s| Param::named(&s.name, &s.name))
            .collect(),
        multiline_params: true,
        results: vec![format!("*{}", REGISTRY_TYPE)],
        body: vec![Stmt::Return(vec![Expr::Composite {
            addr: true,
            ty: REGISTRY_TYPE.to_string(),
            fields: services
                .iter()
                .map(|s| (s.name.clone(), s.name.clone()))
                .collect(),
        }])],
    })
}

fn validate(services: &[ServiceDescriptor], helpers: &Helpers) -> Decl {
    let mut body = vec![Stmt::Var {
        name: "errs".to_string(),
        ty: "[]string".to_string(),
    }];

    body.extend(services.iter().map(|s| Stmt::If {
        init: None,
        cond: format!("{}.{} == nil", RECEIVER, s.name),
        body: vec![Stmt::Assign {
            lhs: "errs".to_string(),
            rhs: Expr::raw(format!("append(errs, \"{}\")", s.name)),
        }],
    }));

    body.push(Stmt::If {
        init: None,
        cond: "len(errs) > 0".to_string(),
        body: vec![Stmt::Return(vec![Expr::raw(format!(
            "{}.Errorf(\"nil service(s): %s\", {}.Join(errs, \", \"))",
            helpers.fmt, helpers.strings
        ))])],
    });
    body.push(Stmt::Return(vec![Expr::raw("nil")]));

    Decl::Func(FuncDecl {
        doc: vec![
            "Validate reports whether all services are set.".to_string(),
            "The error lists every missing service.".to_string(),
        ],
        receiver: receiver(),
        name: "Validate".to_string(),
        params: Vec::new(),
        multiline_params: false,
        results: vec!["error".to_string()],
        body,
    })
}

fn validate_guard(on_error: Stmt) -> Stmt {
    Stmt::If {
        init: Some(format!("err := {}.Validate()", RECEIVER)),
        cond: "err != nil".to_string(),
        body: vec![on_error],
    }
}

fn checked() -> Decl {
    Decl::Func(FuncDecl {
        doc: vec![
            "Checked returns the registry if every service is set,".to_string(),
            "or the error reported by Validate.".to_string(),
        ],
        receiver: receiver(),
        name: "Checked".to_string(),
        params: Vec::new(),
        multiline_params: false,
        results: vec![format!("*{}", REGISTRY_TYPE), "error".to_string()],
        body: vec![
            validate_guard(Stmt::Return(vec![Expr::raw("nil"), Expr::raw("err")])),
            Stmt::Return(vec![Expr::raw(RECEIVER), Expr::raw("nil")]),
        ],
    })
}

fn must() -> Decl {
    Decl::Func(FuncDecl {
        doc: vec![
            "Must is like Checked but panics if any service is missing.".to_string(),
            "Use it only where an incomplete registry is a programming error.".to_string(),
        ],
        receiver: receiver(),
        name: "Must".to_string(),
        params: Vec::new(),
        multiline_params: false,
        results: vec![format!("*{}", REGISTRY_TYPE)],
        body: vec![
            validate_guard(Stmt::Expr(Expr::raw("panic(err)"))),
            Stmt::Return(vec![Expr::raw(RECEIVER)]),
        ],
    })
}

fn mock_name(service: &ServiceDescriptor) -> String {
    format!("{}Mock", service.name)
}

fn ret_field(method: &MethodSignature, index: usize) -> String {
    format!("{}Ret{}", method.name, index)
}

fn mock_struct(service: &ServiceDescriptor) -> Decl {
    let fields = service
        .methods
        .iter()
        .flat_map(|m| {
            m.results
                .iter()
                .enumerate()
                .map(move |(i, ty)| Field::new(ret_field(m, i), ty))
        })
        .collect();

    Decl::Struct(StructDecl {
        doc: vec![format!(
            "{} implements {} for mocking.",
            mock_name(service),
            service.name
        )],
        name: mock_name(service),
        fields,
    })
}

fn mock_method(service: &ServiceDescriptor, method: &MethodSignature) -> Decl {
    let body = if method.results.is_empty() {
        Vec::new()
    } else {
        vec![Stmt::Return(
            (0..method.results.len())
                .map(|i| Expr::raw(format!("s.{}", ret_field(method, i))))
                .collect(),
        )]
    };

    Decl::Func(FuncDecl {
        doc: vec![format!(
            "{} implements {}.{} for mocking.",
            method.name, service.name, method.name
        )],
        receiver: Some(Param::named("s", format!("*{}", mock_name(service)))),
        name: method.name.clone(),
        params: method.params.iter().map(Param::unnamed).collect(),
        multiline_params: false,
        results: method.results.clone(),
        body,
    })
}
