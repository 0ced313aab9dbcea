use serde::Deserialize;
use tracing::{debug, warn};
use tree_sitter::Node;

use crate::core::{
    collect::{ImportSet, MarkedInterface},
    error::{GenerateError, GenerateResult},
    extract::type_ref::TypeRef,
    parsers::go::ParsedGo,
};

/// One method of a service interface.
///
/// `params` and `results` hold rendered type strings in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    pub params: Vec<String>,
    pub results: Vec<String>,
}

/// A marked interface: its name and directly declared methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub name: String,
    pub methods: Vec<MethodSignature>,
}

/// What to do with a parameter or result whose type shape is not understood.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedPolicy {
    /// Abort generation with an input error.
    #[default]
    Error,
    /// Drop the field from the generated signature and log a warning.
    Drop,
}

/// Turns marked interfaces of one file into [`ServiceDescriptor`]s.
///
/// Qualified type references are reported to the file's [`ImportSet`] as
/// they are resolved.
pub struct SignatureExtractor<'a> {
    parsed: &'a ParsedGo,
    imports: &'a mut ImportSet,
    policy: UnsupportedPolicy,
}

/// Where a type appears, for diagnostics.
struct Site<'s> {
    service: &'s str,
    method: &'s str,
}

impl<'a> SignatureExtractor<'a> {
    pub fn new(parsed: &'a ParsedGo, imports: &'a mut ImportSet, policy: UnsupportedPolicy) -> Self {
        Self {
            parsed,
            imports,
            policy,
        }
    }

    /// Extract one service.
    ///
    /// Embedded interfaces are skipped, not flattened: only methods declared
    /// directly in the interface body are collected.
    pub fn extract(&mut self, iface: &MarkedInterface<'_>) -> GenerateResult<ServiceDescriptor> {
        let mut cursor = iface.body.walk();
        let elems: Vec<_> = iface.body.named_children(&mut cursor).collect();

        let mut methods = Vec::new();
        for elem in elems {
            match elem.kind() {
                "method_elem" | "method_spec" => {
                    if let Some(method) = self.method(iface.name, elem)? {
                        methods.push(method);
                    }
                }
                "comment" => {}
                other => debug!(
                    service = iface.name,
                    "skipping embedded {} `{}`",
                    other,
                    self.parsed.text(elem)
                ),
            }
        }

        Ok(ServiceDescriptor {
            name: iface.name.to_string(),
            methods,
        })
    }

    fn method(&mut self, service: &str, elem: Node<'_>) -> GenerateResult<Option<MethodSignature>> {
        let Some(name) = elem.child_by_field_name("name") else {
            return Ok(None);
        };
        let name = self.parsed.text(name).to_string();
        let site = Site {
            service,
            method: &name,
        };

        let params = match elem.child_by_field_name("parameters") {
            Some(list) => self.parameter_list(&site, list)?,
            None => Vec::new(),
        };

        let results = match elem.child_by_field_name("result") {
            Some(list) if list.kind() == "parameter_list" => self.parameter_list(&site, list)?,
            Some(single) => self
                .type_string(&site, TypeRef::resolve(single, self.parsed))?
                .into_iter()
                .collect(),
            None => Vec::new(),
        };

        Ok(Some(MethodSignature {
            name,
            params,
            results,
        }))
    }

    /// Types of a parameter list, one entry per declared name so that
    /// `(a, b int)` keeps its arity.
    fn parameter_list(&mut self, site: &Site<'_>, list: Node<'_>) -> GenerateResult<Vec<String>> {
        let mut cursor = list.walk();
        let decls: Vec<_> = list.named_children(&mut cursor).collect();

        let mut types = Vec::new();
        for decl in decls {
            let Some(ty) = decl.child_by_field_name("type") else {
                continue;
            };
            let (resolved, count) = match decl.kind() {
                "variadic_parameter_declaration" => {
                    (TypeRef::variadic(TypeRef::resolve(ty, self.parsed)), 1)
                }
                "parameter_declaration" => {
                    let mut cursor = decl.walk();
                    let names = decl.children_by_field_name("name", &mut cursor).count();
                    (TypeRef::resolve(ty, self.parsed), names.max(1))
                }
                _ => continue,
            };

            if let Some(rendered) = self.type_string(site, resolved)? {
                types.extend(std::iter::repeat_n(rendered, count));
            }
        }
        Ok(types)
    }

    /// Render a resolved type, applying the unsupported-type policy and
    /// recording its qualifier as an import use.
    fn type_string(&mut self, site: &Site<'_>, ty: TypeRef) -> GenerateResult<Option<String>> {
        if ty.is_unsupported() {
            return match self.policy {
                UnsupportedPolicy::Error => Err(GenerateError::UnsupportedType {
                    file: self.parsed.path.clone(),
                    service: site.service.to_string(),
                    method: site.method.to_string(),
                    type_text: ty.to_string(),
                }),
                UnsupportedPolicy::Drop => {
                    warn!(
                        file = %self.parsed.path.display(),
                        "dropping unsupported type `{}` from {}.{}",
                        ty,
                        site.service,
                        site.method
                    );
                    Ok(None)
                }
            };
        }

        if let Some(qualifier) = ty.qualifier()
            && !self.imports.mark_used(qualifier)
        {
            warn!(
                file = %self.parsed.path.display(),
                "{}.{} references `{}` but no import provides it",
                site.service,
                site.method,
                qualifier
            );
            return Err(GenerateError::UnresolvedQualifier {
                file: self.parsed.path.clone(),
                service: site.service.to_string(),
                method: site.method.to_string(),
                qualifier: qualifier.to_string(),
            });
        }

        Ok(Some(ty.to_string()))
    }
}
