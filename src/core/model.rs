//! Registry model: the merged result of all input files.
//!
//! The model is the only input to rendering. It holds a single package name,
//! every discovered service sorted by name, and the union of all imports with
//! their `used` flags ORed together.

use std::{collections::HashMap, path::PathBuf};

use tracing::debug;

use crate::core::{
    collect::ImportSet,
    error::{GenerateError, GenerateResult},
    extract::ServiceDescriptor,
};

/// What a single input file contributes to the registry.
#[derive(Debug)]
pub struct FileScan {
    pub path: PathBuf,
    pub package: String,
    pub services: Vec<ServiceDescriptor>,
    pub imports: ImportSet,
}

#[derive(Debug)]
pub struct RegistryModel {
    pub package_name: String,
    pub imports: ImportSet,
    /// Sorted by name; ties keep file order, then declaration order.
    pub services: Vec<ServiceDescriptor>,
}

/// Merges [`FileScan`]s in input order.
#[derive(Debug, Default)]
pub struct RegistryModelBuilder {
    package: Option<(String, PathBuf)>,
    imports: ImportSet,
    services: Vec<ServiceDescriptor>,
    declared_in: HashMap<String, PathBuf>,
}

impl RegistryModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one file's results.
    ///
    /// Fails if the file's package differs from the first file's, or if it
    /// declares a service another file already declared.
    pub fn add(&mut self, scan: FileScan) -> GenerateResult<()> {
        if let Some((first, _)) = &self.package
            && *first != scan.package
        {
            return Err(GenerateError::PackageMismatch {
                first: first.clone(),
                second: scan.package,
                file: scan.path,
            });
        }
        if self.package.is_none() {
            self.package = Some((scan.package.clone(), scan.path.clone()));
        }

        for service in scan.services {
            if let Some(first) = self.declared_in.get(&service.name) {
                return Err(GenerateError::DuplicateService {
                    name: service.name,
                    first: first.clone(),
                    second: scan.path,
                });
            }
            self.declared_in
                .insert(service.name.clone(), scan.path.clone());
            self.services.push(service);
        }

        self.imports.merge(scan.imports);
        Ok(())
    }

    pub fn build(mut self) -> GenerateResult<RegistryModel> {
        let Some((package_name, _)) = self.package else {
            return Err(GenerateError::NoInputs);
        };

        check_import_names(&self.imports)?;

        // `sort_by` is stable, which keeps ties in discovery order.
        self.services.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(
            package = %package_name,
            services = self.services.len(),
            imports = self.imports.used().count(),
            "built registry model"
        );

        Ok(RegistryModel {
            package_name,
            imports: self.imports,
            services: self.services,
        })
    }
}

/// Used imports from different files must not bind one name to two paths,
/// since the generated file imports them side by side.
fn check_import_names(imports: &ImportSet) -> GenerateResult<()> {
    let mut claimed: HashMap<&str, &str> = HashMap::new();
    for import in imports.used() {
        let name = import.effective_name();
        match claimed.get(name).copied() {
            Some(first) if first != import.path => {
                return Err(GenerateError::ImportConflict {
                    name: name.to_string(),
                    first: first.to_string(),
                    second: import.path.clone(),
                });
            }
            Some(_) => {}
            None => {
                claimed.insert(name, &import.path);
            }
        }
    }
    Ok(())
}
