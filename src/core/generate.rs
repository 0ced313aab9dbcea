use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::{
    collect::{DEFAULT_MARKER, ImportSet, MarkerScanner},
    error::GenerateResult,
    extract::{SignatureExtractor, UnsupportedPolicy},
    format::{FormatterKind, SourceFormatter},
    model::{FileScan, RegistryModel, RegistryModelBuilder},
    parsers::go::{ParsedGo, parse_go_file, parse_go_source},
    render::{RenderOptions, render},
};

/// Settings that shape what the generator emits.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub marker: String,
    pub unsupported_types: UnsupportedPolicy,
    pub render: RenderOptions,
    pub formatter: FormatterKind,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            unsupported_types: UnsupportedPolicy::default(),
            render: RenderOptions::default(),
            formatter: FormatterKind::default(),
        }
    }
}

/// Formatted output of one generation pass.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    pub package: String,
    /// Service names in registry order.
    pub services: Vec<String>,
    pub content: String,
}

/// The generation pipeline.
///
/// 1. Parse each input file
/// 2. Collect its imports and scan for marked interfaces
/// 3. Extract service descriptors, marking the imports they use
/// 4. Merge all files into one [`RegistryModel`]
/// 5. Render and format
///
/// Files are processed one at a time in the order given. Identical inputs
/// always produce byte-identical output.
pub struct Generator {
    options: GenerateOptions,
    formatter: Box<dyn SourceFormatter>,
}

impl Generator {
    pub fn new(options: GenerateOptions) -> Self {
        let formatter = options.formatter.formatter();
        Self { options, formatter }
    }

    /// Replace the output formatter selected by the options.
    pub fn with_formatter(mut self, formatter: Box<dyn SourceFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Generate from Go files on disk.
    pub fn generate(&self, files: &[PathBuf]) -> GenerateResult<GeneratedOutput> {
        let parsed = files
            .iter()
            .map(|path| parse_go_file(path))
            .collect::<GenerateResult<Vec<_>>>()?;
        self.generate_parsed(&parsed)
    }

    /// Generate from in-memory sources, each paired with the path used in
    /// diagnostics.
    pub fn generate_sources(&self, sources: &[(&Path, &str)]) -> GenerateResult<GeneratedOutput> {
        let parsed = sources
            .iter()
            .map(|(path, code)| parse_go_source(code.to_string(), path))
            .collect::<GenerateResult<Vec<_>>>()?;
        self.generate_parsed(&parsed)
    }

    fn generate_parsed(&self, files: &[ParsedGo]) -> GenerateResult<GeneratedOutput> {
        let model = self.build_model(files)?;
        let raw = render(&model, self.options.render);
        let content = self.formatter.format(&raw)?;

        info!(
            package = %model.package_name,
            services = model.services.len(),
            "generated service registry"
        );

        Ok(GeneratedOutput {
            package: model.package_name,
            services: model.services.into_iter().map(|s| s.name).collect(),
            content,
        })
    }

    pub fn build_model(&self, files: &[ParsedGo]) -> GenerateResult<RegistryModel> {
        let mut builder = RegistryModelBuilder::new();
        for parsed in files {
            builder.add(self.scan_file(parsed)?)?;
        }
        builder.build()
    }

    /// Everything one file contributes: package, services, imports.
    pub fn scan_file(&self, parsed: &ParsedGo) -> GenerateResult<FileScan> {
        let package = parsed.package_name()?.to_string();
        let mut imports = ImportSet::collect(parsed);
        let marked = MarkerScanner::new(&self.options.marker).scan(parsed);

        let mut extractor =
            SignatureExtractor::new(parsed, &mut imports, self.options.unsupported_types);
        let services = marked
            .iter()
            .map(|iface| extractor.extract(iface))
            .collect::<GenerateResult<Vec<_>>>()?;

        debug!(
            file = %parsed.path.display(),
            package = %package,
            services = services.len(),
            "scanned file"
        );

        Ok(FileScan {
            path: parsed.path.clone(),
            package,
            services,
            imports,
        })
    }
}
