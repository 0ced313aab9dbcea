use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::core::{
    GenerateOptions,
    collect::DEFAULT_MARKER,
    extract::UnsupportedPolicy,
    format::FormatterKind,
    render::RenderOptions,
};

pub const CONFIG_FILE_NAME: &str = ".srgenrc.json";

pub const DEFAULT_OUTPUT_FILE: &str = "services.go";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default)]
    pub unsupported_types: UnsupportedPolicy,
    #[serde(default = "default_mocks")]
    pub mocks: bool,
    #[serde(default)]
    pub formatter: FormatterKind,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

fn default_mocks() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            output_file: default_output_file(),
            unsupported_types: UnsupportedPolicy::default(),
            mocks: default_mocks(),
            formatter: FormatterKind::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.marker.is_empty() || self.marker.chars().any(char::is_whitespace) {
            bail!(
                "Invalid 'marker': \"{}\" (must be non-empty and contain no whitespace)",
                self.marker
            );
        }

        let file_name = Path::new(&self.output_file).file_name();
        if file_name.is_none_or(|name| name != self.output_file.as_str())
            || !self.output_file.ends_with(".go")
        {
            bail!(
                "Invalid 'outputFile': \"{}\" (must be a plain file name ending in .go)",
                self.output_file
            );
        }

        Ok(())
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            marker: self.marker.clone(),
            unsupported_types: self.unsupported_types,
            render: RenderOptions { mocks: self.mocks },
            formatter: self.formatter,
        }
    }
}

/// Search `start_dir` and its ancestors for a config file, stopping at a
/// repository root.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config came from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}

/// Load the config found from `start_dir`, or defaults if there is none.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            path: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
