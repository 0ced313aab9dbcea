//! Writes the generated file.
//!
//! The destination is touched only once, after rendering and formatting
//! have both succeeded.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::error::{GenerateError, GenerateResult};

#[derive(Debug)]
pub enum WriteResult {
    Written { path: PathBuf, bytes: usize },
    DryRun { path: PathBuf, content: String },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            Self::Written { path, .. } | Self::DryRun { path, .. } => path,
        }
    }
}

#[derive(Debug)]
pub struct FileWriter {
    dry_run: bool,
}

impl FileWriter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    pub fn write(&self, path: &Path, content: &str) -> GenerateResult<WriteResult> {
        if self.dry_run {
            return Ok(WriteResult::DryRun {
                path: path.to_path_buf(),
                content: content.to_string(),
            });
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, content).map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }
}
