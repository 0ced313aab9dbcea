//! Runs one `srgen` invocation: configuration, generation, then writing or
//! checking the destination.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use tracing::debug;

use super::{args::Arguments, exit_status::ExitStatus, report};
use crate::{
    config::{Config, load_config, load_config_file},
    core::{FileWriter, GenerateError, GeneratedOutput, Generator, WriteResult},
};

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let Some(first) = args.files.first() else {
        return Err(GenerateError::NoInputs.into());
    };

    let config = resolve_config(&args, first)?;
    let output = Generator::new(config.generate_options()).generate(&args.files)?;
    let destination = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(first, &config.output_file));

    if args.check {
        return check(&destination, &output);
    }

    match FileWriter::new(args.dry_run).write(&destination, &output.content)? {
        WriteResult::DryRun { content, .. } => report::print_dry_run(&content),
        WriteResult::Written { path, bytes } => {
            debug!(path = %path.display(), bytes, "wrote registry");
            report::print_written(output.services.len(), &path);
        }
    }

    Ok(ExitStatus::Success)
}

fn resolve_config(args: &Arguments, first: &Path) -> Result<Config> {
    if let Some(path) = &args.config {
        if !path.is_file() {
            bail!("config file not found: {}", path.display());
        }
        debug!(path = %path.display(), "using config file");
        return load_config_file(path);
    }

    let loaded = load_config(&input_dir(first))?;
    match &loaded.path {
        Some(path) => debug!(path = %path.display(), "using config file"),
        None => debug!("no config file found, using defaults"),
    }
    Ok(loaded.config)
}

fn input_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// `<directory of the first input>/<file_name>`.
pub fn default_output_path(first: &Path, file_name: &str) -> PathBuf {
    match first.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

fn check(destination: &Path, output: &GeneratedOutput) -> Result<ExitStatus> {
    let up_to_date = match fs::read_to_string(destination) {
        Ok(existing) => existing == output.content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => false,
        Err(source) => {
            return Err(GenerateError::Read {
                file: destination.to_path_buf(),
                source,
            }
            .into());
        }
    };

    report::print_check(up_to_date, output.services.len(), destination);
    Ok(if up_to_date {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    })
}
