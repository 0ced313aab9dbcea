//! srgen - service registry generator for Go
//!
//! srgen scans Go source files for interfaces whose doc comment carries a
//! marker (`+srgen` by default) and generates a single Go file declaring a
//! `ServiceRegistry` with one field per service, a constructor, nil checks
//! and, optionally, mock implementations.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Generation pipeline (parse, collect, extract, render, format, write)

pub mod cli;
pub mod config;
pub mod core;
