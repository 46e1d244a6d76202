//! locale-tools - maintenance commands for a website's locale JSON files
//!
//! Each locale keeps its UI texts in `<locales-root>/<locale>/common.json`.
//! This crate merges new translation keys into those files and checks that
//! every file is still valid JSON.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`merge`, `validate`, `init`)
//! - `config`: Configuration file loading and parsing
//! - `core`: Locale documents, dotted-path merge, translation tables, validation

pub mod cli;
pub mod config;
pub mod core;
