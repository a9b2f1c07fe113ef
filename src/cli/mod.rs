//! CLI module
//!
//! Command-line interface for generating a schema from JSON files.
//!
//! Objects are read from the positional files (or stdin), seed schemas from
//! `--schema`. Each file may hold any number of concatenated JSON values.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{parse_json_stream, Runner};
