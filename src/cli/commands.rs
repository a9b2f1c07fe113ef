//! CLI arguments

use crate::config::ConflictPolicy;
use clap::Parser;
use std::path::PathBuf;

/// Generate a JSON Schema from JSON objects and existing schemas
#[derive(Parser, Debug)]
#[command(name = "schemagen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files of JSON objects (`-` for stdin). Defaults to stdin when no
    /// objects and no schemas are given
    pub objects: Vec<PathBuf>,

    /// File holding a schema to merge in (repeatable)
    #[arg(short, long = "schema", value_name = "FILE")]
    pub schemas: Vec<PathBuf>,

    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Pretty-print with this many spaces of indentation
    #[arg(short, long)]
    pub indent: Option<usize>,

    /// Fixed `$schema` URI
    #[arg(long, conflicts_with = "no_schema_uri")]
    pub schema_uri: Option<String>,

    /// Leave `$schema` out of the output
    #[arg(long)]
    pub no_schema_uri: bool,

    /// How to handle conflicting keyword values
    #[arg(long, value_enum)]
    pub conflicts: Option<ConflictPolicy>,

    /// Write the schema to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
