//! CLI runner - builds the schema from the parsed arguments

use crate::builder::SchemaBuilder;
use crate::cli::commands::Cli;
use crate::config::{load_config, BuilderConfig};
use crate::error::{Error, Result, ResultExt};
use crate::generators::KeywordConflict;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Path meaning "standard input"
const STDIN_PATH: &str = "-";

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let (output, conflicts) = self.generate()?;

        for conflict in &conflicts {
            eprintln!("warning: {conflict}");
        }

        match &self.cli.output {
            Some(path) => {
                fs::write(path, format!("{output}\n"))
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote schema to {}", path.display());
            }
            None => println!("{output}"),
        }
        Ok(())
    }

    /// Build the schema, returning its serialized form and the keyword
    /// conflicts collected under `--conflicts collect`
    pub fn generate(&self) -> Result<(String, Vec<KeywordConflict>)> {
        let mut builder = SchemaBuilder::with_config(self.builder_config()?);

        for path in &self.cli.schemas {
            for schema in read_json_values(path)? {
                builder
                    .add_schema(&schema)
                    .with_context(|| format!("Invalid schema in {}", path.display()))?;
            }
        }

        for path in self.object_sources() {
            let values = read_json_values(&path)?;
            debug!("Read {} objects from {}", values.len(), path.display());
            builder
                .add_objects(&values)
                .with_context(|| format!("Unsupported object in {}", path.display()))?;
        }

        let output = builder.to_json(self.cli.indent)?;
        Ok((output, builder.take_conflicts()))
    }

    /// Merge the config file with command-line overrides
    fn builder_config(&self) -> Result<BuilderConfig> {
        let mut config = match &self.cli.config {
            Some(path) => load_config(path)?,
            None => BuilderConfig::default(),
        };

        if let Some(uri) = &self.cli.schema_uri {
            config.schema_uri = Some(uri.clone());
        }
        if self.cli.no_schema_uri {
            config.include_schema_uri = false;
        }
        if let Some(policy) = self.cli.conflicts {
            config.conflict_policy = policy;
        }
        Ok(config)
    }

    /// Object files, falling back to stdin when nothing else was given
    fn object_sources(&self) -> Vec<PathBuf> {
        if self.cli.objects.is_empty() && self.cli.schemas.is_empty() {
            vec![PathBuf::from(STDIN_PATH)]
        } else {
            self.cli.objects.clone()
        }
    }
}

/// Read every JSON value from a file, or stdin for `-`
fn read_json_values(path: &Path) -> Result<Vec<Value>> {
    let content = if path.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }
        fs::read_to_string(path)?
    };

    parse_json_stream(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse whitespace-separated, concatenated JSON values
pub fn parse_json_stream(content: &str) -> Result<Vec<Value>> {
    serde_json::Deserializer::from_str(content)
        .into_iter::<Value>()
        .map(|value| value.map_err(Error::from))
        .collect()
}
