//! Builder configuration
//!
//! Configuration can be built in code or loaded from a YAML or JSON file:
//!
//! ```yaml
//! schema_uri: "https://json-schema.org/draft/2020-12/schema"
//! include_schema_uri: true
//! conflict_policy: collect
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// URI emitted under `$schema` when none is configured or seen
pub const DEFAULT_SCHEMA_URI: &str = "http://json-schema.org/schema#";

/// What to do with keyword conflicts found while merging schemas
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Emit a warning through `tracing`
    #[default]
    Log,
    /// Keep the conflicts for the caller to inspect
    Collect,
    /// Drop them silently
    Ignore,
}

/// Configuration for a [`SchemaBuilder`](crate::builder::SchemaBuilder)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Fixed `$schema` URI
    ///
    /// When unset, the first `$schema` seen in an added schema is used,
    /// falling back to [`DEFAULT_SCHEMA_URI`].
    #[serde(default)]
    pub schema_uri: Option<String>,

    /// Emit `$schema` at all
    #[serde(default = "default_true")]
    pub include_schema_uri: bool,

    /// Keyword conflict handling
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
}

fn default_true() -> bool {
    true
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            schema_uri: None,
            include_schema_uri: true,
            conflict_policy: ConflictPolicy::default(),
        }
    }
}

impl BuilderConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed `$schema` URI
    #[must_use]
    pub fn with_schema_uri(mut self, uri: impl Into<String>) -> Self {
        self.schema_uri = Some(uri.into());
        self
    }

    /// Leave `$schema` out of the output
    #[must_use]
    pub fn without_schema_uri(mut self) -> Self {
        self.include_schema_uri = false;
        self
    }

    /// Set the conflict policy
    #[must_use]
    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    /// Parse configuration from a YAML string (JSON is valid YAML)
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Load configuration from a file, picking the parser by extension
pub fn load_config(path: impl AsRef<Path>) -> Result<BuilderConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => BuilderConfig::from_json_str(&content),
        Some("yaml" | "yml") | None => BuilderConfig::from_yaml_str(&content),
        Some(other) => Err(Error::config(format!(
            "Unsupported config file extension: .{other}"
        ))),
    }
}
