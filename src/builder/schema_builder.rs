//! Root-level schema builder

use crate::config::{BuilderConfig, ConflictPolicy, DEFAULT_SCHEMA_URI};
use crate::error::{Error, Result};
use crate::generators::{KeywordConflict, SchemaFragment};
use crate::node::SchemaNode;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::warn;

/// Keyword naming the JSON Schema dialect
const SCHEMA_URI_KEYWORD: &str = "$schema";

/// Builds one schema from any mix of objects and schemas
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    config: BuilderConfig,
    root: SchemaNode,
    /// First `$schema` found in an added schema
    seen_schema_uri: Option<String>,
    /// Conflicts kept under [`ConflictPolicy::Collect`]
    conflicts: Vec<KeywordConflict>,
}

impl SchemaBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the given configuration
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// The root node
    pub fn root(&self) -> &SchemaNode {
        &self.root
    }

    /// Conflicts collected so far
    pub fn conflicts(&self) -> &[KeywordConflict] {
        &self.conflicts
    }

    /// Drain the collected conflicts
    pub fn take_conflicts(&mut self) -> Vec<KeywordConflict> {
        std::mem::take(&mut self.conflicts)
    }

    /// The `$schema` URI that will be emitted
    pub fn schema_uri(&self) -> &str {
        self.config
            .schema_uri
            .as_deref()
            .or(self.seen_schema_uri.as_deref())
            .unwrap_or(DEFAULT_SCHEMA_URI)
    }

    /// Add one observed object
    pub fn add_object(&mut self, value: &Value) -> Result<()> {
        self.root.add_object(value)
    }

    /// Add every object of an iterator, stopping at the first failure
    pub fn add_objects<'a>(&mut self, values: impl IntoIterator<Item = &'a Value>) -> Result<()> {
        for value in values {
            self.add_object(value)?;
        }
        Ok(())
    }

    /// Merge an existing schema
    ///
    /// A `$schema` keyword is not merged; the first one seen becomes the
    /// output URI unless one is configured.
    pub fn add_schema(&mut self, schema: &Value) -> Result<()> {
        let schema = schema
            .as_object()
            .ok_or_else(|| Error::invalid_schema(format!("expected an object, got {schema}")))?;

        if let Some(Value::String(uri)) = schema.get(SCHEMA_URI_KEYWORD) {
            if self.seen_schema_uri.is_none() {
                self.seen_schema_uri = Some(uri.clone());
            }
        }
        let schema: SchemaFragment = schema
            .iter()
            .filter(|(keyword, _)| keyword.as_str() != SCHEMA_URI_KEYWORD)
            .map(|(keyword, value)| (keyword.clone(), value.clone()))
            .collect();

        let conflicts = self.root.add_schema(&schema)?;
        self.handle_conflicts(conflicts);
        Ok(())
    }

    /// Merge everything another builder has seen
    pub fn add_builder(&mut self, other: &SchemaBuilder) -> Result<()> {
        self.add_schema(&other.to_value())
    }

    /// Emit the schema
    ///
    /// The root has no parent, so it never carries a `rate`.
    pub fn to_schema(&self) -> SchemaFragment {
        let mut schema = SchemaFragment::new();
        if self.config.include_schema_uri {
            schema.insert(
                SCHEMA_URI_KEYWORD.to_string(),
                Value::from(self.schema_uri()),
            );
        }
        schema.extend(self.root.to_schema(0));
        schema
    }

    /// Emit the schema as a JSON value
    pub fn to_value(&self) -> Value {
        Value::Object(self.to_schema())
    }

    /// Serialize the schema, compact or indented by `indent` spaces
    pub fn to_json(&self, indent: Option<usize>) -> Result<String> {
        let value = self.to_value();
        let Some(width) = indent else {
            return Ok(serde_json::to_string(&value)?);
        };

        let indent = " ".repeat(width);
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut buffer,
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        value.serialize(&mut serializer)?;

        String::from_utf8(buffer).map_err(|e| Error::Other(e.to_string()))
    }

    fn handle_conflicts(&mut self, conflicts: Vec<KeywordConflict>) {
        match self.config.conflict_policy {
            ConflictPolicy::Log => {
                for conflict in &conflicts {
                    warn!(keyword = %conflict.keyword, "{conflict}");
                }
            }
            ConflictPolicy::Collect => self.conflicts.extend(conflicts),
            ConflictPolicy::Ignore => {}
        }
    }
}

impl PartialEq for SchemaBuilder {
    /// Builders are equal when they would emit the same schema
    fn eq(&self, other: &Self) -> bool {
        self.to_schema() == other.to_schema()
    }
}
