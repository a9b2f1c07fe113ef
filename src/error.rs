//! Error types for schemagen
//!
//! Keyword conflicts are not errors: they are reported as
//! [`KeywordConflict`](crate::generators::KeywordConflict) values and never
//! abort ingestion. Everything here is fatal for the call that produced it.

use thiserror::Error;

/// The main error type for schemagen
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Generation Errors
    // ============================================================================
    #[error("Could not find matching schema type for {kind}: {value}")]
    NoMatchingGenerator { kind: String, value: String },

    #[error("Invalid schema: {message}")]
    InvalidSchema { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a no-matching-generator error for an object
    pub fn no_match_for_object(value: &serde_json::Value) -> Self {
        Self::NoMatchingGenerator {
            kind: "object".to_string(),
            value: value.to_string(),
        }
    }

    /// Create a no-matching-generator error for a schema fragment
    pub fn no_match_for_schema(schema: &serde_json::Map<String, serde_json::Value>) -> Self {
        Self::NoMatchingGenerator {
            kind: "schema".to_string(),
            value: serde_json::Value::Object(schema.clone()).to_string(),
        }
    }

    /// Create an invalid schema error
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a file-not-found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

/// Result type alias for schemagen
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
