//! # schemagen
//!
//! Infer a JSON Schema by observing JSON values and merging existing schema
//! fragments into one generalized description.
//!
//! ## Features
//!
//! - **Scalar Generators**: null, boolean, string, integer/number
//! - **Type Promotion**: `integer` widens to `number` on the first float
//! - **Keyword Merging**: non-type keywords are carried through, first value
//!   wins on conflict
//! - **Rates**: how often each branch was observed under its parent
//!
//! ## Quick Start
//!
//! ```rust
//! use schemagen::{Result, SchemaBuilder};
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let mut builder = SchemaBuilder::new();
//!     builder.add_schema(&json!({"type": "string", "format": "date"}))?;
//!     builder.add_object(&json!("2024-01-15"))?;
//!     builder.add_object(&json!(null))?;
//!
//!     println!("{}", builder.to_json(Some(2))?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      SchemaBuilder                        │
//! │  add_object()   add_schema()   to_schema()   $schema URI   │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//! ┌───────────────────────────────────────────────────────────┐
//! │                        SchemaNode                         │
//! │   match → activate → route        type union / anyOf      │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────┬───────────┬───────────┬───────────┬────────────┐
//! │   Null   │  Boolean  │  Number   │  String   │  Typeless  │
//! └──────────┴───────────┴───────────┴───────────┴────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Builder configuration
pub mod config;

/// Per-category schema generators
pub mod generators;

/// Generator registry for one schema position
pub mod node;

/// Top-level schema builder
pub mod builder;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::SchemaBuilder;
pub use config::{BuilderConfig, ConflictPolicy};
pub use error::{Error, Result};
pub use generators::{GeneratorKind, KeywordConflict, SchemaFragment};
pub use node::SchemaNode;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
