//! Schema builder
//!
//! Top-level entry point: feed it objects and schemas, get a schema back.
//!
//! ```rust
//! use schemagen::SchemaBuilder;
//! use serde_json::json;
//!
//! let mut builder = SchemaBuilder::new();
//! builder.add_object(&json!(1)).unwrap();
//! builder.add_object(&json!(2.5)).unwrap();
//!
//! assert_eq!(
//!     builder.to_value(),
//!     json!({"$schema": "http://json-schema.org/schema#", "type": "number"})
//! );
//! ```

mod schema_builder;

pub use schema_builder::SchemaBuilder;
