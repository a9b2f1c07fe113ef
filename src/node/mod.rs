//! Schema nodes
//!
//! A node owns the active generators for one position in the schema and
//! routes each incoming object or fragment to the generator whose category
//! matches it.

mod schema_node;

pub use schema_node::SchemaNode;
