//! Schema generators
//!
//! A generator is the stateful accumulator for one type category of a
//! schema node. The registry ([`crate::node::SchemaNode`]) asks each
//! [`GeneratorKind`] whether it matches an incoming object or schema
//! fragment, routes the input to an instance, and later asks every active
//! instance for its contribution.
//!
//! # Categories
//!
//! - **Null / Boolean / String**: fixed `type` tag ([`TypedGenerator`])
//! - **Number**: `integer`, promoted to `number` once a float or a
//!   `number` schema is seen ([`NumberGenerator`])
//! - **Typeless**: schemas without a `type`, absorbed by the first typed
//!   generator of the node ([`TypelessGenerator`])

mod base;
mod scalar;
mod types;

pub use base::{round_rate, BaseGenerator};
pub use scalar::{NumberGenerator, SchemaGenerator, TypedGenerator, TypelessGenerator};
pub use types::{
    GeneratorKind, KeywordConflict, NumericType, ScalarType, SchemaFragment, RATE_KEYWORD,
    TYPE_KEYWORD,
};

#[cfg(test)]
mod tests;
