//! Generator types

use serde_json::{Map, Value};
use std::fmt;

use super::scalar::{NumberGenerator, SchemaGenerator, TypedGenerator, TypelessGenerator};

/// A JSON-Schema-like object, keyword → constraint
pub type SchemaFragment = Map<String, Value>;

/// Reserved keyword owned by the generators themselves
pub const TYPE_KEYWORD: &str = "type";

/// Keyword carrying the observed frequency of a branch
pub const RATE_KEYWORD: &str = "rate";

/// Read the `type` keyword of a fragment when it is a single string
pub(crate) fn type_tag(schema: &SchemaFragment) -> Option<&str> {
    schema.get(TYPE_KEYWORD).and_then(Value::as_str)
}

// ============================================================================
// Generator Kind (dispatch table)
// ============================================================================

/// Closed set of generator categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    Null,
    Boolean,
    Number,
    String,
    Typeless,
}

impl GeneratorKind {
    /// Every category, in the order the registry tries them
    pub const ALL: [GeneratorKind; 5] = [
        GeneratorKind::Null,
        GeneratorKind::Boolean,
        GeneratorKind::Number,
        GeneratorKind::String,
        GeneratorKind::Typeless,
    ];

    /// Check whether this category handles the given schema fragment
    pub fn match_schema(self, schema: &SchemaFragment) -> bool {
        match self {
            GeneratorKind::Null => ScalarType::Null.match_schema(schema),
            GeneratorKind::Boolean => ScalarType::Boolean.match_schema(schema),
            GeneratorKind::String => ScalarType::String.match_schema(schema),
            GeneratorKind::Number => NumberGenerator::match_schema(schema),
            GeneratorKind::Typeless => TypelessGenerator::match_schema(schema),
        }
    }

    /// Check whether this category handles the given value
    pub fn match_object(self, value: &Value) -> bool {
        match self {
            GeneratorKind::Null => ScalarType::Null.match_object(value),
            GeneratorKind::Boolean => ScalarType::Boolean.match_object(value),
            GeneratorKind::String => ScalarType::String.match_object(value),
            GeneratorKind::Number => NumberGenerator::match_object(value),
            GeneratorKind::Typeless => TypelessGenerator::match_object(value),
        }
    }

    /// Create a fresh, initialized generator of this category
    pub fn instantiate(self) -> SchemaGenerator {
        match self {
            GeneratorKind::Null => SchemaGenerator::Typed(TypedGenerator::new(ScalarType::Null)),
            GeneratorKind::Boolean => {
                SchemaGenerator::Typed(TypedGenerator::new(ScalarType::Boolean))
            }
            GeneratorKind::String => {
                SchemaGenerator::Typed(TypedGenerator::new(ScalarType::String))
            }
            GeneratorKind::Number => SchemaGenerator::Number(NumberGenerator::new()),
            GeneratorKind::Typeless => SchemaGenerator::Typeless(TypelessGenerator::new()),
        }
    }

    /// First category matching the schema fragment
    pub fn for_schema(schema: &SchemaFragment) -> Option<GeneratorKind> {
        Self::ALL.into_iter().find(|kind| kind.match_schema(schema))
    }

    /// First category matching the value
    pub fn for_object(value: &Value) -> Option<GeneratorKind> {
        Self::ALL.into_iter().find(|kind| kind.match_object(value))
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::Null => write!(f, "null"),
            GeneratorKind::Boolean => write!(f, "boolean"),
            GeneratorKind::Number => write!(f, "number"),
            GeneratorKind::String => write!(f, "string"),
            GeneratorKind::Typeless => write!(f, "typeless"),
        }
    }
}

// ============================================================================
// Scalar Type
// ============================================================================

/// Fixed `type` tag of a [`TypedGenerator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Null,
    Boolean,
    String,
}

impl ScalarType {
    /// The `type` keyword value
    pub fn type_tag(self) -> &'static str {
        match self {
            ScalarType::Null => "null",
            ScalarType::Boolean => "boolean",
            ScalarType::String => "string",
        }
    }

    /// True iff the fragment's `type` is exactly this tag
    pub fn match_schema(self, schema: &SchemaFragment) -> bool {
        type_tag(schema) == Some(self.type_tag())
    }

    /// True iff the value belongs to this category
    pub fn match_object(self, value: &Value) -> bool {
        match self {
            ScalarType::Null => value.is_null(),
            ScalarType::Boolean => value.is_boolean(),
            ScalarType::String => value.is_string(),
        }
    }

    /// The generator category this tag belongs to
    pub fn kind(self) -> GeneratorKind {
        match self {
            ScalarType::Null => GeneratorKind::Null,
            ScalarType::Boolean => GeneratorKind::Boolean,
            ScalarType::String => GeneratorKind::String,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

// ============================================================================
// Numeric Type
// ============================================================================

/// Committed subtype of a [`NumberGenerator`]
///
/// `Number` is a strict superset of `Integer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumericType {
    #[default]
    Integer,
    Number,
}

impl NumericType {
    /// The `type` keyword value
    pub fn type_tag(self) -> &'static str {
        match self {
            NumericType::Integer => "integer",
            NumericType::Number => "number",
        }
    }

    /// Parse a `type` keyword value
    pub fn from_type_tag(tag: &str) -> Option<Self> {
        match tag {
            "integer" => Some(NumericType::Integer),
            "number" => Some(NumericType::Number),
            _ => None,
        }
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

// ============================================================================
// Keyword Conflict
// ============================================================================

/// Two merged fragments disagree on a non-type keyword
///
/// The first value seen is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordConflict {
    /// Conflicting keyword
    pub keyword: String,
    /// Value already stored, and still in effect
    pub kept: Value,
    /// Incoming value that was dropped
    pub discarded: Value,
}

impl KeywordConflict {
    /// Create a new conflict record
    pub fn new(keyword: impl Into<String>, kept: Value, discarded: Value) -> Self {
        Self {
            keyword: keyword.into(),
            kept,
            discarded,
        }
    }
}

impl fmt::Display for KeywordConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Schema incompatible. Keyword '{}' has conflicting values ({} vs. {}). Using {}",
            self.keyword, self.kept, self.discarded, self.kept
        )
    }
}
