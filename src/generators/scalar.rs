//! Concrete scalar generators

use super::base::BaseGenerator;
use super::types::{
    type_tag, GeneratorKind, KeywordConflict, NumericType, ScalarType, SchemaFragment,
    TYPE_KEYWORD,
};
use serde_json::Value;

// ============================================================================
// Typeless
// ============================================================================

/// Generator for schemas with no `type`
///
/// Only used while a node has no other active generator. It is merged into
/// the first typed generator the node activates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypelessGenerator {
    base: BaseGenerator,
}

impl TypelessGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the fragment has no `type` keyword at all
    pub fn match_schema(schema: &SchemaFragment) -> bool {
        !schema.contains_key(TYPE_KEYWORD)
    }

    /// No value is ever typeless
    pub fn match_object(_value: &Value) -> bool {
        false
    }

    pub fn add_schema(&mut self, schema: &SchemaFragment) -> Vec<KeywordConflict> {
        self.base.add_schema(schema)
    }

    pub fn add_object(&mut self, _value: &Value) {
        self.base.add_object();
    }

    pub fn to_schema(&self, parent_cardinality: u64) -> SchemaFragment {
        self.base.to_schema(parent_cardinality)
    }

    pub fn base(&self) -> &BaseGenerator {
        &self.base
    }
}

// ============================================================================
// Typed (null, boolean, string)
// ============================================================================

/// Generator with a fixed `type` tag
#[derive(Debug, Clone, PartialEq)]
pub struct TypedGenerator {
    scalar_type: ScalarType,
    base: BaseGenerator,
}

impl TypedGenerator {
    /// Create a generator for the given tag
    pub fn new(scalar_type: ScalarType) -> Self {
        Self {
            scalar_type,
            base: BaseGenerator::new(),
        }
    }

    /// Create a `null` generator
    pub fn null() -> Self {
        Self::new(ScalarType::Null)
    }

    /// Create a `boolean` generator
    pub fn boolean() -> Self {
        Self::new(ScalarType::Boolean)
    }

    /// Create a `string` generator
    pub fn string() -> Self {
        Self::new(ScalarType::String)
    }

    pub fn scalar_type(&self) -> ScalarType {
        self.scalar_type
    }

    pub fn add_schema(&mut self, schema: &SchemaFragment) -> Vec<KeywordConflict> {
        self.base.add_schema(schema)
    }

    pub fn add_object(&mut self, _value: &Value) {
        self.base.add_object();
    }

    /// Base keywords and `rate`, then the fixed `type`
    pub fn to_schema(&self, parent_cardinality: u64) -> SchemaFragment {
        let mut schema = self.base.to_schema(parent_cardinality);
        schema.insert(
            TYPE_KEYWORD.to_string(),
            Value::from(self.scalar_type.type_tag()),
        );
        schema
    }

    pub fn base(&self) -> &BaseGenerator {
        &self.base
    }
}

// ============================================================================
// Number (integer → number)
// ============================================================================

/// Generator for `integer` and `number`
///
/// Starts as `integer` and is promoted to `number` by a float value or a
/// `number` schema. The promotion is never undone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberGenerator {
    numeric_type: NumericType,
    base: BaseGenerator,
}

impl NumberGenerator {
    pub fn new() -> Self {
        Self {
            numeric_type: NumericType::Integer,
            base: BaseGenerator::new(),
        }
    }

    /// True iff `type` is `integer` or `number`
    pub fn match_schema(schema: &SchemaFragment) -> bool {
        type_tag(schema).and_then(NumericType::from_type_tag).is_some()
    }

    /// True for any JSON number; booleans are a separate category
    pub fn match_object(value: &Value) -> bool {
        value.is_number()
    }

    pub fn numeric_type(&self) -> NumericType {
        self.numeric_type
    }

    pub fn add_schema(&mut self, schema: &SchemaFragment) -> Vec<KeywordConflict> {
        let conflicts = self.base.add_schema(schema);
        if type_tag(schema) == Some(NumericType::Number.type_tag()) {
            self.promote();
        }
        conflicts
    }

    /// Numbers written with a fraction or exponent promote; integers of any
    /// size do not
    pub fn add_object(&mut self, value: &Value) {
        if value.is_f64() {
            self.promote();
        }
        self.base.add_object();
    }

    pub fn to_schema(&self, parent_cardinality: u64) -> SchemaFragment {
        let mut schema = self.base.to_schema(parent_cardinality);
        schema.insert(
            TYPE_KEYWORD.to_string(),
            Value::from(self.numeric_type.type_tag()),
        );
        schema
    }

    pub fn base(&self) -> &BaseGenerator {
        &self.base
    }

    fn promote(&mut self) {
        self.numeric_type = NumericType::Number;
    }
}

// ============================================================================
// Schema Generator (tagged union)
// ============================================================================

/// Any active generator of a node
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaGenerator {
    Typeless(TypelessGenerator),
    Typed(TypedGenerator),
    Number(NumberGenerator),
}

impl SchemaGenerator {
    /// Category of this generator
    pub fn kind(&self) -> GeneratorKind {
        match self {
            SchemaGenerator::Typeless(_) => GeneratorKind::Typeless,
            SchemaGenerator::Typed(g) => g.scalar_type().kind(),
            SchemaGenerator::Number(_) => GeneratorKind::Number,
        }
    }

    pub fn is_typeless(&self) -> bool {
        matches!(self, SchemaGenerator::Typeless(_))
    }

    pub fn match_schema(&self, schema: &SchemaFragment) -> bool {
        self.kind().match_schema(schema)
    }

    pub fn match_object(&self, value: &Value) -> bool {
        self.kind().match_object(value)
    }

    /// Merge a fragment, returning any keyword conflicts
    pub fn add_schema(&mut self, schema: &SchemaFragment) -> Vec<KeywordConflict> {
        match self {
            SchemaGenerator::Typeless(g) => g.add_schema(schema),
            SchemaGenerator::Typed(g) => g.add_schema(schema),
            SchemaGenerator::Number(g) => g.add_schema(schema),
        }
    }

    pub fn add_object(&mut self, value: &Value) {
        match self {
            SchemaGenerator::Typeless(g) => g.add_object(value),
            SchemaGenerator::Typed(g) => g.add_object(value),
            SchemaGenerator::Number(g) => g.add_object(value),
        }
    }

    pub fn to_schema(&self, parent_cardinality: u64) -> SchemaFragment {
        match self {
            SchemaGenerator::Typeless(g) => g.to_schema(parent_cardinality),
            SchemaGenerator::Typed(g) => g.to_schema(parent_cardinality),
            SchemaGenerator::Number(g) => g.to_schema(parent_cardinality),
        }
    }

    fn base(&self) -> &BaseGenerator {
        match self {
            SchemaGenerator::Typeless(g) => g.base(),
            SchemaGenerator::Typed(g) => g.base(),
            SchemaGenerator::Number(g) => g.base(),
        }
    }

    pub fn cardinality(&self) -> u64 {
        self.base().cardinality()
    }

    pub fn extra_keywords(&self) -> &SchemaFragment {
        self.base().extra_keywords()
    }
}
