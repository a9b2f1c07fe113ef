//! Generator registry for a single schema position

use crate::error::{Error, Result};
use crate::generators::{
    GeneratorKind, KeywordConflict, SchemaFragment, SchemaGenerator, TYPE_KEYWORD,
};
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::debug;

/// Keyword listing alternative subschemas
const ANY_OF_KEYWORD: &str = "anyOf";

/// Active generators for one schema position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
    /// Generators in activation order
    active_generators: Vec<SchemaGenerator>,
    /// Objects added to this node
    cardinality: u64,
}

impl SchemaNode {
    /// Create an empty node
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects added to this node
    pub fn cardinality(&self) -> u64 {
        self.cardinality
    }

    /// Active generators, in activation order
    pub fn generators(&self) -> &[SchemaGenerator] {
        &self.active_generators
    }

    /// Check whether nothing has been added yet
    pub fn is_empty(&self) -> bool {
        self.active_generators.is_empty()
    }

    /// Route an object to the generator of its category
    pub fn add_object(&mut self, value: &Value) -> Result<()> {
        let index = match self
            .active_generators
            .iter()
            .position(|g| g.match_object(value))
        {
            Some(index) => index,
            None => {
                let kind = GeneratorKind::for_object(value)
                    .ok_or_else(|| Error::no_match_for_object(value))?;
                self.activate(kind).0
            }
        };

        self.active_generators[index].add_object(value);
        self.cardinality += 1;
        Ok(())
    }

    /// Merge a schema fragment into this node
    ///
    /// `anyOf` alternatives and list-valued `type`s are split into one
    /// subschema per alternative before routing. Every subschema must have a
    /// matching category, otherwise the node is left untouched.
    pub fn add_schema(&mut self, schema: &SchemaFragment) -> Result<Vec<KeywordConflict>> {
        let subschemas = subschemas(schema)?;
        if let Some(unmatched) = subschemas.iter().find(|subschema| {
            !self.active_generators.iter().any(|g| g.match_schema(subschema))
                && GeneratorKind::for_schema(subschema).is_none()
        }) {
            return Err(Error::no_match_for_schema(unmatched));
        }

        let mut conflicts = Vec::new();
        for subschema in subschemas {
            let index = match self
                .active_generators
                .iter()
                .position(|g| g.match_schema(&subschema))
            {
                Some(index) => index,
                None => {
                    let kind = GeneratorKind::for_schema(&subschema)
                        .ok_or_else(|| Error::no_match_for_schema(&subschema))?;
                    let (index, absorbed) = self.activate(kind);
                    conflicts.extend(absorbed);
                    index
                }
            };
            conflicts.extend(self.active_generators[index].add_schema(&subschema));
        }

        Ok(conflicts)
    }

    /// Emit the merged schema for this node
    ///
    /// Fragments consisting only of `type` are unioned; anything else is
    /// listed under `anyOf`.
    pub fn to_schema(&self, parent_cardinality: u64) -> SchemaFragment {
        let mut types = BTreeSet::new();
        let mut schemas = Vec::new();

        for generator in &self.active_generators {
            let schema = generator.to_schema(parent_cardinality);
            match schema.get(TYPE_KEYWORD).and_then(Value::as_str) {
                Some(tag) if schema.len() == 1 => {
                    types.insert(tag.to_string());
                }
                _ => schemas.push(schema),
            }
        }

        if !types.is_empty() {
            let type_value = if types.len() == 1 {
                Value::from(types.into_iter().next().unwrap_or_default())
            } else {
                Value::from(types.into_iter().collect::<Vec<_>>())
            };
            let mut union = SchemaFragment::new();
            union.insert(TYPE_KEYWORD.to_string(), type_value);
            schemas.insert(0, union);
        }

        match schemas.len() {
            0 => SchemaFragment::new(),
            1 => schemas.remove(0),
            _ => {
                let mut any_of = SchemaFragment::new();
                any_of.insert(
                    ANY_OF_KEYWORD.to_string(),
                    Value::Array(schemas.into_iter().map(Value::Object).collect()),
                );
                any_of
            }
        }
    }

    /// Activate a generator of the given category
    ///
    /// A typeless generator left behind by earlier schemas is folded into the
    /// new one. Returns the new generator's index and any conflicts from the
    /// fold.
    fn activate(&mut self, kind: GeneratorKind) -> (usize, Vec<KeywordConflict>) {
        debug!(%kind, "activating generator");
        let mut generator = kind.instantiate();
        let mut conflicts = Vec::new();

        if kind != GeneratorKind::Typeless
            && self
                .active_generators
                .last()
                .is_some_and(SchemaGenerator::is_typeless)
        {
            if let Some(typeless) = self.active_generators.pop() {
                debug!(%kind, "absorbing typeless generator");
                conflicts = generator.add_schema(&typeless.to_schema(0));
            }
        }

        self.active_generators.push(generator);
        (self.active_generators.len() - 1, conflicts)
    }
}

/// Split a fragment into the subschemas it stands for
fn subschemas(schema: &SchemaFragment) -> Result<Vec<SchemaFragment>> {
    if let Some(any_of) = schema.get(ANY_OF_KEYWORD) {
        let alternatives = any_of
            .as_array()
            .ok_or_else(|| Error::invalid_schema("'anyOf' must be an array"))?;

        let mut result = Vec::new();
        for alternative in alternatives {
            let alternative = alternative
                .as_object()
                .ok_or_else(|| Error::invalid_schema("'anyOf' members must be objects"))?;
            result.extend(subschemas(alternative)?);
        }
        return Ok(result);
    }

    if let Some(Value::Array(types)) = schema.get(TYPE_KEYWORD) {
        let other_keywords: SchemaFragment = schema
            .iter()
            .filter(|(keyword, _)| keyword.as_str() != TYPE_KEYWORD)
            .map(|(keyword, value)| (keyword.clone(), value.clone()))
            .collect();

        return Ok(types
            .iter()
            .map(|tag| {
                let mut subschema = SchemaFragment::new();
                subschema.insert(TYPE_KEYWORD.to_string(), tag.clone());
                subschema.extend(other_keywords.clone());
                subschema
            })
            .collect());
    }

    Ok(vec![schema.clone()])
}
