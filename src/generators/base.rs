//! Shared generator state: cardinality and extra keywords

use super::types::{KeywordConflict, SchemaFragment, RATE_KEYWORD, TYPE_KEYWORD};
use serde_json::Value;

/// State common to every generator
///
/// Extra keywords come from schema merges only; objects never add any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseGenerator {
    /// Number of objects added directly
    cardinality: u64,
    /// Non-`type` keywords, first value wins
    extra_keywords: SchemaFragment,
}

impl BaseGenerator {
    /// Create an empty generator state
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects added so far
    pub fn cardinality(&self) -> u64 {
        self.cardinality
    }

    /// Keywords merged from schema fragments
    pub fn extra_keywords(&self) -> &SchemaFragment {
        &self.extra_keywords
    }

    /// Merge every non-`type` keyword of the fragment
    ///
    /// New keywords are stored verbatim. A keyword already present with a
    /// different value keeps the stored value and yields a conflict.
    pub fn add_schema(&mut self, schema: &SchemaFragment) -> Vec<KeywordConflict> {
        let mut conflicts = Vec::new();

        for (keyword, value) in schema {
            if keyword == TYPE_KEYWORD {
                continue;
            }
            match self.extra_keywords.get(keyword) {
                None => {
                    self.extra_keywords.insert(keyword.clone(), value.clone());
                }
                Some(existing) if existing != value => {
                    conflicts.push(KeywordConflict::new(
                        keyword.clone(),
                        existing.clone(),
                        value.clone(),
                    ));
                }
                Some(_) => {}
            }
        }

        conflicts
    }

    /// Count one observed object
    pub fn add_object(&mut self) {
        self.cardinality += 1;
    }

    /// Project the state into a new fragment
    ///
    /// `rate` is only emitted under a parent that saw at least one object.
    pub fn to_schema(&self, parent_cardinality: u64) -> SchemaFragment {
        let mut schema = self.extra_keywords.clone();
        if parent_cardinality > 0 {
            let rate = round_rate(self.cardinality as f64 / parent_cardinality as f64);
            schema.insert(RATE_KEYWORD.to_string(), Value::from(rate));
        }
        schema
    }
}

/// Round a rate to 3 decimal places
///
/// Rounds the exact binary value of the double, not its shortest decimal
/// form, so the result matches the reference output digit for digit.
pub fn round_rate(rate: f64) -> f64 {
    format!("{rate:.3}").parse().unwrap_or(rate)
}
