use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::FormKind;
use super::fields::RawFields;
use super::rules::{rule_table, FieldRule};

/// Failing fields mapped to their message. An absent key means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn record(&mut self, rule: &FieldRule) {
        self.0
            .entry(rule.field.to_string())
            .or_insert_with(|| rule.message.to_string());
    }
}

/// Stateless evaluator over a form's rule table.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    rules: &'static [FieldRule],
}

impl Validator {
    pub fn for_kind(kind: FormKind) -> Self {
        Self {
            rules: rule_table(kind),
        }
    }

    pub fn rules(&self) -> &'static [FieldRule] {
        self.rules
    }

    /// Evaluates rules in table order; the first failing rule per field supplies its message.
    pub fn validate(&self, fields: &RawFields) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for rule in self.rules {
            if errors.get(rule.field).is_some() {
                continue;
            }
            if !rule.passes(fields) {
                errors.record(rule);
            }
        }
        errors
    }
}
