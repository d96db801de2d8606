use serde::Serialize;

use super::fields::RawFields;
use super::validator::FieldErrors;

/// Per-request bundle handed to the renderer once and then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub title: String,
    pub values: RawFields,
    pub errors: FieldErrors,
}

impl FormState {
    pub fn new(title: impl Into<String>, values: RawFields, errors: FieldErrors) -> Self {
        Self {
            title: title.into(),
            values,
            errors,
        }
    }

    pub fn blank(title: impl Into<String>) -> Self {
        Self::new(title, RawFields::default(), FieldErrors::default())
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.text(field).unwrap_or_default()
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
