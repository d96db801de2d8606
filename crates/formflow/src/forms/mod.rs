//! Form intake: field rules, validation, submission storage, and the HTTP router.
//!
//! One library serves three variants (`contact`, `registration`, `strict-registration`).
//! They differ only in their rule table and in which listing endpoints they expose.

pub mod domain;
pub mod fields;
pub mod router;
pub mod rules;
pub mod service;
pub mod state;
pub mod store;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{
    ContactMessage, FormKind, Gender, Submission, UnknownFormKind, CITY_OPTIONS, HOBBY_OPTIONS,
};
pub use fields::RawFields;
pub use router::form_router;
pub use rules::{rule_table, Check, FieldRule};
pub use service::{FormService, SubmitOutcome, SECRET_FIELDS};
pub use state::FormState;
pub use store::{InMemoryStore, JsonFileStore, StoreError, SubmissionRepository};
pub use validator::{FieldErrors, Validator};
