use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{ContactMessage, FormKind, Gender, Submission};
use super::fields::RawFields;
use super::state::FormState;
use super::store::{StoreError, SubmissionRepository};
use super::validator::Validator;

/// Fields that are validated but never echoed or stored.
pub const SECRET_FIELDS: [&str; 2] = ["password", "confirmPassword"];

/// Result of processing one POSTed form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; the state carries the echoed values and field errors.
    Rejected(FormState),
    Registered(Submission),
    Contacted(ContactMessage),
}

/// Composes the validator and the store for one form variant.
pub struct FormService<S> {
    kind: FormKind,
    validator: Validator,
    store: Arc<S>,
}

impl<S> FormService<S>
where
    S: SubmissionRepository + 'static,
{
    pub fn new(kind: FormKind, store: Arc<S>) -> Self {
        Self {
            kind,
            validator: Validator::for_kind(kind),
            store,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn blank_form(&self) -> FormState {
        FormState::blank(self.kind.title())
    }

    /// Validate a submission and, when it passes, build and persist the accepted record.
    pub fn submit(&self, fields: RawFields) -> Result<SubmitOutcome, StoreError> {
        let errors = self.validator.validate(&fields);
        if !errors.is_empty() {
            let failing: Vec<&str> = errors.fields().collect();
            debug!(form = %self.kind, fields = ?failing, "submission rejected");
            let values = fields.without(&SECRET_FIELDS);
            return Ok(SubmitOutcome::Rejected(FormState::new(
                self.kind.title(),
                values,
                errors,
            )));
        }

        match self.kind {
            FormKind::Contact => Ok(SubmitOutcome::Contacted(contact_message(&fields))),
            FormKind::Registration | FormKind::StrictRegistration => {
                let submission = registration(&fields);
                self.store.append(submission.clone())?;
                info!(form = %self.kind, email = %submission.email, "submission stored");
                Ok(SubmitOutcome::Registered(submission))
            }
        }
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.store.list()
    }
}

fn text(fields: &RawFields, name: &str) -> String {
    fields.text(name).unwrap_or_default().to_string()
}

fn contact_message(fields: &RawFields) -> ContactMessage {
    ContactMessage {
        name: text(fields, "name"),
        email: text(fields, "email"),
        message: text(fields, "message"),
        submitted_at: Utc::now(),
    }
}

// Only called once every rule passed, so gender parses and terms is set.
fn registration(fields: &RawFields) -> Submission {
    Submission {
        fullname: text(fields, "fullname"),
        email: text(fields, "email"),
        gender: fields
            .text("gender")
            .and_then(Gender::parse)
            .unwrap_or(Gender::Other),
        hobbies: fields.list("hobbies"),
        city: text(fields, "city"),
        agreed: fields.text("terms").is_some_and(|value| !value.is_empty()),
        submitted_at: Utc::now(),
    }
}
