use std::sync::Arc;

use super::common::*;
use crate::forms::{
    FormKind, FormService, RawFields, StoreError, SubmissionRepository, SubmitOutcome,
};

#[test]
fn accepted_registration_is_stored_without_password() {
    let (service, store) = memory_service(FormKind::Registration);

    let outcome = service
        .submit(registration_fields())
        .expect("store accepts");
    let SubmitOutcome::Registered(submission) = outcome else {
        panic!("expected a stored registration");
    };

    assert!(submission.agreed);
    assert_eq!(submission.gender, crate::forms::Gender::Female);
    assert!(submission.hobbies.is_empty());
    assert_eq!(store.list(), vec![submission.clone()]);

    let encoded = serde_json::to_string(&submission).expect("encode");
    assert!(!encoded.contains("Secret1!"));
}

#[test]
fn rejected_submission_echoes_values_but_not_secrets() {
    let (service, store) = memory_service(FormKind::StrictRegistration);

    let mut fields = registration_with("email", Some("bad"));
    fields.push("hobbies", "Music");
    let outcome = service.submit(fields).expect("no store access");
    let SubmitOutcome::Rejected(state) = outcome else {
        panic!("expected a rejection");
    };

    assert_eq!(state.title, "Registration Form");
    assert_eq!(state.error("email"), Some("Enter a valid email address"));
    assert_eq!(state.value("email"), "bad");
    assert_eq!(state.values.list("hobbies"), vec!["Music".to_string()]);
    assert!(!state.values.contains("password"));
    assert!(!state.values.contains("confirmPassword"));
    assert!(store.list().is_empty());
}

#[test]
fn contact_form_never_touches_the_store() {
    let (service, store) = memory_service(FormKind::Contact);

    let outcome = service.submit(contact_fields()).expect("contact accepted");
    let SubmitOutcome::Contacted(message) = outcome else {
        panic!("expected a contact message");
    };

    assert_eq!(message.name, "Ada Lovelace");
    assert!(store.list().is_empty());
}

#[test]
fn multiple_hobbies_are_kept_in_order() {
    let (service, _) = memory_service(FormKind::Registration);
    let mut fields = registration_fields();
    fields.push("hobbies", "Travel");
    fields.push("hobbies", "Reading");

    let Ok(SubmitOutcome::Registered(submission)) = service.submit(fields) else {
        panic!("registration should be accepted");
    };
    assert_eq!(submission.hobbies, vec!["Travel", "Reading"]);
}

#[test]
fn store_failures_surface_to_the_caller() {
    let service = FormService::new(FormKind::Registration, Arc::new(ReadOnlyStore));
    let err = service
        .submit(registration_fields())
        .expect_err("read-only store");
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn blank_form_uses_variant_title() {
    let (service, _) = memory_service(FormKind::Contact);
    let state = service.blank_form();
    assert_eq!(state.title, "Contact Form");
    assert!(!state.has_errors());
    assert_eq!(state.values, RawFields::default());
}
