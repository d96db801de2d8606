//! Server-side HTML for the form apps.
//!
//! Rendering is a pure function of the page value: no I/O, no clock reads, and every
//! user-supplied string is escaped before it reaches the markup.

mod html;
mod pages;

use crate::forms::{ContactMessage, FormKind, FormState, Submission};

/// A template paired with the data it needs.
#[derive(Debug, Clone, Copy)]
pub enum Page<'a> {
    Form {
        kind: FormKind,
        state: &'a FormState,
    },
    ContactResult(&'a ContactMessage),
    RegistrationSuccess(&'a Submission),
    SubmissionList(&'a [Submission]),
}

impl Page<'_> {
    pub fn template_name(&self) -> &'static str {
        match self {
            Page::Form {
                kind: FormKind::Contact,
                ..
            } => "index",
            Page::Form { .. } => "form",
            Page::ContactResult(_) => "result",
            Page::RegistrationSuccess(_) => "success",
            Page::SubmissionList(_) => "submissions",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Form { state, .. } => state.title.as_str(),
            Page::ContactResult(_) => "Submission Received",
            Page::RegistrationSuccess(_) => "Submission Successful",
            Page::SubmissionList(_) => "All Submissions",
        }
    }
}

pub fn render(page: &Page<'_>) -> String {
    let body = match *page {
        Page::Form {
            kind: FormKind::Contact,
            state,
        } => pages::contact_form(state),
        Page::Form { kind, state } => pages::registration_form(kind, state),
        Page::ContactResult(message) => pages::contact_result(message),
        Page::RegistrationSuccess(submission) => pages::registration_success(submission),
        Page::SubmissionList(submissions) => pages::submission_list(submissions),
    };
    html::layout(page.title(), &body)
}
