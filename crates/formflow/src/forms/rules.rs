//! Declarative field rules shared by the server validator and anything that presents
//! them to a browser (the `/api/rules` payload and the password hint list).

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::domain::{FormKind, Gender};
use super::fields::RawFields;

pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Predicate applied to one submitted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Check {
    Required,
    MinTrimmedLength { min: usize },
    MinLength { min: usize },
    Email { pattern: &'static str },
    ContainsUppercase,
    ContainsDigit,
    ContainsSpecial { characters: &'static str },
    MatchesField { other: &'static str },
    GenderOption,
    Truthy,
}

impl Check {
    fn passes(&self, value: Option<&str>, fields: &RawFields) -> bool {
        let present = value.unwrap_or_default();
        match *self {
            Check::Required | Check::Truthy => !present.is_empty(),
            Check::MinTrimmedLength { min } => present.trim().chars().count() >= min,
            Check::MinLength { min } => present.chars().count() >= min,
            Check::Email { .. } => email_regex().is_match(present),
            Check::ContainsUppercase => present.chars().any(|c| c.is_ascii_uppercase()),
            Check::ContainsDigit => present.chars().any(|c| c.is_ascii_digit()),
            Check::ContainsSpecial { characters } => {
                present.chars().any(|c| characters.contains(c))
            }
            Check::MatchesField { other } => value == fields.text(other),
            Check::GenderOption => Gender::parse(present).is_some(),
        }
    }
}

/// One `{rule-id, predicate, message}` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldRule {
    pub id: &'static str,
    pub field: &'static str,
    pub check: Check,
    pub message: &'static str,
    /// Element id of the live criteria hint rendered next to the field, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

impl FieldRule {
    const fn new(id: &'static str, field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            id,
            field,
            check,
            message,
            hint: None,
        }
    }

    const fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn passes(&self, fields: &RawFields) -> bool {
        self.check.passes(fields.text(self.field), fields)
    }
}

const CONTACT_RULES: [FieldRule; 3] = [
    FieldRule::new(
        "name.min_length",
        "name",
        Check::MinTrimmedLength { min: 2 },
        "Name must be at least 2 chars",
    ),
    FieldRule::new(
        "email.format",
        "email",
        Check::Email {
            pattern: EMAIL_PATTERN,
        },
        "Enter a valid email",
    ),
    FieldRule::new(
        "message.min_length",
        "message",
        Check::MinTrimmedLength { min: 5 },
        "Message must be at least 5 chars",
    ),
];

const FULLNAME_RULE: FieldRule = FieldRule::new(
    "fullname.min_length",
    "fullname",
    Check::MinTrimmedLength { min: 2 },
    "Full name must be at least 2 characters",
);

const REGISTRATION_EMAIL_RULE: FieldRule = FieldRule::new(
    "email.format",
    "email",
    Check::Email {
        pattern: EMAIL_PATTERN,
    },
    "Enter a valid email address",
);

const CHOICE_RULES: [FieldRule; 6] = [
    FieldRule::new(
        "confirmPassword.required",
        "confirmPassword",
        Check::Required,
        "Please confirm your password",
    ),
    FieldRule::new(
        "confirmPassword.matches",
        "confirmPassword",
        Check::MatchesField { other: "password" },
        "Passwords do not match",
    ),
    FieldRule::new(
        "gender.required",
        "gender",
        Check::Required,
        "Please select a gender",
    ),
    FieldRule::new(
        "gender.option",
        "gender",
        Check::GenderOption,
        "Please select a gender",
    ),
    FieldRule::new("city.required", "city", Check::Required, "Please select a city"),
    FieldRule::new(
        "terms.accepted",
        "terms",
        Check::Truthy,
        "You must agree to the terms",
    ),
];

const REGISTRATION_RULES: [FieldRule; 9] = [
    FULLNAME_RULE,
    REGISTRATION_EMAIL_RULE,
    FieldRule::new(
        "password.min_length",
        "password",
        Check::MinLength { min: 6 },
        "Password must be at least 6 characters",
    ),
    CHOICE_RULES[0],
    CHOICE_RULES[1],
    CHOICE_RULES[2],
    CHOICE_RULES[3],
    CHOICE_RULES[4],
    CHOICE_RULES[5],
];

const STRICT_REGISTRATION_RULES: [FieldRule; 13] = [
    FULLNAME_RULE,
    REGISTRATION_EMAIL_RULE,
    FieldRule::new(
        "password.required",
        "password",
        Check::Required,
        "Password is required",
    ),
    FieldRule::new(
        "password.min_length",
        "password",
        Check::MinLength { min: 8 },
        "Password must be at least 8 characters",
    )
    .with_hint("hint-length"),
    FieldRule::new(
        "password.uppercase",
        "password",
        Check::ContainsUppercase,
        "Password must contain at least 1 uppercase letter",
    )
    .with_hint("hint-uppercase"),
    FieldRule::new(
        "password.digit",
        "password",
        Check::ContainsDigit,
        "Password must contain at least 1 number",
    )
    .with_hint("hint-number"),
    FieldRule::new(
        "password.special",
        "password",
        Check::ContainsSpecial {
            characters: SPECIAL_CHARACTERS,
        },
        "Password must contain at least 1 special character",
    )
    .with_hint("hint-special"),
    CHOICE_RULES[0],
    CHOICE_RULES[1],
    CHOICE_RULES[2],
    CHOICE_RULES[3],
    CHOICE_RULES[4],
    CHOICE_RULES[5],
];

/// Rules for a form, in evaluation order.
pub fn rule_table(kind: FormKind) -> &'static [FieldRule] {
    match kind {
        FormKind::Contact => &CONTACT_RULES,
        FormKind::Registration => &REGISTRATION_RULES,
        FormKind::StrictRegistration => &STRICT_REGISTRATION_RULES,
    }
}

/// Rules carrying a hint id, for rendering the live criteria checklist.
pub fn hinted_rules(kind: FormKind, field: &str) -> impl Iterator<Item = &'static FieldRule> + '_ {
    rule_table(kind)
        .iter()
        .filter(move |rule| rule.field == field && rule.hint.is_some())
}
