use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three form apps served by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    Contact,
    Registration,
    StrictRegistration,
}

impl FormKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Contact, Self::Registration, Self::StrictRegistration]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Registration => "registration",
            Self::StrictRegistration => "strict-registration",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Contact => "Contact Form",
            Self::Registration | Self::StrictRegistration => "Registration Form",
        }
    }

    /// Registration variants keep accepted entries; the contact form only echoes them.
    pub const fn persists(self) -> bool {
        !matches!(self, Self::Contact)
    }

    pub const fn lists_submissions(self) -> bool {
        self.persists()
    }

    pub const fn exposes_submission_api(self) -> bool {
        matches!(self, Self::StrictRegistration)
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form kind '{0}'")]
pub struct UnknownFormKind(pub String);

impl FromStr for FormKind {
    type Err = UnknownFormKind;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "contact" => Ok(Self::Contact),
            "registration" => Ok(Self::Registration),
            "strict-registration" | "strict_registration" | "strict" => {
                Ok(Self::StrictRegistration)
            }
            _ => Err(UnknownFormKind(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const fn ordered() -> [Self; 3] {
        [Self::Male, Self::Female, Self::Other]
    }

    pub const fn value(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Accepts the radio values and their single-letter shorthands.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            "other" | "o" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Cities offered by the registration select. Validation only requires a non-empty choice.
pub const CITY_OPTIONS: [&str; 5] = ["NYC", "Los Angeles", "Chicago", "Houston", "Seattle"];

pub const HOBBY_OPTIONS: [&str; 4] = ["Reading", "Sports", "Music", "Travel"];

/// One accepted registration. Passwords never reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub fullname: String,
    pub email: String,
    pub gender: Gender,
    #[serde(default)]
    pub hobbies: Vec<String>,
    pub city: String,
    pub agreed: bool,
    pub submitted_at: DateTime<Utc>,
}

/// Accepted contact-form message; rendered back once and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}
