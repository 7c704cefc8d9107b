//! Person (roster record) domain model.
//!
//! # Responsibility
//! - Define the canonical record held by the record store.
//! - Provide copy-on-write helpers used by tag consistency maintenance.
//!
//! # Invariants
//! - Identity is the `(name, phone, email)` composite, see
//!   [`Person::is_same_person`].
//! - A `Person` is never edited in place. Every change builds a replacement
//!   value that the store substitutes for the old one.
//! - Field values are validated on construction and on deserialization.

use crate::model::tag::Tag;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+([+_.\-][A-Za-z0-9]+)*@([A-Za-z0-9]+(-[A-Za-z0-9]+)*\.)*[A-Za-z0-9]{2,}(-[A-Za-z0-9]+)*$",
    )
    .expect("valid email regex")
});

/// Field-level validation error for person values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    InvalidName(String),
    InvalidPhone(String),
    InvalidEmail(String),
    InvalidRsvpStatus(String),
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(value) => write!(
                f,
                "invalid name `{value}`: names contain letters, digits and spaces and must not be blank"
            ),
            Self::InvalidPhone(value) => write!(
                f,
                "invalid phone `{value}`: phones contain only digits and are at least 3 long"
            ),
            Self::InvalidEmail(value) => write!(f, "invalid email `{value}`"),
            Self::InvalidRsvpStatus(value) => write!(
                f,
                "invalid rsvp status `{value}`; expected coming|not_coming|unknown"
            ),
        }
    }
}

impl Error for PersonValidationError {}

fn validated(
    raw: &str,
    pattern: &Regex,
    on_error: fn(String) -> PersonValidationError,
) -> Result<String, PersonValidationError> {
    let trimmed = raw.trim();
    if pattern.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(on_error(trimmed.to_string()))
    }
}

/// Display name of a person.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl AsRef<str>) -> Result<Self, PersonValidationError> {
        validated(
            value.as_ref(),
            &NAME_RE,
            PersonValidationError::InvalidName,
        )
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number, digits only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl AsRef<str>) -> Result<Self, PersonValidationError> {
        validated(
            value.as_ref(),
            &PHONE_RE,
            PersonValidationError::InvalidPhone,
        )
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address in `local@domain` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: impl AsRef<str>) -> Result<Self, PersonValidationError> {
        validated(
            value.as_ref(),
            &EMAIL_RE,
            PersonValidationError::InvalidEmail,
        )
        .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_newtype_conversions {
    ($($ty:ident),+) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = PersonValidationError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::new(value)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }

            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )+
    };
}

string_newtype_conversions!(Name, Phone, Email);

/// Attendance reply of a person for the tracked event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    /// Confirmed attendance.
    Coming,
    /// Declined.
    NotComing,
    /// No reply yet.
    #[default]
    Unknown,
}

impl RsvpStatus {
    /// Stable string id, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Coming => "coming",
            Self::NotComing => "not_coming",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for RsvpStatus {
    type Err = PersonValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "coming" => Ok(Self::Coming),
            "not_coming" => Ok(Self::NotComing),
            "unknown" => Ok(Self::Unknown),
            other => Err(PersonValidationError::InvalidRsvpStatus(other.to_string())),
        }
    }
}

impl Display for RsvpStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical roster record.
///
/// Fields are private so that every change goes through a replacement
/// constructor instead of in-place mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    #[serde(default)]
    rsvp_status: RsvpStatus,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        rsvp_status: RsvpStatus,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            rsvp_status,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn rsvp_status(&self) -> RsvpStatus {
        self.rsvp_status
    }

    /// Tags in name order.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Identity check used for duplicate detection.
    ///
    /// Two persons are the same when name, phone and email all match,
    /// regardless of rsvp status or tags.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name && self.phone == other.phone && self.email == other.email
    }

    /// Returns a replacement carrying `tags` and every other field unchanged.
    pub fn with_tags(&self, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
            ..self.clone()
        }
    }

    /// Returns a replacement with `tag` removed from the tag set.
    pub fn without_tag(&self, tag: &Tag) -> Self {
        self.with_tags(self.tags.iter().filter(|t| *t != tag).cloned())
    }

    /// Returns a replacement whose tag set has `existing` swapped for
    /// `replacement`.
    ///
    /// The tag set is rebuilt from fresh values; no member is edited while
    /// it sits inside the set.
    pub fn with_tag_renamed(&self, existing: &Tag, replacement: &Tag) -> Self {
        let mut tags: BTreeSet<Tag> = self
            .tags
            .iter()
            .filter(|t| *t != existing)
            .cloned()
            .collect();
        if self.tags.contains(existing) {
            tags.insert(replacement.clone());
        }
        Self {
            tags,
            ..self.clone()
        }
    }

    pub fn with_rsvp_status(&self, rsvp_status: RsvpStatus) -> Self {
        Self {
            rsvp_status,
            ..self.clone()
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; RSVP: {}; Tags: ",
            self.name, self.phone, self.email, self.rsvp_status
        )?;
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}
