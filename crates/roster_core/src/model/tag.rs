//! Tag value type.
//!
//! # Responsibility
//! - Represent one named label attachable to persons.
//!
//! # Invariants
//! - A tag's identity is its name; equality, ordering and hashing use it.
//! - A `Tag` is never mutated after construction. Renaming means building a
//!   fresh value with `Tag::new`, so a tag stored inside a set can never go
//!   stale in its bucket.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static TAG_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag name regex"));

/// Validation error for tag names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    /// Name is empty after trimming.
    Empty,
    /// Name contains characters other than ASCII letters and digits.
    NotAlphanumeric(String),
}

impl Display for TagValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "tag name must not be empty"),
            Self::NotAlphanumeric(value) => {
                write!(f, "tag name must be alphanumeric, got `{value}`")
            }
        }
    }
}

impl Error for TagValidationError {}

/// Named label. Compared and stored by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Creates a tag from a user-supplied name.
    ///
    /// Surrounding whitespace is trimmed before validation.
    pub fn new(name: impl AsRef<str>) -> Result<Self, TagValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TagValidationError::Empty);
        }
        if !TAG_NAME_RE.is_match(trimmed) {
            return Err(TagValidationError::NotAlphanumeric(trimmed.to_string()));
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for Tag {
    type Error = TagValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.name
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.name)
    }
}
