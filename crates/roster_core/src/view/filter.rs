//! Person predicates.

use crate::model::person::{Person, RsvpStatus};
use crate::model::tag::Tag;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::rc::Rc;

/// Rejection of a malformed filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidFilter(pub String);

impl Display for InvalidFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid filter: {}", self.0)
    }
}

impl Error for InvalidFilter {}

type PersonTest = Rc<dyn Fn(&Person) -> bool>;

/// Boolean test over a person.
#[derive(Clone)]
pub enum PersonFilter {
    /// Canonical "show everyone" predicate. Applying it resets composition.
    ShowAll,
    /// Any keyword equals a whole word of the name, ignoring case.
    NameContainsKeywords(Vec<String>),
    /// Person carries the tag.
    HasTag(Tag),
    /// Person replied with the given status.
    RsvpIs(RsvpStatus),
    /// Both sides must hold.
    And(Box<PersonFilter>, Box<PersonFilter>),
    /// Caller-supplied test. Two custom filters are equal only when they
    /// share the same closure.
    Custom { label: String, test: PersonTest },
}

impl PersonFilter {
    pub fn name_contains<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NameContainsKeywords(keywords.into_iter().map(Into::into).collect())
    }

    pub fn custom(label: impl Into<String>, test: impl Fn(&Person) -> bool + 'static) -> Self {
        Self::Custom {
            label: label.into(),
            test: Rc::new(test),
        }
    }

    pub fn is_show_all(&self) -> bool {
        matches!(self, Self::ShowAll)
    }

    /// Conjunction of `self` and `other`. `ShowAll` is the identity.
    pub fn and(self, other: PersonFilter) -> Self {
        match (self, other) {
            (Self::ShowAll, other) => other,
            (this, Self::ShowAll) => this,
            (this, other) => Self::And(Box::new(this), Box::new(other)),
        }
    }

    /// Checks the filter is well formed.
    ///
    /// # Errors
    /// - Keyword filters with no keywords or with blank keywords.
    /// - Custom filters with a blank label.
    pub fn validate(&self) -> Result<(), InvalidFilter> {
        match self {
            Self::ShowAll | Self::HasTag(_) | Self::RsvpIs(_) => Ok(()),
            Self::NameContainsKeywords(keywords) => {
                if keywords.is_empty() {
                    return Err(InvalidFilter("keyword list must not be empty".to_string()));
                }
                if keywords.iter().any(|k| k.trim().is_empty()) {
                    return Err(InvalidFilter("keywords must not be blank".to_string()));
                }
                Ok(())
            }
            Self::And(left, right) => {
                left.validate()?;
                right.validate()
            }
            Self::Custom { label, .. } => {
                if label.trim().is_empty() {
                    return Err(InvalidFilter("custom filter label must not be blank".to_string()));
                }
                Ok(())
            }
        }
    }

    pub fn test(&self, person: &Person) -> bool {
        match self {
            Self::ShowAll => true,
            Self::NameContainsKeywords(keywords) => keywords
                .iter()
                .any(|keyword| contains_word_ignore_case(person.name().as_str(), keyword)),
            Self::HasTag(tag) => person.has_tag(tag),
            Self::RsvpIs(status) => person.rsvp_status() == *status,
            Self::And(left, right) => left.test(person) && right.test(person),
            Self::Custom { test, .. } => test(person),
        }
    }
}

fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim().to_lowercase();
    sentence
        .split_whitespace()
        .any(|candidate| candidate.to_lowercase() == word)
}

impl PartialEq for PersonFilter {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ShowAll, Self::ShowAll) => true,
            (Self::NameContainsKeywords(a), Self::NameContainsKeywords(b)) => a == b,
            (Self::HasTag(a), Self::HasTag(b)) => a == b,
            (Self::RsvpIs(a), Self::RsvpIs(b)) => a == b,
            (Self::And(al, ar), Self::And(bl, br)) => al == bl && ar == br,
            (
                Self::Custom {
                    label: la,
                    test: ta,
                },
                Self::Custom {
                    label: lb,
                    test: tb,
                },
            ) => la == lb && Rc::ptr_eq(ta, tb),
            _ => false,
        }
    }
}

impl Debug for PersonFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShowAll => write!(f, "ShowAll"),
            Self::NameContainsKeywords(keywords) => {
                f.debug_tuple("NameContainsKeywords").field(keywords).finish()
            }
            Self::HasTag(tag) => f.debug_tuple("HasTag").field(tag).finish(),
            Self::RsvpIs(status) => f.debug_tuple("RsvpIs").field(status).finish(),
            Self::And(left, right) => f.debug_tuple("And").field(left).field(right).finish(),
            Self::Custom { label, .. } => f.debug_struct("Custom").field("label", label).finish(),
        }
    }
}
