//! Record store contract.

use crate::model::person::{Name, Person};
use crate::model::tag::Tag;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level rejection of a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A person with the same identity key already exists.
    DuplicatePerson(Name),
    /// The target person is not in the store.
    PersonNotFound(Name),
    /// A tag with the same name already exists in the registry.
    DuplicateTag(Tag),
    /// The tag is not in the registry.
    TagNotFound(Tag),
    /// The registry would exceed its configured capacity.
    CapacityExceeded { limit: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson(name) => write!(f, "person already exists: {name}"),
            Self::PersonNotFound(name) => write!(f, "person not found: {name}"),
            Self::DuplicateTag(tag) => write!(f, "tag already exists: {tag}"),
            Self::TagNotFound(tag) => write!(f, "tag not found: {tag}"),
            Self::CapacityExceeded { limit } => {
                write!(f, "tag registry is full (limit {limit})")
            }
        }
    }
}

impl Error for StoreError {}

/// Canonical collection of persons and tags.
///
/// Implementations keep persons in insertion order; the model's views rely
/// on that order for display.
pub trait RecordStore {
    /// Persons in insertion order.
    fn persons(&self) -> &[Person];
    /// Registered tags in insertion order.
    fn tags(&self) -> &[Tag];

    /// Returns whether a person with the same identity key is stored.
    fn has_person(&self, person: &Person) -> bool;
    fn has_tag(&self, tag: &Tag) -> bool;
    /// Returns whether registering `additional` more tags would overflow the
    /// registry. Never mutates.
    fn tag_count_would_exceed_limit(&self, additional: usize) -> bool;

    fn add_person(&mut self, person: Person) -> StoreResult<()>;
    fn remove_person(&mut self, target: &Person) -> StoreResult<()>;
    /// Substitutes `edited` for `target` at the same position.
    fn replace_person(&mut self, target: &Person, edited: Person) -> StoreResult<()>;

    fn add_tag(&mut self, tag: Tag) -> StoreResult<()>;
    fn delete_tag(&mut self, tag: &Tag) -> StoreResult<()>;
    /// Substitutes `renamed` for `existing` at the same registry position.
    fn rename_tag(&mut self, existing: &Tag, renamed: Tag) -> StoreResult<()>;

    /// Replaces all persons and tags. Leaves the store untouched on error.
    fn reset_data(&mut self, persons: Vec<Person>, tags: Vec<Tag>) -> StoreResult<()>;

    /// Registry rendered as `[a][b]...` for display.
    fn tags_to_string(&self) -> String {
        self.tags().iter().map(ToString::to_string).collect()
    }
}
