//! In-memory `RecordStore` implementation.

use crate::model::person::Person;
use crate::model::tag::Tag;
use crate::store::record_store::{RecordStore, StoreError, StoreResult};

/// Default maximum number of registered tags.
pub const DEFAULT_MAX_TAGS: usize = 30;

/// Ordered person list plus a bounded tag registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
    tags: Vec<Tag>,
    tag_capacity: usize,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::with_tag_capacity(DEFAULT_MAX_TAGS)
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store whose registry holds at most `tag_capacity`
    /// tags.
    pub fn with_tag_capacity(tag_capacity: usize) -> Self {
        Self {
            persons: Vec::new(),
            tags: Vec::new(),
            tag_capacity,
        }
    }

    pub fn tag_capacity(&self) -> usize {
        self.tag_capacity
    }

    fn person_position(&self, target: &Person) -> StoreResult<usize> {
        self.persons
            .iter()
            .position(|p| p == target)
            .ok_or_else(|| StoreError::PersonNotFound(target.name().clone()))
    }

    fn tag_position(&self, target: &Tag) -> StoreResult<usize> {
        self.tags
            .iter()
            .position(|t| t == target)
            .ok_or_else(|| StoreError::TagNotFound(target.clone()))
    }
}

impl RecordStore for AddressBook {
    fn persons(&self) -> &[Person] {
        &self.persons
    }

    fn tags(&self) -> &[Tag] {
        &self.tags
    }

    fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    fn tag_count_would_exceed_limit(&self, additional: usize) -> bool {
        self.tags.len().saturating_add(additional) > self.tag_capacity
    }

    fn add_person(&mut self, person: Person) -> StoreResult<()> {
        if self.has_person(&person) {
            return Err(StoreError::DuplicatePerson(person.name().clone()));
        }
        self.persons.push(person);
        Ok(())
    }

    fn remove_person(&mut self, target: &Person) -> StoreResult<()> {
        let index = self.person_position(target)?;
        self.persons.remove(index);
        Ok(())
    }

    fn replace_person(&mut self, target: &Person, edited: Person) -> StoreResult<()> {
        let index = self.person_position(target)?;
        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && p.is_same_person(&edited));
        if collides {
            return Err(StoreError::DuplicatePerson(edited.name().clone()));
        }
        self.persons[index] = edited;
        Ok(())
    }

    fn add_tag(&mut self, tag: Tag) -> StoreResult<()> {
        if self.has_tag(&tag) {
            return Err(StoreError::DuplicateTag(tag));
        }
        if self.tag_count_would_exceed_limit(1) {
            return Err(StoreError::CapacityExceeded {
                limit: self.tag_capacity,
            });
        }
        self.tags.push(tag);
        Ok(())
    }

    fn delete_tag(&mut self, tag: &Tag) -> StoreResult<()> {
        let index = self.tag_position(tag)?;
        self.tags.remove(index);
        Ok(())
    }

    fn rename_tag(&mut self, existing: &Tag, renamed: Tag) -> StoreResult<()> {
        let index = self.tag_position(existing)?;
        if renamed != *existing && self.has_tag(&renamed) {
            return Err(StoreError::DuplicateTag(renamed));
        }
        self.tags[index] = renamed;
        Ok(())
    }

    fn reset_data(&mut self, persons: Vec<Person>, tags: Vec<Tag>) -> StoreResult<()> {
        for (i, person) in persons.iter().enumerate() {
            if persons[..i].iter().any(|p| p.is_same_person(person)) {
                return Err(StoreError::DuplicatePerson(person.name().clone()));
            }
        }
        for (i, tag) in tags.iter().enumerate() {
            if tags[..i].contains(tag) {
                return Err(StoreError::DuplicateTag(tag.clone()));
            }
        }
        if tags.len() > self.tag_capacity {
            return Err(StoreError::CapacityExceeded {
                limit: self.tag_capacity,
            });
        }

        self.persons = persons;
        self.tags = tags;
        Ok(())
    }
}
