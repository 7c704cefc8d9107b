//! Tag/person consistency maintenance.
//!
//! # Responsibility
//! - Bring every stored person back in line with the tag registry after a
//!   tag is deleted or renamed.
//! - Report which tags are referenced by at least one person.
//!
//! # Invariants
//! - Persons are updated copy-on-write through `RecordStore::replace_person`;
//!   only the tag set of a replacement differs from the original.
//! - Every person is visited once, in store order. Persons that do not carry
//!   the tag are left untouched.
//! - Walks are not transactional: an error stops the walk and persons
//!   already replaced stay replaced.

use crate::model::tag::Tag;
use crate::store::record_store::{RecordStore, StoreResult};
use std::collections::BTreeSet;

/// Removes `tag` from every person carrying it.
///
/// Returns the number of persons replaced.
pub fn remove_tag_from_persons<S: RecordStore>(store: &mut S, tag: &Tag) -> StoreResult<usize> {
    let affected: Vec<_> = store
        .persons()
        .iter()
        .filter(|person| person.has_tag(tag))
        .cloned()
        .collect();

    for person in &affected {
        store.replace_person(person, person.without_tag(tag))?;
    }
    Ok(affected.len())
}

/// Swaps `existing` for `renamed` in every person carrying it.
///
/// Each affected tag set is rebuilt with the fresh `renamed` value, so no
/// set member ever changes identity while stored. Returns the number of
/// persons replaced.
pub fn edit_tag_in_persons<S: RecordStore>(
    store: &mut S,
    existing: &Tag,
    renamed: &Tag,
) -> StoreResult<usize> {
    if existing == renamed {
        return Ok(0);
    }

    let affected: Vec<_> = store
        .persons()
        .iter()
        .filter(|person| person.has_tag(existing))
        .cloned()
        .collect();

    for person in &affected {
        store.replace_person(person, person.with_tag_renamed(existing, renamed))?;
    }
    Ok(affected.len())
}

/// Distinct tags referenced by at least one person.
///
/// Computed by a full scan on every call.
pub fn tags_in_use<S: RecordStore>(store: &S) -> BTreeSet<Tag> {
    store
        .persons()
        .iter()
        .flat_map(|person| person.tags().iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{edit_tag_in_persons, remove_tag_from_persons, tags_in_use};
    use crate::model::person::{Email, Name, Person, Phone, RsvpStatus};
    use crate::model::tag::Tag;
    use crate::store::{AddressBook, RecordStore};

    fn tag(name: &str) -> Tag {
        Tag::new(name).unwrap()
    }

    fn person(name: &str, phone: &str, tags: &[&str]) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new(phone).unwrap(),
            Email::new("guest@example.com").unwrap(),
            RsvpStatus::Coming,
            tags.iter().map(|t| tag(t)),
        )
    }

    fn seeded() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_person(person("Alice", "111", &["VIP"])).unwrap();
        book.add_person(person("Bob", "222", &["VIP", "Student"]))
            .unwrap();
        book.add_person(person("Carol", "333", &[])).unwrap();
        book
    }

    #[test]
    fn remove_only_replaces_persons_carrying_the_tag() {
        let mut book = seeded();
        let carol_before = book.persons()[2].clone();

        let replaced = remove_tag_from_persons(&mut book, &tag("VIP")).unwrap();

        assert_eq!(replaced, 2);
        assert_eq!(book.persons()[2], carol_before);
        assert!(book.persons().iter().all(|p| !p.has_tag(&tag("VIP"))));
    }

    #[test]
    fn edit_with_identical_tag_is_a_no_op() {
        let mut book = seeded();
        let before = book.clone();

        let replaced = edit_tag_in_persons(&mut book, &tag("VIP"), &tag("VIP")).unwrap();

        assert_eq!(replaced, 0);
        assert_eq!(book, before);
    }

    #[test]
    fn edit_merges_into_an_already_present_tag() {
        let mut book = seeded();

        edit_tag_in_persons(&mut book, &tag("VIP"), &tag("Student")).unwrap();

        assert_eq!(
            book.persons()[1].tags().iter().collect::<Vec<_>>(),
            vec![&tag("Student")]
        );
        assert_eq!(
            tags_in_use(&book).into_iter().collect::<Vec<_>>(),
            vec![tag("Student")]
        );
    }
}
