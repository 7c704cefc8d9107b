use roster_core::{
    AddressBook, Email, ModelError, ModelManager, Name, Person, Phone, RecordStore,
    RsvpStatus, StoreError, Tag, TagValidationError, UserPrefs,
};
use std::collections::BTreeSet;

fn tag(name: &str) -> Tag {
    Tag::new(name).unwrap()
}

fn person(name: &str, phone: &str, tags: &[&str]) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new(format!("{}@example.com", name.to_lowercase())).unwrap(),
        RsvpStatus::Coming,
        tags.iter().map(|t| tag(t)),
    )
}

fn alice_and_bob() -> ModelManager {
    let mut book = AddressBook::new();
    book.add_tag(tag("VIP")).unwrap();
    book.add_tag(tag("Student")).unwrap();
    book.add_person(person("Alice", "111", &["VIP"])).unwrap();
    book.add_person(person("Bob", "222", &["VIP", "Student"]))
        .unwrap();
    ModelManager::new(book, UserPrefs::default())
}

fn names(set: &BTreeSet<Tag>) -> Vec<&str> {
    set.iter().map(Tag::name).collect()
}

#[test]
fn remove_tag_strips_it_from_every_person_and_keeps_other_fields() {
    let mut model = alice_and_bob();
    let before: Vec<Person> = model.full_person_list().to_vec();

    let replaced = model.remove_tag_from_persons(&tag("VIP")).unwrap();

    assert_eq!(replaced, 2);
    let after = model.full_person_list();
    assert!(after.iter().all(|p| !p.has_tag(&tag("VIP"))));
    assert!(after[1].has_tag(&tag("Student")));
    for (old, new) in before.iter().zip(after) {
        assert!(old.is_same_person(new));
        assert_eq!(old.rsvp_status(), new.rsvp_status());
    }
}

#[test]
fn remove_tag_does_not_touch_the_registry() {
    let mut model = alice_and_bob();
    model.remove_tag_from_persons(&tag("VIP")).unwrap();
    assert!(model.has_tag(&tag("VIP")));
}

#[test]
fn delete_then_strip_leaves_no_dangling_references() {
    let mut model = alice_and_bob();

    model.delete_tag(&tag("VIP")).unwrap();
    model.remove_tag_from_persons(&tag("VIP")).unwrap();

    assert!(!model.has_tag(&tag("VIP")));
    assert_eq!(names(&model.tags_in_use()), vec!["Student"]);
}

#[test]
fn rename_keeps_tag_membership_queries_correct() {
    let mut model = alice_and_bob();

    let replaced = model
        .rename_tag_everywhere(&tag("Student"), "Alumni")
        .unwrap();

    assert_eq!(replaced, 1);
    assert_eq!(model.tag_list_string(), "[VIP][Alumni]");

    let in_use = model.tags_in_use();
    assert_eq!(names(&in_use), vec!["Alumni", "VIP"]);
    assert!(in_use.contains(&tag("Alumni")));
    assert!(!in_use.contains(&tag("Student")));

    let bob = &model.full_person_list()[1];
    assert!(bob.has_tag(&tag("Alumni")));
    assert!(!bob.has_tag(&tag("Student")));
    assert!(!model.full_person_list()[0].has_tag(&tag("Alumni")));
}

#[test]
fn rename_everywhere_onto_registered_name_changes_nothing() {
    let mut model = alice_and_bob();
    let persons_before = model.full_person_list().to_vec();

    let err = model
        .rename_tag_everywhere(&tag("VIP"), "Student")
        .unwrap_err();

    assert_eq!(err, ModelError::Store(StoreError::DuplicateTag(tag("Student"))));
    assert_eq!(model.full_person_list(), persons_before.as_slice());
    assert_eq!(model.tag_list_string(), "[VIP][Student]");
    assert!(model.full_person_list()[0].has_tag(&tag("VIP")));
}

#[test]
fn rename_everywhere_onto_name_carried_by_a_person_changes_nothing() {
    let mut model = alice_and_bob();
    model
        .add_person(person("Carol", "333", &["Speaker"]))
        .unwrap();
    let persons_before = model.full_person_list().to_vec();

    let err = model
        .rename_tag_everywhere(&tag("VIP"), "Speaker")
        .unwrap_err();

    assert_eq!(err, ModelError::Store(StoreError::DuplicateTag(tag("Speaker"))));
    assert_eq!(model.full_person_list(), persons_before.as_slice());
    assert!(model.has_tag(&tag("VIP")));
}

#[test]
fn rename_everywhere_requires_registered_tag() {
    let mut model = alice_and_bob();
    let persons_before = model.full_person_list().to_vec();

    let err = model
        .rename_tag_everywhere(&tag("Ghost"), "Spirit")
        .unwrap_err();

    assert_eq!(err, ModelError::Store(StoreError::TagNotFound(tag("Ghost"))));
    assert_eq!(model.full_person_list(), persons_before.as_slice());
}

#[test]
fn rename_with_invalid_name_changes_nothing() {
    let mut model = alice_and_bob();
    let before = model.full_person_list().to_vec();

    let err = model
        .edit_tag_in_persons(&tag("VIP"), "very important")
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::InvalidTag(TagValidationError::NotAlphanumeric(_))
    ));
    assert_eq!(model.full_person_list(), before.as_slice());

    let err = model.rename_tag(&tag("VIP"), " ").unwrap_err();
    assert_eq!(err, ModelError::InvalidTag(TagValidationError::Empty));

    let err = model.rename_tag_everywhere(&tag("VIP"), "a b").unwrap_err();
    assert!(matches!(err, ModelError::InvalidTag(_)));
    assert_eq!(model.tag_list_string(), "[VIP][Student]");
}

#[test]
fn rename_to_taken_name_is_rejected_by_registry() {
    let mut model = alice_and_bob();
    let err = model.rename_tag(&tag("VIP"), "Student").unwrap_err();
    assert_eq!(err, ModelError::Store(StoreError::DuplicateTag(tag("Student"))));
}

#[test]
fn capacity_check_is_a_pure_query() {
    let model = alice_and_bob();
    let before = model.address_book().clone();

    let first = model.check_acceptable_tag_list_size(5);
    let second = model.check_acceptable_tag_list_size(5);

    assert_eq!(first, second);
    assert_eq!(model.address_book(), &before);
}

#[test]
fn full_registry_rejects_further_tags() {
    let mut book = AddressBook::with_tag_capacity(2);
    book.add_tag(tag("a")).unwrap();
    book.add_tag(tag("b")).unwrap();
    let mut model = ModelManager::new(book, UserPrefs::default());

    assert!(model.check_acceptable_tag_list_size(0));
    assert!(!model.check_acceptable_tag_list_size(1));

    let err = model.add_tag(tag("c")).unwrap_err();
    assert_eq!(err, ModelError::Store(StoreError::CapacityExceeded { limit: 2 }));
    assert!(!model.has_tag(&tag("c")));
}

#[test]
fn bulk_add_continues_past_failures_and_keeps_applied_tags() {
    let mut book = AddressBook::with_tag_capacity(3);
    book.add_tag(tag("a")).unwrap();
    let mut model = ModelManager::new(book, UserPrefs::default());

    let outcome = model
        .add_tags(vec![tag("a"), tag("b"), tag("c"), tag("d")]);

    assert!(!outcome.all_succeeded());
    assert_eq!(outcome.applied, vec![tag("b"), tag("c")]);
    assert_eq!(
        outcome.rejected,
        vec![
            (tag("a"), StoreError::DuplicateTag(tag("a"))),
            (tag("d"), StoreError::CapacityExceeded { limit: 3 }),
        ]
    );
    assert_eq!(model.tag_list_string(), "[a][b][c]");
}

#[test]
fn bulk_delete_reports_missing_tags() {
    let mut model = alice_and_bob();

    let outcome = model
        .delete_tags(&[tag("VIP"), tag("Ghost"), tag("Student")]);

    assert!(!outcome.all_succeeded());
    assert_eq!(outcome.applied, vec![tag("VIP"), tag("Student")]);
    assert_eq!(
        outcome.rejected,
        vec![(tag("Ghost"), StoreError::TagNotFound(tag("Ghost")))]
    );
    assert!(model.tag_list().is_empty());
}

#[test]
fn bulk_operations_on_empty_input_succeed_without_effect() {
    let mut model = alice_and_bob();

    let added = model.add_tags(Vec::new());
    let deleted = model.delete_tags(&[]);

    assert!(added.all_succeeded());
    assert!(added.applied.is_empty());
    assert!(deleted.all_succeeded());
    assert_eq!(model.tag_list_string(), "[VIP][Student]");
}

#[test]
fn bulk_success_reports_all_succeeded() {
    let mut model = alice_and_bob();
    let outcome = model.add_tags(vec![tag("Speaker"), tag("Host")]);
    assert!(outcome.all_succeeded());
    assert_eq!(model.tag_list().len(), 4);
}
