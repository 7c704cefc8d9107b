use roster_core::{Email, Name, Person, Phone, RsvpStatus, Tag, UserPrefs};

fn tag(name: &str) -> Tag {
    Tag::new(name).unwrap()
}

fn bob() -> Person {
    Person::new(
        Name::new("Bob Lee").unwrap(),
        Phone::new("98765432").unwrap(),
        Email::new("bob@example.com").unwrap(),
        RsvpStatus::NotComing,
        vec![tag("VIP"), tag("Student")],
    )
}

#[test]
fn same_person_ignores_rsvp_and_tags() {
    let original = bob();
    let edited = original
        .with_rsvp_status(RsvpStatus::Coming)
        .with_tags(Vec::new());

    assert!(original.is_same_person(&edited));
    assert_ne!(original, edited);

    let other_phone = Person::new(
        original.name().clone(),
        Phone::new("11111111").unwrap(),
        original.email().clone(),
        original.rsvp_status(),
        original.tags().iter().cloned(),
    );
    assert!(!original.is_same_person(&other_phone));
}

#[test]
fn copy_on_write_helpers_leave_original_untouched() {
    let original = bob();

    let stripped = original.without_tag(&tag("VIP"));
    let renamed = original.with_tag_renamed(&tag("Student"), &tag("Alumni"));

    assert_eq!(original.tags().len(), 2);
    assert!(original.has_tag(&tag("VIP")));
    assert_eq!(stripped.tags().iter().collect::<Vec<_>>(), vec![&tag("Student")]);
    assert!(renamed.has_tag(&tag("Alumni")));
    assert!(!renamed.has_tag(&tag("Student")));
    assert_eq!(renamed.name(), original.name());
    assert_eq!(renamed.rsvp_status(), original.rsvp_status());
}

#[test]
fn renaming_an_absent_tag_adds_nothing() {
    let original = bob();
    let unchanged = original.with_tag_renamed(&tag("Speaker"), &tag("Host"));
    assert_eq!(unchanged, original);
}

#[test]
fn person_serialization_uses_expected_wire_fields() {
    let person = bob();

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["name"], "Bob Lee");
    assert_eq!(json["phone"], "98765432");
    assert_eq!(json["email"], "bob@example.com");
    assert_eq!(json["rsvp_status"], "not_coming");
    assert_eq!(json["tags"], serde_json::json!(["Student", "VIP"]));

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

#[test]
fn deserialize_rejects_invalid_fields() {
    let value = serde_json::json!({
        "name": "Eve",
        "phone": "12",
        "email": "eve@example.com",
        "rsvp_status": "coming",
        "tags": []
    });
    let err = serde_json::from_value::<Person>(value).unwrap_err();
    assert!(err.to_string().contains("invalid phone"), "unexpected error: {err}");

    let bad_tag = serde_json::json!({
        "name": "Eve",
        "phone": "123",
        "email": "eve@example.com",
        "tags": ["two words"]
    });
    assert!(serde_json::from_value::<Person>(bad_tag).is_err());
}

#[test]
fn missing_rsvp_and_tags_default_on_deserialize() {
    let value = serde_json::json!({
        "name": "Eve",
        "phone": "123",
        "email": "eve@example.com"
    });
    let person: Person = serde_json::from_value(value).unwrap();
    assert_eq!(person.rsvp_status(), RsvpStatus::Unknown);
    assert!(person.tags().is_empty());
}

#[test]
fn user_prefs_defaults_fill_missing_fields() {
    let prefs: UserPrefs =
        serde_json::from_value(serde_json::json!({ "address_book_file_path": "x/y.json" }))
            .unwrap();
    assert_eq!(prefs.address_book_file_path().to_str(), Some("x/y.json"));
    assert_eq!(prefs.gui_settings(), UserPrefs::default().gui_settings());
    assert_eq!(prefs.gui_settings().window_width, 740.0);
}
