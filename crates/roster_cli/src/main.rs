//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roster_core` linkage.
//! - Exercise the filtered view and tag consistency paths with fixed data
//!   so the output is deterministic.

use roster_core::{
    core_version, default_log_level, init_logging, Email, ModelManager, ModelResult, Name,
    Person, PersonFilter, Phone, RsvpStatus, Tag,
};
use std::process::ExitCode;

fn guest(
    name: &str,
    phone: &str,
    email: &str,
    rsvp: RsvpStatus,
    tags: &[Tag],
) -> ModelResult<Person> {
    Ok(Person::new(
        Name::new(name)?,
        Phone::new(phone)?,
        Email::new(email)?,
        rsvp,
        tags.iter().cloned(),
    ))
}

/// Registers `tags`, failing when any of them was rejected.
///
/// Tags applied before a rejection stay registered.
fn register_tags(model: &mut ModelManager, tags: Vec<Tag>) -> Result<(), String> {
    let outcome = model.add_tags(tags);
    if outcome.all_succeeded() {
        return Ok(());
    }
    let rejected = outcome
        .rejected
        .iter()
        .map(|(tag, err)| format!("{tag}: {err}"))
        .collect::<Vec<_>>()
        .join(", ");
    Err(format!("tags rejected: {rejected}"))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("roster_core version={}", core_version());

    let log_dir = tempfile::Builder::new().prefix("roster-cli-logs").tempdir()?;
    init_logging(default_log_level().as_str(), log_dir.path())?;

    let vip = Tag::new("VIP")?;
    let student = Tag::new("Student")?;

    let mut model: ModelManager = ModelManager::default();
    register_tags(&mut model, vec![vip.clone(), student.clone()])?;
    model.add_person(guest(
        "Alice Tan",
        "91234567",
        "alice@example.com",
        RsvpStatus::Coming,
        &[vip.clone()],
    )?)?;
    model.add_person(guest(
        "Bob Lee",
        "98765432",
        "bob@example.com",
        RsvpStatus::Unknown,
        &[vip.clone(), student.clone()],
    )?)?;

    model.update_filtered_person_list(PersonFilter::HasTag(student.clone()))?;
    println!("students={}", model.filtered_persons().len());

    let retagged = model.rename_tag_everywhere(&student, "Alumni")?;
    println!("retagged={retagged}");
    model.update_filtered_person_list(PersonFilter::ShowAll)?;

    for person in model.filtered_persons().iter() {
        println!("{person}");
    }
    println!("tags={}", model.tag_list_string());
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("roster_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}
