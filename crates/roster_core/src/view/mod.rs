//! Filtered person view.
//!
//! # Responsibility
//! - Define the predicate algebra used to narrow the displayed persons.
//! - Hold the active predicate and its composition rules.
//! - Project the store through the active predicate on every read.
//!
//! # Invariants
//! - Until the first filter is applied the view shows every person.
//! - Applying a real filter ANDs it onto the active one; applying
//!   `PersonFilter::ShowAll` replaces whatever was active.
//! - The projection is never cached, so it always reflects the store as it
//!   is at read time, in store insertion order.

pub mod filter;
pub mod filtered_persons;

pub use filter::{InvalidFilter, PersonFilter};
pub use filtered_persons::{FilteredPersons, ViewState};
