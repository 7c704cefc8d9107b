//! Domain value types for the roster model layer.
//!
//! # Responsibility
//! - Define the record (`Person`) and label (`Tag`) shapes owned by the store.
//! - Define the session preference shapes passed through by the model.
//!
//! # Invariants
//! - Every value type is validated on construction and on deserialization.
//! - Values are immutable; changes are made by building replacement values.

pub mod person;
pub mod prefs;
pub mod tag;
