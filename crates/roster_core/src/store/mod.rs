//! Record store contract and in-memory implementation.
//!
//! # Responsibility
//! - Define the collaborator contract the model consumes (`RecordStore`).
//! - Own the canonical ordered person list and the canonical tag registry.
//!
//! # Invariants
//! - No two stored persons share an identity key.
//! - Tag names are unique within the registry.
//! - The registry never holds more tags than its configured capacity.

pub mod address_book;
pub mod record_store;

pub use address_book::{AddressBook, DEFAULT_MAX_TAGS};
pub use record_store::{RecordStore, StoreError, StoreResult};
