//! In-memory model layer of the roster manager.
//! This crate owns persons, tags, the filtered person view and the
//! consistency rules between tags and the persons that carry them.

pub mod consistency;
pub mod logging;
pub mod model;
pub mod service;
pub mod session;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::person::{Email, Name, Person, PersonValidationError, Phone, RsvpStatus};
pub use model::prefs::{GuiSettings, UserPrefs};
pub use model::tag::{Tag, TagValidationError};
pub use service::model_manager::{BulkTagOutcome, ModelError, ModelManager, ModelResult};
pub use session::{HistoryEntry, SessionState, UndoableCommand, DEFAULT_HISTORY_CAPACITY};
pub use store::{AddressBook, RecordStore, StoreError, StoreResult, DEFAULT_MAX_TAGS};
pub use view::{FilteredPersons, InvalidFilter, PersonFilter, ViewState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
