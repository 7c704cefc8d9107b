//! Roster model facade.
//!
//! # Responsibility
//! - Compose the record store, preferences, filtered view and session
//!   history behind one use-case level API.
//! - Run tag lifecycle operations and the consistency walks they require.
//!
//! # Invariants
//! - Every public operation validates its input before any mutation;
//!   `InvalidArgument` failures have no partial effect.
//! - Adding a person resets the view to show everyone.
//! - Bulk tag operations are not transactional, see [`BulkTagOutcome`].
//! - Log lines carry counts and tag names only, never person fields.

use crate::consistency;
use crate::model::person::{Person, PersonValidationError};
use crate::model::prefs::{GuiSettings, UserPrefs};
use crate::model::tag::{Tag, TagValidationError};
use crate::session::{SessionState, UndoableCommand};
use crate::store::{AddressBook, RecordStore, StoreError};
use crate::view::{FilteredPersons, InvalidFilter, PersonFilter, ViewState};
use log::{debug, error, info, warn};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;
use uuid::Uuid;

/// Model-level error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Malformed input; nothing was changed.
    InvalidArgument(String),
    /// Person field failed validation; nothing was changed.
    InvalidPerson(PersonValidationError),
    /// Tag name failed validation; nothing was changed.
    InvalidTag(TagValidationError),
    /// Store rejected the mutation.
    Store(StoreError),
    /// Undo requested with an empty session history.
    NothingToUndo,
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::InvalidPerson(err) => write!(f, "{err}"),
            Self::InvalidTag(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::NothingToUndo => write!(f, "no previous command to undo"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPerson(err) => Some(err),
            Self::InvalidTag(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::InvalidArgument(_) | Self::NothingToUndo => None,
        }
    }
}

impl From<StoreError> for ModelError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<PersonValidationError> for ModelError {
    fn from(value: PersonValidationError) -> Self {
        Self::InvalidPerson(value)
    }
}

impl From<TagValidationError> for ModelError {
    fn from(value: TagValidationError) -> Self {
        Self::InvalidTag(value)
    }
}

impl From<InvalidFilter> for ModelError {
    fn from(value: InvalidFilter) -> Self {
        Self::InvalidArgument(value.to_string())
    }
}

pub type ModelResult<T> = Result<T, ModelError>;

/// Per-item result of a bulk tag operation.
///
/// # Contract
/// - Every input tag is attempted, in order, even after a failure.
/// - Tags in `applied` took effect and stay applied regardless of the
///   aggregate result; there is no rollback.
/// - `all_succeeded() == false` therefore means "some, possibly none, were
///   applied". Inspect `applied`/`rejected` for the exact split.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkTagOutcome {
    pub applied: Vec<Tag>,
    pub rejected: Vec<(Tag, StoreError)>,
}

impl BulkTagOutcome {
    /// Logical AND of every individual outcome.
    pub fn all_succeeded(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// In-memory roster model.
pub struct ModelManager<S: RecordStore = AddressBook> {
    store: S,
    user_prefs: UserPrefs,
    view: ViewState,
    session: SessionState<Box<dyn UndoableCommand<S>>>,
}

impl Default for ModelManager<AddressBook> {
    fn default() -> Self {
        Self::new(AddressBook::default(), UserPrefs::default())
    }
}

impl<S: RecordStore> ModelManager<S> {
    /// Creates a model over `store` with the given session preferences.
    pub fn new(store: S, user_prefs: UserPrefs) -> Self {
        debug!(
            "event=model_init module=model status=ok persons={} tags={}",
            store.persons().len(),
            store.tags().len()
        );
        Self {
            store,
            user_prefs,
            view: ViewState::new(),
            session: SessionState::new(),
        }
    }

    // Preferences.

    pub fn set_user_prefs(&mut self, user_prefs: &UserPrefs) {
        self.user_prefs.reset_data(user_prefs);
    }

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        self.user_prefs.gui_settings()
    }

    /// # Errors
    /// - `InvalidArgument` when width or height is not a positive number.
    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) -> ModelResult<()> {
        let valid = |value: f64| value.is_finite() && value > 0.0;
        if !valid(gui_settings.window_width) || !valid(gui_settings.window_height) {
            return Err(ModelError::InvalidArgument(format!(
                "window size must be positive, got {}x{}",
                gui_settings.window_width, gui_settings.window_height
            )));
        }
        self.user_prefs.set_gui_settings(gui_settings);
        Ok(())
    }

    pub fn address_book_file_path(&self) -> &Path {
        self.user_prefs.address_book_file_path()
    }

    /// # Errors
    /// - `InvalidArgument` when `path` is empty.
    pub fn set_address_book_file_path(&mut self, path: impl Into<PathBuf>) -> ModelResult<()> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(ModelError::InvalidArgument(
                "address book file path must not be empty".to_string(),
            ));
        }
        self.user_prefs.set_address_book_file_path(path);
        Ok(())
    }

    // Record store.

    /// Replaces all persons and tags with those of `data`.
    pub fn set_address_book<R: RecordStore>(&mut self, data: &R) -> ModelResult<()> {
        self.store
            .reset_data(data.persons().to_vec(), data.tags().to_vec())?;
        info!(
            "event=store_reset module=model status=ok persons={} tags={}",
            self.store.persons().len(),
            self.store.tags().len()
        );
        Ok(())
    }

    pub fn address_book(&self) -> &S {
        &self.store
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.store.has_person(person)
    }

    pub fn delete_person(&mut self, target: &Person) -> ModelResult<()> {
        self.store.remove_person(target)?;
        Ok(())
    }

    /// Adds `person` and resets the view so the new person is visible.
    pub fn add_person(&mut self, person: Person) -> ModelResult<()> {
        self.store.add_person(person)?;
        self.view.apply(PersonFilter::ShowAll)?;
        Ok(())
    }

    pub fn set_person(&mut self, target: &Person, edited: Person) -> ModelResult<()> {
        self.store.replace_person(target, edited)?;
        Ok(())
    }

    // Filtered view.

    /// Live projection of the store through the active filter.
    pub fn filtered_persons(&self) -> FilteredPersons<'_> {
        FilteredPersons::new(self.store.persons(), &self.view)
    }

    /// Every stored person in insertion order.
    pub fn full_person_list(&self) -> &[Person] {
        self.store.persons()
    }

    /// Narrows the view with `filter`, or resets it when `filter` is
    /// `ShowAll`.
    ///
    /// # Errors
    /// - `InvalidArgument` for malformed filters; the view is unchanged.
    pub fn update_filtered_person_list(&mut self, filter: PersonFilter) -> ModelResult<()> {
        let reset = filter.is_show_all();
        self.view.apply(filter)?;
        debug!(
            "event=view_update module=model status=ok reset={} visible={}",
            reset,
            self.filtered_persons().len()
        );
        Ok(())
    }

    /// Active filter; `None` until the first filter is applied.
    pub fn current_predicate(&self) -> Option<&PersonFilter> {
        self.view.current()
    }

    // Tags.

    pub fn add_tag(&mut self, tag: Tag) -> ModelResult<()> {
        let name = tag.name().to_string();
        self.store.add_tag(tag).map_err(|err| {
            warn!("event=tag_add module=model status=error tag={name} error={err}");
            err
        })?;
        info!("event=tag_add module=model status=ok tag={name}");
        Ok(())
    }

    /// Registers every tag in `tags`, continuing past rejections.
    ///
    /// An empty `tags` yields an empty outcome, which counts as success.
    pub fn add_tags(&mut self, tags: Vec<Tag>) -> BulkTagOutcome {
        let mut outcome = BulkTagOutcome::default();
        for tag in tags {
            match self.store.add_tag(tag.clone()) {
                Ok(()) => outcome.applied.push(tag),
                Err(err) => outcome.rejected.push((tag, err)),
            }
        }
        log_bulk_outcome("tag_add_bulk", &outcome);
        outcome
    }

    pub fn delete_tag(&mut self, tag: &Tag) -> ModelResult<()> {
        self.store.delete_tag(tag)?;
        info!("event=tag_delete module=model status=ok tag={}", tag.name());
        Ok(())
    }

    /// Unregisters every tag in `tags`, continuing past rejections.
    ///
    /// An empty `tags` yields an empty outcome, which counts as success.
    pub fn delete_tags(&mut self, tags: &[Tag]) -> BulkTagOutcome {
        let mut outcome = BulkTagOutcome::default();
        for tag in tags {
            match self.store.delete_tag(tag) {
                Ok(()) => outcome.applied.push(tag.clone()),
                Err(err) => outcome.rejected.push((tag.clone(), err)),
            }
        }
        log_bulk_outcome("tag_delete_bulk", &outcome);
        outcome
    }

    /// Renames `existing` in the registry and returns the new tag value.
    ///
    /// Persons are not touched. Use [`Self::rename_tag_everywhere`] to keep
    /// persons consistent with the registry.
    pub fn rename_tag(&mut self, existing: &Tag, new_name: &str) -> ModelResult<Tag> {
        let renamed = Tag::new(new_name)?;
        self.store.rename_tag(existing, renamed.clone())?;
        info!(
            "event=tag_rename module=model status=ok from={} to={}",
            existing.name(),
            renamed.name()
        );
        Ok(renamed)
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.store.has_tag(tag)
    }

    /// Registry rendered for display, for example `[friends][VIP]`.
    pub fn tag_list_string(&self) -> String {
        self.store.tags_to_string()
    }

    /// Registered tags in registry order. Always current.
    pub fn tag_list(&self) -> &[Tag] {
        self.store.tags()
    }

    /// Distinct tags carried by at least one person (full scan).
    pub fn tags_in_use(&self) -> BTreeSet<Tag> {
        consistency::tags_in_use(&self.store)
    }

    /// Strips `tag` from every person carrying it. Returns the number of
    /// persons replaced.
    pub fn remove_tag_from_persons(&mut self, tag: &Tag) -> ModelResult<usize> {
        let started_at = Instant::now();
        let replaced = consistency::remove_tag_from_persons(&mut self.store, tag)?;
        info!(
            "event=tag_strip module=model status=ok tag={} persons={} duration_ms={}",
            tag.name(),
            replaced,
            started_at.elapsed().as_millis()
        );
        Ok(replaced)
    }

    /// Renames `existing` to `new_name` inside every person carrying it.
    /// Returns the number of persons replaced.
    ///
    /// The registry is not consulted: a `new_name` already carried by a
    /// person merges into that tag. Use [`Self::rename_tag_everywhere`] for a
    /// checked rename.
    ///
    /// # Errors
    /// - `InvalidTag` when `new_name` is not a valid tag name; nothing is
    ///   changed.
    pub fn edit_tag_in_persons(&mut self, existing: &Tag, new_name: &str) -> ModelResult<usize> {
        let started_at = Instant::now();
        let renamed = Tag::new(new_name)?;
        let replaced = consistency::edit_tag_in_persons(&mut self.store, existing, &renamed)?;
        info!(
            "event=tag_retag module=model status=ok from={} to={} persons={} duration_ms={}",
            existing.name(),
            renamed.name(),
            replaced,
            started_at.elapsed().as_millis()
        );
        Ok(replaced)
    }

    /// Renames `existing` in the registry and in every person carrying it.
    /// Returns the number of persons replaced.
    ///
    /// All checks run before any mutation, and a failed persons walk
    /// restores the registry and persons, so callers see either the full
    /// rename or no change at all.
    ///
    /// # Errors
    /// - `InvalidTag` when `new_name` is not a valid tag name.
    /// - `Store(TagNotFound)` when `existing` is not registered.
    /// - `Store(DuplicateTag)` when `new_name` is already registered or
    ///   carried by a person under another tag.
    pub fn rename_tag_everywhere(&mut self, existing: &Tag, new_name: &str) -> ModelResult<usize> {
        let started_at = Instant::now();
        let renamed = Tag::new(new_name)?;
        if !self.store.has_tag(existing) {
            return Err(StoreError::TagNotFound(existing.clone()).into());
        }
        if renamed == *existing {
            return Ok(0);
        }
        if self.store.has_tag(&renamed) || consistency::tags_in_use(&self.store).contains(&renamed)
        {
            return Err(StoreError::DuplicateTag(renamed).into());
        }

        let persons_before = self.store.persons().to_vec();
        let tags_before = self.store.tags().to_vec();
        self.store.rename_tag(existing, renamed.clone())?;
        let replaced = match consistency::edit_tag_in_persons(&mut self.store, existing, &renamed) {
            Ok(replaced) => replaced,
            Err(err) => {
                if let Err(restore_err) = self.store.reset_data(persons_before, tags_before) {
                    error!(
                        "event=tag_rename_all module=model status=error stage=restore error={restore_err}"
                    );
                }
                warn!(
                    "event=tag_rename_all module=model status=error from={} to={} error={err}",
                    existing.name(),
                    renamed.name()
                );
                return Err(err.into());
            }
        };

        info!(
            "event=tag_rename_all module=model status=ok from={} to={} persons={} duration_ms={}",
            existing.name(),
            renamed.name(),
            replaced,
            started_at.elapsed().as_millis()
        );
        Ok(replaced)
    }

    /// Returns whether `additional` more tags still fit in the registry.
    /// Pure query.
    pub fn check_acceptable_tag_list_size(&self, additional: usize) -> bool {
        !self.store.tag_count_would_exceed_limit(additional)
    }

    // Session.

    /// Remembers `command` as the most recent reversible command.
    pub fn update_previous_command(&mut self, command: Box<dyn UndoableCommand<S>>) -> Uuid {
        let word = command.command_word().to_string();
        let id = self.session.record(command);
        debug!("event=command_recorded module=session status=ok command={word} id={id}");
        id
    }

    pub fn previous_command(&self) -> Option<&dyn UndoableCommand<S>> {
        self.session.previous().map(|command| &**command)
    }

    /// Clears the most recent command from the history and reverts it.
    ///
    /// # Errors
    /// - `NothingToUndo` when the history is empty.
    /// - Whatever the command's own `undo` returns. The command is not put
    ///   back into the history on failure.
    pub fn undo_previous_command(&mut self) -> ModelResult<()> {
        let entry = self.session.take_previous().ok_or(ModelError::NothingToUndo)?;
        let result = entry.command.undo(self);
        match &result {
            Ok(()) => info!(
                "event=command_undo module=session status=ok command={} id={}",
                entry.command.command_word(),
                entry.id
            ),
            Err(err) => warn!(
                "event=command_undo module=session status=error command={} id={} error={}",
                entry.command.command_word(),
                entry.id,
                err
            ),
        }
        result
    }
}

fn log_bulk_outcome(event: &str, outcome: &BulkTagOutcome) {
    if outcome.all_succeeded() {
        info!(
            "event={event} module=model status=ok applied={}",
            outcome.applied.len()
        );
    } else {
        warn!(
            "event={event} module=model status=partial applied={} rejected={}",
            outcome.applied.len(),
            outcome.rejected.len()
        );
    }
}

impl<S: RecordStore + Debug> Debug for ModelManager<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelManager")
            .field("store", &self.store)
            .field("user_prefs", &self.user_prefs)
            .field("view", &self.view)
            .field("session", &self.session)
            .finish()
    }
}

impl<S: RecordStore + PartialEq> PartialEq for ModelManager<S> {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
            && self.user_prefs == other.user_prefs
            && self.filtered_persons() == other.filtered_persons()
    }
}
