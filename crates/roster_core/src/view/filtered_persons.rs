//! Active predicate state and the live projection it drives.

use crate::model::person::Person;
use crate::view::filter::{InvalidFilter, PersonFilter};

/// Active predicate of the person view.
///
/// `None` is the initial identity state: no filter has been applied yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    active: Option<PersonFilter>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `filter` to the view.
    ///
    /// Replaces the active predicate when nothing has been applied yet or
    /// when `filter` is `ShowAll`; otherwise narrows it with AND.
    ///
    /// # Errors
    /// - Returns `InvalidFilter` for malformed filters; state is unchanged.
    pub fn apply(&mut self, filter: PersonFilter) -> Result<(), InvalidFilter> {
        filter.validate()?;
        self.active = Some(match self.active.take() {
            Some(current) if !filter.is_show_all() => current.and(filter),
            _ => filter,
        });
        Ok(())
    }

    /// Active predicate, or `None` while the view is in its initial state.
    pub fn current(&self) -> Option<&PersonFilter> {
        self.active.as_ref()
    }

    pub fn matches(&self, person: &Person) -> bool {
        self.active.as_ref().map_or(true, |filter| filter.test(person))
    }
}

/// Read-only projection of a person slice through a `ViewState`.
///
/// Evaluated lazily on every read. Holding one borrows the model, so no
/// mutation can interleave with iteration.
#[derive(Debug, Clone, Copy)]
pub struct FilteredPersons<'a> {
    persons: &'a [Person],
    state: &'a ViewState,
}

impl<'a> FilteredPersons<'a> {
    pub fn new(persons: &'a [Person], state: &'a ViewState) -> Self {
        Self { persons, state }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Person> + 'a {
        let state = self.state;
        self.persons.iter().filter(move |p| state.matches(p))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Person at display position `index` (zero-based).
    pub fn get(&self, index: usize) -> Option<&'a Person> {
        self.iter().nth(index)
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.iter().any(|p| p == person)
    }

    pub fn to_vec(&self) -> Vec<Person> {
        self.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &FilteredPersons<'a> {
    type Item = &'a Person;
    type IntoIter = Box<dyn Iterator<Item = &'a Person> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl PartialEq for FilteredPersons<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::ViewState;
    use crate::model::person::RsvpStatus;
    use crate::view::filter::PersonFilter;

    #[test]
    fn first_filter_replaces_identity_state() {
        let mut state = ViewState::new();
        assert!(state.current().is_none());

        state.apply(PersonFilter::RsvpIs(RsvpStatus::Coming)).unwrap();
        assert_eq!(
            state.current(),
            Some(&PersonFilter::RsvpIs(RsvpStatus::Coming))
        );
    }

    #[test]
    fn later_filters_compose_and_show_all_resets() {
        let mut state = ViewState::new();
        let coming = PersonFilter::RsvpIs(RsvpStatus::Coming);
        let alice = PersonFilter::name_contains(["alice"]);

        state.apply(coming.clone()).unwrap();
        state.apply(alice.clone()).unwrap();
        assert_eq!(state.current(), Some(&coming.clone().and(alice)));

        state.apply(PersonFilter::ShowAll).unwrap();
        assert_eq!(state.current(), Some(&PersonFilter::ShowAll));
    }

    #[test]
    fn invalid_filter_leaves_state_unchanged() {
        let mut state = ViewState::new();
        state.apply(PersonFilter::RsvpIs(RsvpStatus::Unknown)).unwrap();
        let before = state.clone();

        assert!(state
            .apply(PersonFilter::name_contains(Vec::<String>::new()))
            .is_err());
        assert_eq!(state, before);
    }
}
