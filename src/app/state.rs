//! View-state container for the mirrored directory.
//!
//! This module defines [`DirectoryState`], the single source of truth the
//! presentation layer reads: the locally mirrored record list plus the
//! independent UI-facing flags. It is mutated only by the controller, and only
//! in response to a settled request — the list never reflects a mutation the
//! service has not confirmed.
//!
//! # State Components
//!
//! - **Persons**: the mirrored list, in the order the service returned it
//!   (newly created records are prepended, which matches the service's
//!   newest-first listing)
//! - **Flags**: `loading`, `searching`, `submitting`, and the id-carrying
//!   `deleting`, bracketing the corresponding in-flight requests
//! - **Error**: the last failure message, cleared at the start of every new
//!   attempt
//! - **Active query**: which search the list currently shows, if any
//!
//! # Invariant
//!
//! No [`PersonId`] appears twice in the list. The mutation primitives uphold
//! this: a full replacement drops duplicate ids keeping the first occurrence,
//! and a prepend displaces any previous entry with the same id.

use std::collections::HashSet;

use crate::domain::error::DirectoryError;
use crate::domain::person::{Person, PersonId};

/// Locally mirrored directory state plus UI-facing flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryState {
    /// Mirrored records, in service order with fresh creations prepended.
    pub persons: Vec<Person>,

    /// True from construction until the first full-list fetch settles, and
    /// during any later full reload.
    pub loading: bool,

    /// True only while a search request is in flight.
    pub searching: bool,

    /// True while a create or update is in flight.
    pub submitting: bool,

    /// Id of the record whose delete is in flight, if any.
    pub deleting: Option<PersonId>,

    /// Last failure message, or `None`.
    pub error: Option<String>,

    /// The query whose results the list currently shows; `None` after a full
    /// reload.
    pub active_query: Option<String>,
}

impl DirectoryState {
    /// Creates the initial state: empty list, `loading` set, everything else
    /// clear.
    #[must_use]
    pub fn new() -> Self {
        Self {
            persons: Vec::new(),
            loading: true,
            searching: false,
            submitting: false,
            deleting: None,
            error: None,
            active_query: None,
        }
    }

    /// Replaces the whole list with a settled server result, in its order.
    ///
    /// Duplicate ids are dropped keeping the first occurrence, upholding the
    /// unique-id invariant even against a misbehaving response.
    pub fn replace_all(&mut self, mut persons: Vec<Person>) {
        let mut seen = HashSet::new();
        persons.retain(|person| seen.insert(person.id.clone()));

        tracing::debug!(count = persons.len(), "list replaced");
        self.persons = persons;
    }

    /// Prepends a freshly created record.
    ///
    /// Any previous entry with the same id is displaced first.
    pub fn prepend(&mut self, person: Person) {
        self.persons.retain(|existing| existing.id != person.id);
        self.persons.insert(0, person);
    }

    /// Replaces the entry with a matching id in place, preserving position.
    ///
    /// Returns `false` (and changes nothing) when no entry matches.
    pub fn replace(&mut self, person: Person) -> bool {
        match self.persons.iter_mut().find(|existing| existing.id == person.id) {
            Some(slot) => {
                *slot = person;
                true
            }
            None => {
                tracing::debug!(id = %person.id, "updated record is not in the local list");
                false
            }
        }
    }

    /// Removes the entry with a matching id.
    ///
    /// Returns `false` when no entry matches.
    pub fn remove(&mut self, id: &PersonId) -> bool {
        let before = self.persons.len();
        self.persons.retain(|existing| &existing.id != id);
        self.persons.len() < before
    }

    /// Records a failure message for the presentation layer.
    pub fn record_error(&mut self, error: &DirectoryError) {
        tracing::debug!(error = %error, "operation failed");
        self.error = Some(error.to_string());
    }

    /// Clears the failure message at the start of a new attempt.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// True while any request is in flight.
    #[must_use]
    pub fn busy(&self) -> bool {
        self.loading || self.searching || self.submitting || self.deleting.is_some()
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::PersonId;
    use chrono::Utc;

    fn person(id: &str, first: &str) -> Person {
        let now = Utc::now();
        Person {
            id: PersonId::from(id),
            first_name: first.to_string(),
            last_name: "Example".to_string(),
            email: None,
            phone: None,
            address: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn initial_state_is_loading_with_an_empty_list() {
        let state = DirectoryState::new();
        assert!(state.loading);
        assert!(state.persons.is_empty());
        assert!(state.error.is_none());
        assert!(state.busy());
    }

    #[test]
    fn replace_all_drops_duplicate_ids_keeping_the_first() {
        let mut state = DirectoryState::new();
        state.replace_all(vec![person("a", "First"), person("b", "Second"), person("a", "Shadow")]);

        assert_eq!(state.persons.len(), 2);
        assert_eq!(state.persons[0].first_name, "First");
        assert_eq!(state.persons[1].id, PersonId::from("b"));
    }

    #[test]
    fn prepend_displaces_an_entry_with_the_same_id() {
        let mut state = DirectoryState::new();
        state.replace_all(vec![person("a", "Old"), person("b", "Keep")]);
        state.prepend(person("a", "New"));

        assert_eq!(state.persons.len(), 2);
        assert_eq!(state.persons[0].first_name, "New");
        assert_eq!(state.persons[1].id, PersonId::from("b"));
    }

    #[test]
    fn replace_preserves_position_and_reports_misses() {
        let mut state = DirectoryState::new();
        state.replace_all(vec![person("a", "A"), person("b", "B"), person("c", "C")]);

        assert!(state.replace(person("b", "B2")));
        assert_eq!(state.persons[1].first_name, "B2");

        assert!(!state.replace(person("zz", "Ghost")));
        assert_eq!(state.persons.len(), 3);
    }

    #[test]
    fn remove_reports_whether_anything_matched() {
        let mut state = DirectoryState::new();
        state.replace_all(vec![person("a", "A"), person("b", "B")]);

        assert!(state.remove(&PersonId::from("a")));
        assert_eq!(state.persons.len(), 1);
        assert!(!state.remove(&PersonId::from("a")));
        assert_eq!(state.persons.len(), 1);
    }
}
