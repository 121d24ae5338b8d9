//! View model types and their computation from directory state.
//!
//! The view model is an immutable snapshot optimized for rendering: the
//! presentation surface reads it and never touches [`DirectoryState`]
//! directly. Computation is pure, so every presentation decision — header
//! wording, placeholder dashes, which empty-state text applies — is testable
//! without any I/O.

use crate::app::state::DirectoryState;
use crate::domain::person::Person;

/// Placeholder shown for absent optional fields.
const ABSENT_FIELD: &str = "—";

/// Renderable snapshot of the directory state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryViewModel {
    /// Header line: record count plus the active query, when any.
    pub header: HeaderInfo,

    /// One row per mirrored record, in list order.
    pub rows: Vec<PersonRow>,

    /// Progress note for an in-flight request, if one is running.
    pub busy: Option<&'static str>,

    /// Failure banner, when the last operation failed.
    pub error: Option<String>,

    /// Text to show instead of rows when the list is empty (and no initial
    /// load is running).
    pub empty_state: Option<String>,
}

/// Header contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// A single record prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub updated: String,
    /// True when this record's delete is in flight.
    pub pending_delete: bool,
}

impl DirectoryViewModel {
    /// Computes a view model from a state snapshot.
    #[must_use]
    pub fn from_state(state: &DirectoryState) -> Self {
        let rows = state
            .persons
            .iter()
            .map(|person| PersonRow::from_person(person, state))
            .collect::<Vec<_>>();

        let empty_state = if rows.is_empty() && !state.loading {
            Some(match &state.active_query {
                Some(query) => format!("No results for \"{query}\". Try different search terms."),
                None => "The directory is empty. Add a first person to get started.".to_string(),
            })
        } else {
            None
        };

        Self {
            header: HeaderInfo::from_state(state),
            rows,
            busy: busy_note(state),
            error: state.error.clone(),
            empty_state,
        }
    }
}

impl HeaderInfo {
    fn from_state(state: &DirectoryState) -> Self {
        let count = state.persons.len();
        let noun = if count == 1 { "person" } else { "persons" };
        let title = match &state.active_query {
            Some(query) => format!("Directory ({count} {noun}) — results for \"{query}\""),
            None => format!("Directory ({count} {noun})"),
        };
        Self { title }
    }
}

impl PersonRow {
    fn from_person(person: &Person, state: &DirectoryState) -> Self {
        Self {
            id: person.id.to_string(),
            name: person.full_name(),
            email: display_optional(person.email.as_deref()),
            phone: display_optional(person.phone.as_deref()),
            address: display_optional(person.address.as_deref()),
            updated: person.updated_ago(),
            pending_delete: state.deleting.as_ref() == Some(&person.id),
        }
    }
}

fn display_optional(value: Option<&str>) -> String {
    value.unwrap_or(ABSENT_FIELD).to_string()
}

fn busy_note(state: &DirectoryState) -> Option<&'static str> {
    if state.loading {
        Some("loading…")
    } else if state.searching {
        Some("searching…")
    } else if state.submitting {
        Some("saving…")
    } else if state.deleting.is_some() {
        Some("deleting…")
    } else {
        None
    }
}
