//! User intents and dispatch outcomes.
//!
//! This module defines the [`Intent`] type — the discrete requests a
//! rendering surface emits (a search submit, a form submit, a confirmed
//! delete) — and the [`Outcome`] a dispatch reports back so the surface knows
//! how to react: close a form, print a confirmation, or re-render the list.

use crate::client::Page;
use crate::domain::person::{Person, PersonDraft, PersonId, PersonPatch};

/// A request from the rendering surface to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Replace the list with a full fetch of the collection.
    Reload {
        /// Pass-through pagination bounds.
        page: Page,
    },

    /// Replace the list with search results.
    ///
    /// An empty or whitespace-only query is routed to the full-list path
    /// instead of the search endpoint.
    Search {
        /// The query as the user typed it.
        query: String,
        /// Pass-through pagination bounds.
        page: Page,
    },

    /// Create a record from a form submission.
    Create {
        /// The submitted fields, prior to normalization.
        draft: PersonDraft,
    },

    /// Change a subset of a record's fields from an edit-form submission.
    Update {
        /// Target record.
        id: PersonId,
        /// The changed fields, prior to normalization.
        patch: PersonPatch,
    },

    /// Remove a record after the surface obtained confirmation.
    Delete {
        /// Target record.
        id: PersonId,
    },
}

/// What a successful dispatch changed.
///
/// Failed reloads and searches still settle as [`Outcome::Refreshed`] with the
/// failure recorded in the state (the prior list is kept on screen); failed
/// mutations surface as errors so the surface keeps its form open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A reload or search settled; the state reflects the result.
    Refreshed,

    /// A record was created and prepended to the list.
    Created(Person),

    /// A record was updated in place.
    Updated(Person),

    /// A record was removed from the list.
    Deleted(PersonId),
}
