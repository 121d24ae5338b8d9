//! The view-state controller bridging user intents to the remote client.
//!
//! [`DirectoryController`] owns a [`DirectoryState`] and a [`Directory`]
//! implementation, and is the only thing that mutates the state. Each
//! operation follows the same discipline:
//!
//! 1. clear the previous error,
//! 2. for mutations, normalize and validate the payload — a rejection returns
//!    *before any network call* with no flag or list change,
//! 3. raise the matching in-flight flag,
//! 4. suspend at the remote call,
//! 5. reconcile the local list from the settled response (replace, prepend,
//!    in-place swap, or removal — never a client-guessed representation),
//! 6. lower the flag, whatever the outcome.
//!
//! A failed reload or search keeps the prior list on screen; a failed
//! mutation leaves the list untouched and reports the failure so the surface
//! keeps its form open. Nothing is retried automatically.
//!
//! Concurrent duplicate mutations are not serialized here: every operation
//! takes `&mut self`, so one controller cannot overlap itself, and a surface
//! that wants parallel requests owns the coordination problem.

use crate::app::intent::{Intent, Outcome};
use crate::app::state::DirectoryState;
use crate::client::backend::{Directory, Page};
use crate::domain::error::Result;
use crate::domain::person::{Person, PersonDraft, PersonId, PersonPatch};

/// Mediates between a rendering surface and the remote directory.
#[derive(Debug)]
pub struct DirectoryController<D> {
    directory: D,
    state: DirectoryState,
}

impl<D: Directory> DirectoryController<D> {
    /// Creates a controller over a remote collection, starting in the
    /// initial `loading` state.
    #[must_use]
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            state: DirectoryState::new(),
        }
    }

    /// Read access for the presentation layer.
    #[must_use]
    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    /// The remote collection this controller mirrors.
    ///
    /// For reads outside the mirrored-list flow, such as fetching one record
    /// by id; mutations should go through the controller so the list stays
    /// reconciled.
    #[must_use]
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Runs one intent to completion.
    ///
    /// # Errors
    ///
    /// Returns the failure of a create, update, or delete (also recorded in
    /// the state). Reloads and searches record their failures in the state
    /// and settle as [`Outcome::Refreshed`].
    pub async fn dispatch(&mut self, intent: Intent) -> Result<Outcome> {
        match intent {
            Intent::Reload { page } => {
                self.reload(page).await;
                Ok(Outcome::Refreshed)
            }
            Intent::Search { query, page } => {
                self.search(&query, page).await;
                Ok(Outcome::Refreshed)
            }
            Intent::Create { draft } => self.create(draft).await.map(Outcome::Created),
            Intent::Update { id, patch } => self.update(&id, patch).await.map(Outcome::Updated),
            Intent::Delete { id } => {
                self.delete(&id).await?;
                Ok(Outcome::Deleted(id))
            }
        }
    }

    /// Replaces the list with a full fetch, in the service's order.
    ///
    /// On failure the prior list is kept and the error recorded; `loading`
    /// clears either way.
    pub async fn reload(&mut self, page: Page) {
        self.state.clear_error();
        self.state.loading = true;

        match self.directory.list(page).await {
            Ok(persons) => {
                self.state.replace_all(persons);
                self.state.active_query = None;
            }
            Err(error) => self.state.record_error(&error),
        }

        self.state.loading = false;
    }

    /// Replaces the list with search results.
    ///
    /// A blank query behaves exactly as a full reload — the search endpoint
    /// is never called with an empty `q`.
    pub async fn search(&mut self, query: &str, page: Page) {
        if query.trim().is_empty() {
            tracing::debug!("blank query, falling back to a full reload");
            return self.reload(page).await;
        }

        self.state.clear_error();
        self.state.searching = true;

        match self.directory.search(query, page).await {
            Ok(persons) => {
                self.state.replace_all(persons);
                self.state.active_query = Some(query.to_string());
            }
            Err(error) => self.state.record_error(&error),
        }

        self.state.searching = false;
    }

    /// Creates a record and prepends the service's representation.
    ///
    /// # Errors
    ///
    /// Returns a validation failure before any network call, or the remote
    /// failure after one; both are also recorded in the state.
    pub async fn create(&mut self, draft: PersonDraft) -> Result<Person> {
        self.state.clear_error();

        let draft = draft.normalized();
        if let Err(error) = draft.validate() {
            tracing::debug!(error = %error, "draft rejected before submission");
            self.state.record_error(&error);
            return Err(error);
        }

        self.state.submitting = true;
        let result = self.directory.create(&draft).await;
        self.state.submitting = false;

        match result {
            Ok(person) => {
                self.state.prepend(person.clone());
                Ok(person)
            }
            Err(error) => {
                self.state.record_error(&error);
                Err(error)
            }
        }
    }

    /// Updates a record and swaps the service's representation in place.
    ///
    /// # Errors
    ///
    /// Returns a validation failure before any network call, or the remote
    /// failure after one; both are also recorded in the state.
    pub async fn update(&mut self, id: &PersonId, patch: PersonPatch) -> Result<Person> {
        self.state.clear_error();

        let patch = patch.normalized();
        if let Err(error) = patch.validate() {
            tracing::debug!(error = %error, "patch rejected before submission");
            self.state.record_error(&error);
            return Err(error);
        }

        self.state.submitting = true;
        let result = self.directory.update(id, &patch).await;
        self.state.submitting = false;

        match result {
            Ok(person) => {
                self.state.replace(person.clone());
                Ok(person)
            }
            Err(error) => {
                self.state.record_error(&error);
                Err(error)
            }
        }
    }

    /// Deletes a record and removes it from the list.
    ///
    /// A repeated delete of the same id surfaces the service's not-found
    /// error and leaves the list unchanged.
    ///
    /// # Errors
    ///
    /// Returns the remote failure, also recorded in the state.
    pub async fn delete(&mut self, id: &PersonId) -> Result<()> {
        self.state.clear_error();
        self.state.deleting = Some(id.clone());

        let result = self.directory.delete(id).await;
        self.state.deleting = None;

        match result {
            Ok(()) => {
                self.state.remove(id);
                Ok(())
            }
            Err(error) => {
                self.state.record_error(&error);
                Err(error)
            }
        }
    }
}
