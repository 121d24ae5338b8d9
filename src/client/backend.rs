//! Remote collection abstraction.
//!
//! This module defines the [`Directory`] trait that abstracts over the remote
//! person collection. The view-state controller is generic over it, which
//! keeps the reconciliation logic testable against an in-memory double while
//! [`RemoteDirectory`](crate::client::RemoteDirectory) provides the HTTP
//! implementation.
//!
//! # Design Philosophy
//!
//! The trait is minimal and mirrors the service's verbs one-to-one, not a
//! generic repository: each method maps directly to a user intent handled by
//! the controller.

use async_trait::async_trait;

use crate::domain::error::Result;
use crate::domain::person::{Person, PersonDraft, PersonId, PersonPatch};

/// Pass-through pagination bounds.
///
/// Absent bounds are *omitted* from the request, never defaulted client-side;
/// the service applies its own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    /// Number of records to skip, when set.
    pub skip: Option<u32>,
    /// Maximum number of records to return, when set.
    pub limit: Option<u32>,
}

impl Page {
    /// Creates a page from optional bounds.
    #[must_use]
    pub const fn new(skip: Option<u32>, limit: Option<u32>) -> Self {
        Self { skip, limit }
    }
}

/// Abstraction over the remote person collection.
///
/// One method per service verb. Implementations normalize every failure into
/// [`DirectoryError::Remote`](crate::domain::DirectoryError::Remote) so the
/// caller never branches on transport vs. application failure.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Retrieves records in the service's order, honoring optional bounds.
    ///
    /// # Errors
    ///
    /// Returns an error for any non-2xx response or transport failure.
    async fn list(&self, page: Page) -> Result<Vec<Person>>;

    /// Retrieves a single record by id.
    ///
    /// # Errors
    ///
    /// Returns a remote error with status 404 when the record is absent.
    async fn fetch(&self, id: &PersonId) -> Result<Person>;

    /// Creates a record and returns the stored representation.
    ///
    /// The service assigns the id and both timestamps. Field validation is
    /// the caller's responsibility, not this layer's.
    ///
    /// # Errors
    ///
    /// Returns an error for any non-2xx response or transport failure.
    async fn create(&self, draft: &PersonDraft) -> Result<Person>;

    /// Changes only the fields present in the patch and returns the stored
    /// representation. Absent fields are left untouched service-side.
    ///
    /// # Errors
    ///
    /// Returns an error for any non-2xx response or transport failure.
    async fn update(&self, id: &PersonId, patch: &PersonPatch) -> Result<Person>;

    /// Removes a record.
    ///
    /// A second delete of the same id fails with the service's not-found
    /// error; the caller treats that as terminal, never as something to
    /// retry.
    ///
    /// # Errors
    ///
    /// Returns an error for any non-2xx response or transport failure.
    async fn delete(&self, id: &PersonId) -> Result<()>;

    /// Searches records by name.
    ///
    /// `query` must be non-empty: a blank query is the caller's signal to use
    /// [`list`](Directory::list) instead, and never reaches this operation.
    ///
    /// # Errors
    ///
    /// Returns an error for any non-2xx response or transport failure.
    async fn search(&self, query: &str, page: Page) -> Result<Vec<Person>>;
}
