//! HTTP implementation of the [`Directory`] trait.
//!
//! [`RemoteDirectory`] wraps a `reqwest` client pointed at a single base URL
//! and speaks the service's JSON contract: every request carries
//! `Content-Type: application/json`, success bodies are deserialized into
//! domain types, a 204 yields unit success without touching the body, and
//! every failure — application-level rejection or transport breakdown — is
//! normalized through [`endpoints::decode_failure`] into one error shape.
//!
//! No retries, no client-side timeout: the transport's defaults apply, and a
//! failed operation is surfaced once and left to the user to repeat.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::backend::{Directory, Page};
use crate::client::endpoints;
use crate::domain::error::{DirectoryError, Result};
use crate::domain::person::{Person, PersonDraft, PersonId, PersonPatch};

/// HTTP client for the person-directory service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RemoteDirectory {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteDirectory {
    /// Creates a client for the service at `base_url`.
    ///
    /// Trailing slashes on the base URL are trimmed so path joining stays
    /// predictable.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Config`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| DirectoryError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends a request and normalizes any failure.
    ///
    /// Non-2xx bodies are read and decoded for the service's `detail` field;
    /// transport failures coerce to the status-0 form of the same error.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await.map_err(|e| {
            DirectoryError::transport(format!("the directory service could not be reached: {e}"))
        })?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(endpoints::decode_failure(status.as_u16(), &body))
        }
    }

    /// Sends a request and deserializes the success body.
    async fn receive<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| DirectoryError::transport(format!("malformed response body: {e}")))
    }
}

#[async_trait]
impl Directory for RemoteDirectory {
    async fn list(&self, page: Page) -> Result<Vec<Person>> {
        tracing::debug!(skip = ?page.skip, limit = ?page.limit, "listing records");

        let request = self
            .http
            .get(self.url(endpoints::COLLECTION_PATH))
            .query(&endpoints::page_params(page));
        let persons: Vec<Person> = self.receive(request).await?;

        tracing::debug!(count = persons.len(), "records listed");
        Ok(persons)
    }

    async fn fetch(&self, id: &PersonId) -> Result<Person> {
        tracing::debug!(%id, "fetching record");

        let request = self.http.get(self.url(&endpoints::record_path(id)));
        self.receive(request).await
    }

    async fn create(&self, draft: &PersonDraft) -> Result<Person> {
        tracing::debug!("creating record");

        let request = self
            .http
            .post(self.url(endpoints::COLLECTION_PATH))
            .json(draft);
        let person: Person = self.receive(request).await?;

        tracing::debug!(id = %person.id, "record created");
        Ok(person)
    }

    async fn update(&self, id: &PersonId, patch: &PersonPatch) -> Result<Person> {
        tracing::debug!(%id, "updating record");

        let request = self
            .http
            .put(self.url(&endpoints::record_path(id)))
            .json(patch);
        self.receive(request).await
    }

    async fn delete(&self, id: &PersonId) -> Result<()> {
        tracing::debug!(%id, "deleting record");

        // Success is a 204 with no body; nothing to parse.
        let request = self.http.delete(self.url(&endpoints::record_path(id)));
        self.send(request).await?;

        tracing::debug!(%id, "record deleted");
        Ok(())
    }

    async fn search(&self, query: &str, page: Page) -> Result<Vec<Person>> {
        tracing::debug!(query = %query, "searching records");

        let request = self
            .http
            .get(self.url(endpoints::SEARCH_PATH))
            .query(&endpoints::search_params(query, page));
        let persons: Vec<Person> = self.receive(request).await?;

        tracing::debug!(count = persons.len(), "search completed");
        Ok(persons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed_from_the_base_url() {
        let remote = RemoteDirectory::new("http://localhost:8000///").expect("client");
        assert_eq!(remote.url("/api/v1/persons/"), "http://localhost:8000/api/v1/persons/");
    }
}
