//! Pure request construction and failure decoding.
//!
//! Paths, query-parameter sets, and error-body decoding live here, separate
//! from the transport, so the wire contract is unit-testable without a
//! network. The transport in [`remote`](crate::client::remote) only moves
//! bytes.

use serde::Deserialize;

use crate::domain::error::DirectoryError;
use crate::domain::person::PersonId;

/// Collection endpoint. The trailing slash is part of the service's route.
pub(crate) const COLLECTION_PATH: &str = "/api/v1/persons/";

/// Search endpoint.
pub(crate) const SEARCH_PATH: &str = "/api/v1/persons/search";

/// Path of a single record.
pub(crate) fn record_path(id: &PersonId) -> String {
    format!("/api/v1/persons/{id}")
}

/// Query parameters for a list request.
///
/// Absent bounds are omitted entirely, never sent as defaults.
pub(crate) fn page_params(page: crate::client::Page) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(skip) = page.skip {
        params.push(("skip", skip.to_string()));
    }
    if let Some(limit) = page.limit {
        params.push(("limit", limit.to_string()));
    }
    params
}

/// Query parameters for a search request: the required `q` plus bounds.
pub(crate) fn search_params(query: &str, page: crate::client::Page) -> Vec<(&'static str, String)> {
    let mut params = vec![("q", query.to_string())];
    params.extend(page_params(page));
    params
}

/// Error body shape the service produces for rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Normalizes a non-2xx response into a [`DirectoryError::Remote`].
///
/// The service's `detail` field becomes the message when the body parses as
/// JSON with a string `detail`; anything else falls back to a generic message
/// carrying the status.
pub(crate) fn decode_failure(status: u16, body: &str) -> DirectoryError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.detail)
        .unwrap_or_else(|_| format!("request failed with status {status}"));

    DirectoryError::Remote { status, message }
}
