//! Persondir: a terminal client for a person-directory REST service.
//!
//! Persondir mirrors a remote contact directory into local view state and
//! keeps the two consistent without a full reload after every mutation:
//! - list and search records, with pass-through pagination bounds
//! - create, edit, and delete records through the service's JSON contract
//! - surface loading/searching/submitting/deleting flags and the last
//!   failure message for presentation
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI Shim (main.rs)                                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← View state
//! │  - Intent dispatch                                  │  ← Reconciliation
//! │  - List/flag reconciliation                         │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐       ┌─────────────────────────┐
//! │ UI Layer (ui/)    │       │ Client Layer (client/)  │
//! │ - View models     │       │ - Directory trait       │
//! │ - Text rendering  │       │ - HTTP transport        │
//! └───────────────────┘       │ - Request construction  │
//!         │                   └─────────────────────────┘
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Person model, drafts, patches, validation        │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: view-state controller with intent/outcome model
//! - [`client`]: remote directory client (trait seam + HTTP implementation)
//! - [`domain`]: core domain types (Person, payloads, errors)
//! - [`ui`]: view-model computation and text rendering
//! - [`observability`]: tracing subscriber setup
//!
//! # Configuration
//!
//! The service base URL is resolved once at startup and immutable afterwards,
//! from highest to lowest precedence: the `--base-url` flag, the
//! `PERSONDIR_API_URL` environment variable, a TOML configuration file, and
//! finally the default `http://localhost:8000`.
//!
//! ```toml
//! # persondir.toml
//! base_url = "http://directory.internal:8000"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```no_run
//! use persondir::{initialize, Config, Intent, Page};
//!
//! # async fn run() -> persondir::Result<()> {
//! let config = Config::resolve(None, None, None)?;
//! let mut controller = initialize(&config)?;
//!
//! controller.dispatch(Intent::Reload { page: Page::default() }).await?;
//! for person in &controller.state().persons {
//!     println!("{}", person.full_name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod observability;
pub mod ui;

pub use app::{DirectoryController, DirectoryState, Intent, Outcome};
pub use client::{Directory, Page, RemoteDirectory};
pub use domain::{DirectoryError, Person, PersonDraft, PersonId, PersonPatch, Result};

use serde::Deserialize;
use std::path::Path;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the configured base URL.
const BASE_URL_ENV: &str = "PERSONDIR_API_URL";

/// Process configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the directory service, without a trailing slash.
    pub base_url: String,

    /// Tracing filter directive, e.g. `"debug"` or `"persondir=trace"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            trace_level: None,
        }
    }
}

/// On-disk configuration file shape. Every field is optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    base_url: Option<String>,
    trace_level: Option<String>,
}

impl Config {
    /// Resolves the configuration from flags, environment, and an optional
    /// TOML file.
    ///
    /// Precedence for the base URL: `base_url` flag > `PERSONDIR_API_URL` >
    /// config file > [`DEFAULT_BASE_URL`]. The trace level prefers the flag,
    /// then the file. Trailing slashes are trimmed from the resolved URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration file cannot be read or parsed.
    pub fn resolve(
        base_url: Option<String>,
        trace_level: Option<String>,
        file: Option<&Path>,
    ) -> Result<Self> {
        let env_url = std::env::var(BASE_URL_ENV).ok();
        Self::resolve_with(base_url, trace_level, file, env_url)
    }

    fn resolve_with(
        base_url: Option<String>,
        trace_level: Option<String>,
        file: Option<&Path>,
        env_url: Option<String>,
    ) -> Result<Self> {
        let from_file = match file {
            Some(path) => Self::read_file(path)?,
            None => ConfigFile::default(),
        };

        let base_url = base_url
            .or_else(|| env_url.filter(|value| !value.trim().is_empty()))
            .or(from_file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            trace_level: trace_level.or(from_file.trace_level),
        })
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            DirectoryError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }
}

/// Builds a controller wired to the configured directory service.
///
/// The returned controller starts in the initial `loading` state with an
/// empty list; dispatch a [`Intent::Reload`] to populate it.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be constructed.
pub fn initialize(config: &Config) -> Result<DirectoryController<RemoteDirectory>> {
    tracing::debug!(base_url = %config.base_url, "initializing directory client");

    let remote = RemoteDirectory::new(&config.base_url)?;
    Ok(DirectoryController::new(remote))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_points_at_localhost() {
        let config = Config::resolve_with(None, None, None, None).expect("resolve");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn environment_beats_the_file_and_the_flag_beats_both() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("persondir.toml");
        std::fs::write(&path, "base_url = \"http://from-file:1\"\n").expect("write");

        let config = Config::resolve_with(
            None,
            None,
            Some(&path),
            Some("http://from-env:2".to_string()),
        )
        .expect("resolve");
        assert_eq!(config.base_url, "http://from-env:2");

        let config = Config::resolve_with(
            Some("http://from-flag:3".to_string()),
            None,
            Some(&path),
            Some("http://from-env:2".to_string()),
        )
        .expect("resolve");
        assert_eq!(config.base_url, "http://from-flag:3");
    }

    #[test]
    fn blank_environment_values_are_ignored() {
        let config =
            Config::resolve_with(None, None, None, Some("   ".to_string())).expect("resolve");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn file_values_apply_and_trailing_slashes_are_trimmed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("persondir.toml");
        std::fs::write(
            &path,
            "base_url = \"http://directory.internal:8000/\"\ntrace_level = \"debug\"\n",
        )
        .expect("write");

        let config = Config::resolve_with(None, None, Some(&path), None).expect("resolve");
        assert_eq!(config.base_url, "http://directory.internal:8000");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn unreadable_files_surface_as_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("missing.toml");
        assert!(Config::resolve_with(None, None, Some(&missing), None).is_err());

        let invalid = dir.path().join("invalid.toml");
        std::fs::write(&invalid, "base_url = [not toml").expect("write");
        let result = Config::resolve_with(None, None, Some(&invalid), None);
        assert!(matches!(result, Err(DirectoryError::Config(_))));
    }
}
