//! Remote directory client layer.
//!
//! This module owns everything about talking to the person-directory service:
//! the [`Directory`] trait the controller is generic over, the pure request
//! construction and failure decoding, and the `reqwest`-backed transport.
//!
//! # Modules
//!
//! - `backend`: the [`Directory`] trait abstraction and pagination bounds
//! - `endpoints`: pure paths, query-parameter sets, and error-body decoding
//! - `remote`: the HTTP implementation, [`RemoteDirectory`]

pub mod backend;
pub mod endpoints;
pub mod remote;

pub use backend::{Directory, Page};
pub use remote::RemoteDirectory;
