//! Application layer coordinating state, intents, and remote operations.
//!
//! This module is the core of the crate: it owns the locally mirrored record
//! list and keeps it consistent with the directory service without requiring
//! a full reload after every mutation.
//!
//! # Architecture
//!
//! The layer follows a unidirectional flow:
//!
//! ```text
//! Surface input → Intent → Controller → Directory (HTTP) → settled response
//!                              │
//!                              └→ DirectoryState mutations → view model
//! ```
//!
//! # Modules
//!
//! - [`controller`]: intent processing and list reconciliation
//! - [`intent`]: the requests a rendering surface emits, and their outcomes
//! - [`state`]: the mirrored list and UI-facing flags

pub mod controller;
pub mod intent;
pub mod state;

pub use controller::DirectoryController;
pub use intent::{Intent, Outcome};
pub use state::DirectoryState;
