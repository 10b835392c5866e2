//! todox core - domain model and storage contract
//!
//! This crate provides:
//! - `List`, `ListSummary` and `Todo` records
//! - The `ListStore` contract shared by every storage backend
//! - `SessionStore`, the backend that keeps lists in a request-scoped `Session`
//! - Name validation rules and flash messages used by the caller layer
//! - The structured error and logging facilities

pub mod errors;
pub mod flash;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;
pub mod session;

#[doc(hidden)]
pub use todox_core_types as core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, StoreResult, TodoXError};
pub use flash::{Flash, FlashKind, Message};
pub use model::{List, ListId, ListSummary, Todo, TodoId};
pub use ops::{ListStore, SessionStore};
pub use session::Session;
