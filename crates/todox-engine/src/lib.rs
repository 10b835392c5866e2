//! todox engine - request orchestration
//!
//! Selects the storage backend once from configuration, opens a store for
//! each request, and runs the validated, flash-reporting command handlers
//! against it.

pub mod backend;
pub mod commands;
pub mod config;

pub use backend::Backend;
pub use commands::Outcome;
pub use config::{BackendKind, StoreConfig};
