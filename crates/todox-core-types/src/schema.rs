//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical between the engine's boundary
//! logs, the store's statement logs and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_BACKEND: &str = "backend";

// Entity identifiers
pub const FIELD_LIST_ID: &str = "list_id";
pub const FIELD_TODO_ID: &str = "todo_id";

// Statement logging
pub const FIELD_SQL: &str = "sql";
pub const FIELD_PARAMS: &str = "params";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_QUERY: &str = "query";

/// Tracing target used for every SQL statement the relational store issues
pub const SQL_TARGET: &str = "todox_store::sql";
