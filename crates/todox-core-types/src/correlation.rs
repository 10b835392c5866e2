//! Request correlation
//!
//! Every CLI invocation or inbound request gets one `RequestContext`. The
//! engine tags its boundary log events with the request id, which ties the
//! relational store's statement logs to the command that issued them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id of a single request, a UUIDv7 unless supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Reuse an id issued upstream, e.g. from a request header
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-request state handed to every engine handler
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub request_id: RequestId,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_id(request_id: RequestId) -> Self {
        Self { request_id }
    }
}
