//! Request-scoped session state
//!
//! A `Session` is handed to each request by the caller; the session-backed
//! store keeps its lists here and every handler leaves its flash here. It
//! serializes to JSON so a front end can carry it between requests the way
//! a cookie session would.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::flash::{Flash, Message};
use crate::model::List;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub lists: Vec<List>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash: Option<Flash>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the message to show on the next response, replacing any other
    pub fn set_flash(&mut self, message: Message) {
        self.flash = Some(Flash::for_message(message));
    }

    /// Take the pending flash; it is shown exactly once
    pub fn take_flash(&mut self) -> Option<Flash> {
        self.flash.take()
    }

    /// Restore a session from its JSON form
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the JSON does not describe a session.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the session to JSON
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
