//! One-shot status messages shown on the next rendered response
//!
//! `Message` replaces a string-keyed lookup table: handlers pick a variant,
//! and only the presentation layer turns it into text via `Display`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every status message a handler can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    // Success
    ListCreated,
    ListUpdated,
    ListDeleted,
    TodoAdded,
    TodoDeleted,
    TodoUpdated,
    TodosCompleted,

    // Error
    InvalidListName,
    ListNameNotUnique,
    InvalidTodoName,
    ListNotFound,
}

impl Message {
    /// Whether this message reports a failure
    pub fn is_error(self) -> bool {
        matches!(
            self,
            Message::InvalidListName
                | Message::ListNameNotUnique
                | Message::InvalidTodoName
                | Message::ListNotFound
        )
    }

    pub fn text(self) -> &'static str {
        match self {
            Message::ListCreated => "The list has been created.",
            Message::ListUpdated => "The list has been updated.",
            Message::ListDeleted => "The list has been deleted.",
            Message::TodoAdded => "The todo was added.",
            Message::TodoDeleted => "The todo has been deleted.",
            Message::TodoUpdated => "The todo has been updated.",
            Message::TodosCompleted => "All todos have been completed.",
            Message::InvalidListName => "List name must be between 1 and 100 characters.",
            Message::ListNameNotUnique => "The list name must be unique.",
            Message::InvalidTodoName => "Todo must be between 1 and 100 characters.",
            Message::ListNotFound => "The specified list was not found.",
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    Success,
    Error,
}

/// A message paired with how it should be styled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub message: Message,
    pub kind: FlashKind,
}

impl Flash {
    /// Build a flash whose kind follows from the message
    pub fn for_message(message: Message) -> Self {
        let kind = if message.is_error() {
            FlashKind::Error
        } else {
            FlashKind::Success
        };
        Self { message, kind }
    }
}
