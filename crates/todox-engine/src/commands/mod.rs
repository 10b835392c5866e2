//! Command handlers shared by every front end
//!
//! Each mutating handler trims its input, checks that the target list
//! exists, validates names, then calls the store. The result is an
//! `Outcome` carrying the flash message the caller should show.
//!
//! ## Logging Ownership
//!
//! Handlers own lifecycle logging (`log_op_start!`, `log_op_end!`,
//! `log_op_error!`), tagged with the request id. The stores below log only
//! at `debug`, plus the relational store's statement events.

pub mod lists;
pub mod todos;

use std::time::Instant;

use todox_core::errors::ExError;
use todox_core::rules::rejection_message;
use todox_core::{log_op_end, log_op_error, log_op_start, Message, TodoXError};
use todox_core_types::RequestContext;
use todox_store::errors::Result;

pub use lists::{list_create, list_delete, list_rename, list_show, lists_index};
pub use todos::{todo_create, todo_delete, todo_set_status, todos_complete_all};

/// What a mutating handler did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The store was changed
    Done(Message),
    /// Input failed validation; nothing was written
    Rejected(Message),
    /// The target list does not exist
    NotFound,
}

impl Outcome {
    /// The flash message to show for this outcome
    pub fn message(self) -> Message {
        match self {
            Outcome::Done(message) | Outcome::Rejected(message) => message,
            Outcome::NotFound => Message::ListNotFound,
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, Outcome::Done(_))
    }
}

/// Turn a validation result into a rejection, or pass other errors through
pub(crate) fn reject(err: TodoXError) -> Result<Outcome> {
    match rejection_message(&err) {
        Some(Message::ListNotFound) => Ok(Outcome::NotFound),
        Some(message) => Ok(Outcome::Rejected(message)),
        None => Err(err.into()),
    }
}

/// Wrap a handler body in start/end logging
pub(crate) fn logged<T, F>(op: &'static str, ctx: &RequestContext, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let request_id = ctx.request_id.as_str();
    log_op_start!(op, request_id = request_id);
    let start = Instant::now();

    let result = f().map_err(|e: ExError| {
        let e = e.with_op(op).with_request_id(ctx.request_id.clone());
        log_op_error!(
            op,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = request_id
        );
        e
    })?;

    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = request_id
    );

    Ok(result)
}
