//! Request-scoped store acquisition
//!
//! `Backend` is chosen once at startup. For every request it hands the
//! handler a `&mut dyn ListStore`: either a `SessionStore` over the
//! request's session, or a `SqliteStore` whose connection is opened when
//! the request starts and closed when it ends, on success and error alike.

use std::time::Instant;

use todox_core::{ListStore, Session, SessionStore};
use todox_core_types::{RequestContext, Sensitive};
use todox_store::errors::Result;
use todox_store::SqliteStore;
use tracing::debug;

use crate::commands::Outcome;

#[derive(Debug, Clone, PartialEq)]
pub enum Backend {
    Session,
    Sqlite { database_url: Sensitive<String> },
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Session => "session",
            Backend::Sqlite { .. } => "sqlite",
        }
    }

    /// Run `f` against a store scoped to this request
    ///
    /// # Errors
    ///
    /// Returns `Persistence` or `Config` if the database cannot be opened,
    /// or whatever error `f` returns.
    pub fn with_store<T, F>(&self, session: &mut Session, f: F) -> Result<T>
    where
        F: FnOnce(&mut dyn ListStore) -> Result<T>,
    {
        match self {
            Backend::Session => {
                let mut store = SessionStore::new(session);
                f(&mut store)
            }
            Backend::Sqlite { database_url } => {
                let opened = Instant::now();
                let mut store = SqliteStore::open(database_url.expose())?;
                let result = f(&mut store);
                // Close even when f failed; its error wins over a close error
                let closed = store.disconnect();
                debug!(
                    held_ms = opened.elapsed().as_millis() as u64,
                    "sqlite connection released"
                );
                let value = result?;
                closed?;
                Ok(value)
            }
        }
    }

    /// Run a command handler and leave its message as the session's flash
    ///
    /// # Errors
    ///
    /// Same as [`Backend::with_store`]; no flash is set on error.
    pub fn dispatch<F>(&self, session: &mut Session, ctx: &RequestContext, f: F) -> Result<Outcome>
    where
        F: FnOnce(&mut dyn ListStore, &RequestContext) -> Result<Outcome>,
    {
        let outcome = self.with_store(session, |store| f(store, ctx))?;
        session.set_flash(outcome.message());
        Ok(outcome)
    }
}
