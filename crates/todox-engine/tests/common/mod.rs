#![allow(dead_code)]

use tempfile::TempDir;
use todox_core::Session;
use todox_core_types::{RequestContext, Sensitive};
use todox_engine::Backend;

/// A SQLite backend whose database file lives as long as the returned dir
pub fn sqlite_backend() -> (TempDir, Backend) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("todos.db");
    let backend = Backend::Sqlite {
        database_url: Sensitive::new(format!("sqlite://{}", path.display())),
    };
    (dir, backend)
}

pub fn ctx() -> RequestContext {
    RequestContext::new()
}

pub fn new_session() -> Session {
    Session::new()
}
