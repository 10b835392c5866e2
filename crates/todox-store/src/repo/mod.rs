//! Repository layer persisting lists and todos to SQLite

pub mod sqlite_store;

pub use sqlite_store::SqliteStore;
