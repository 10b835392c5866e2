//! Backend configuration
//!
//! Read once at startup from the environment (`TODOX_BACKEND`,
//! `DATABASE_URL`, `TODOX_LOG`); front ends may override single values
//! before turning the config into a `Backend`.

use std::str::FromStr;

use todox_core::errors::{ExError, TodoXError};
use todox_core::logging_facility::Profile;
use todox_core_types::Sensitive;
use todox_store::errors::Result;

use crate::backend::Backend;

pub const ENV_BACKEND: &str = "TODOX_BACKEND";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_LOG_PROFILE: &str = "TODOX_LOG";

/// Database used by the SQLite backend when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "sqlite://todos.db";

/// Which storage backend serves requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Lists live in the request's session
    #[default]
    Session,
    /// Lists live in a SQLite database
    Sqlite,
}

impl FromStr for BackendKind {
    type Err = TodoXError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "session" | "memory" => Ok(BackendKind::Session),
            "sqlite" | "database" | "db" => Ok(BackendKind::Sqlite),
            other => Err(TodoXError::Config {
                message: format!("unknown backend '{}' (expected session or sqlite)", other),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: BackendKind,
    pub database_url: Option<Sensitive<String>>,
    pub log_profile: Profile,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            database_url: None,
            log_profile: Profile::Development,
        }
    }
}

impl StoreConfig {
    /// Build the configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns `Config` if a variable holds an unrecognized value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns `Config` if a variable holds an unrecognized value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(backend) = lookup(ENV_BACKEND).filter(|v| !v.is_empty()) {
            config.backend = backend.parse().map_err(ExError::from)?;
        }
        if let Some(url) = lookup(ENV_DATABASE_URL).filter(|v| !v.is_empty()) {
            config.database_url = Some(Sensitive::new(url));
        }
        if let Some(profile) = lookup(ENV_LOG_PROFILE).filter(|v| !v.is_empty()) {
            config.log_profile = profile.parse().map_err(ExError::from)?;
        }

        Ok(config)
    }

    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(Sensitive::new(url.into()));
        self
    }

    /// Resolve the configured backend
    ///
    /// The SQLite backend falls back to `DEFAULT_DATABASE_URL`.
    pub fn backend(&self) -> Backend {
        match self.backend {
            BackendKind::Session => Backend::Session,
            BackendKind::Sqlite => Backend::Sqlite {
                database_url: self
                    .database_url
                    .clone()
                    .unwrap_or_else(|| Sensitive::new(DEFAULT_DATABASE_URL.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_to_session_backend() {
        let config = StoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.backend, BackendKind::Session);
        assert!(config.database_url.is_none());
        assert_eq!(config.log_profile, Profile::Development);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = StoreConfig::from_lookup(lookup(&[
            (ENV_BACKEND, "sqlite"),
            (ENV_DATABASE_URL, "sqlite://prod.db"),
            (ENV_LOG_PROFILE, "production"),
        ]))
        .unwrap();

        assert_eq!(config.backend, BackendKind::Sqlite);
        assert_eq!(
            config.database_url.as_ref().map(|u| u.expose().as_str()),
            Some("sqlite://prod.db")
        );
        assert_eq!(config.log_profile, Profile::Production);
    }

    #[test]
    fn test_unknown_backend_is_config_error() {
        let err = StoreConfig::from_lookup(lookup(&[(ENV_BACKEND, "redis")])).unwrap_err();
        assert_eq!(err.code(), "ERR_CONFIG");
    }

    #[test]
    fn test_sqlite_falls_back_to_default_url() {
        let backend = StoreConfig::default()
            .with_backend(BackendKind::Sqlite)
            .backend();
        match backend {
            Backend::Sqlite { database_url } => {
                assert_eq!(database_url.expose(), DEFAULT_DATABASE_URL)
            }
            other => panic!("Expected sqlite backend, got {:?}", other),
        }
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = StoreConfig::default().with_database_url("postgres://u:secret@h/db");
        assert!(!format!("{:?}", config).contains("secret"));
    }
}
