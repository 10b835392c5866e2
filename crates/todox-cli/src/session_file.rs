//! Session persistence between invocations
//!
//! Each CLI run is one request. The session backend's lists survive from
//! run to run in a JSON file, standing in for a browser cookie.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use todox_core::Session;

pub const DEFAULT_SESSION_FILE: &str = ".todox-session.json";

/// Load the session, or start an empty one if the file does not exist
pub fn load(path: &Path) -> Result<Session, Box<dyn std::error::Error>> {
    match fs::read_to_string(path) {
        Ok(json) => Ok(Session::from_json(&json)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Session::new()),
        Err(e) => Err(format!("cannot read session file {}: {}", path.display(), e).into()),
    }
}

pub fn save(path: &Path, session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, session.to_json()?)?;
    Ok(())
}
