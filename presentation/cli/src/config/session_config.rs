use std::env;
use std::path::PathBuf;

pub const DEFAULT_SESSION_FILE: &str = ".foodee-session.json";

/// Where the login session is persisted between runs
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub path: PathBuf,
}

impl SessionConfig {
    /// Environment variables:
    /// - FOODEE_SESSION_FILE: Path of the session file (default: ".foodee-session.json")
    pub fn from_env() -> Self {
        let path = env::var("FOODEE_SESSION_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SESSION_FILE.to_string());

        Self {
            path: PathBuf::from(path),
        }
    }
}
