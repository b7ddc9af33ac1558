use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use business::domain::session::errors::SessionError;
use business::domain::session::model::Session;
use business::domain::session::repository::SessionRepository;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    token: Option<String>,
}

/// Keeps the session token in a small JSON file between runs.
pub struct FileSessionRepository {
    path: PathBuf,
}

impl FileSessionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionRepository for FileSessionRepository {
    async fn load(&self) -> Result<Session, SessionError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored session");
                return Ok(Session::anonymous());
            }
            Err(err) => {
                warn!(path = %self.path.display(), "Failed to read session: {}", err);
                return Err(SessionError::ReadFailed);
            }
        };

        if raw.trim().is_empty() {
            return Ok(Session::anonymous());
        }

        let stored: StoredSession = serde_json::from_str(&raw).map_err(|err| {
            warn!(path = %self.path.display(), "Stored session is corrupt: {}", err);
            SessionError::Corrupt
        })?;
        Ok(Session::from_stored(stored.token))
    }

    async fn save(&self, session: &Session) -> Result<(), SessionError> {
        let stored = StoredSession {
            token: session.token().map(|token| token.as_str().to_string()),
        };
        let json = serde_json::to_string_pretty(&stored).map_err(|_| SessionError::WriteFailed)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|_| SessionError::WriteFailed)?;
        }
        tokio::fs::write(&self.path, json).await.map_err(|err| {
            warn!(path = %self.path.display(), "Failed to write session: {}", err);
            SessionError::WriteFailed
        })
    }

    async fn clear(&self) -> Result<(), SessionError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => {
                warn!(path = %self.path.display(), "Failed to clear session: {}", err);
                Err(SessionError::WriteFailed)
            }
        }
    }
}
