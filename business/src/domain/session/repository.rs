use async_trait::async_trait;

use super::errors::SessionError;
use super::model::Session;

/// Client-side persistence of the login session.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Returns an anonymous session when nothing has been stored yet.
    async fn load(&self) -> Result<Session, SessionError>;
    async fn save(&self, session: &Session) -> Result<(), SessionError>;
    async fn clear(&self) -> Result<(), SessionError>;
}
