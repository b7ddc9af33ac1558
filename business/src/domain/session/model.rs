use serde::{Deserialize, Serialize};

/// Bearer token issued by the backend at login.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens end up in logs through `{:?}` on the session; never print them.
impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

impl From<String> for SessionToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The caller's session, handed explicitly to every store and controller.
///
/// An anonymous session is valid: calls go out without an `Authorization`
/// header and the backend decides what to do with them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: Option<SessionToken>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn authenticated(token: impl Into<SessionToken>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Builds a session from a possibly blank persisted value.
    pub fn from_stored(token: Option<String>) -> Self {
        match token {
            Some(t) if !t.trim().is_empty() => Self::authenticated(t.trim()),
            _ => Self::anonymous(),
        }
    }

    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
