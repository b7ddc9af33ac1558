/// Failures reported by a backend gateway.
///
/// The message carried by each variant is already the most specific one the
/// transport could produce, so callers can show it as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("{0}")]
    Unavailable(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("{0}")]
    InvalidResponse(String),
}

impl GatewayError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        GatewayError::Unavailable(message.into())
    }
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        GatewayError::Rejected {
            status,
            message: message.into(),
        }
    }
    pub fn invalid_response(message: impl Into<String>) -> Self {
        GatewayError::InvalidResponse(message.into())
    }

    /// HTTP status of a rejected call, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// The message to show, or `fallback` when the gateway produced none.
    pub fn message_or(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}
