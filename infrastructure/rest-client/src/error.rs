use business::domain::errors::GatewayError;
use serde_json::Value;

/// Normalized failure of a backend call. `Display` is the message to show.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No usable HTTP response: connection refused, timeout, bad URL...
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// A 2xx body that does not have the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// Builds the error for a non-2xx response from its raw body.
    ///
    /// Preference: the body's `message` field, then its `error` field, then
    /// the raw body, then a generic status line when the body is empty.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = Self::server_message(body)
            .unwrap_or_else(|| format!("Request failed with status code {}", status));
        ApiError::Server { status, message }
    }

    pub fn from_transport(err: reqwest::Error) -> Self {
        let target = err
            .url()
            .map(|url| url.to_string())
            .unwrap_or_else(|| "the server".to_string());
        let message = if err.is_timeout() {
            format!("Request to {} timed out", target)
        } else if err.is_connect() {
            format!("Could not connect to {}", target)
        } else {
            err.to_string()
        };
        ApiError::Transport(message)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    fn server_message(body: &str) -> Option<String> {
        let raw = body.trim();
        if raw.is_empty() {
            return None;
        }

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(fields)) => ["message", "error"]
                .iter()
                .filter_map(|key| fields.get(*key).and_then(Value::as_str))
                .map(str::trim)
                .find(|message| !message.is_empty())
                .map(str::to_string)
                .or_else(|| Some(raw.to_string())),
            Ok(Value::String(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
            _ => Some(raw.to_string()),
        }
    }
}

impl From<ApiError> for GatewayError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(message) => GatewayError::Unavailable(message),
            ApiError::Server { status, message } => GatewayError::Rejected { status, message },
            ApiError::Decode(message) => GatewayError::InvalidResponse(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefer_message_field() {
        let err = ApiError::from_response(
            400,
            r#"{"message":"Product is out of stock","error":"Bad Request"}"#,
        );

        assert_eq!(err.to_string(), "Product is out of stock");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn should_fall_back_to_error_field() {
        let err = ApiError::from_response(500, r#"{"error":"Statistics unavailable"}"#);

        assert_eq!(err.to_string(), "Statistics unavailable");
    }

    #[test]
    fn should_use_raw_body_when_not_structured() {
        let err = ApiError::from_response(409, "Booking already confirmed");

        assert_eq!(err.to_string(), "Booking already confirmed");
    }

    #[test]
    fn should_use_raw_json_when_no_known_field() {
        let err = ApiError::from_response(422, r#"{"code":42}"#);

        assert_eq!(err.to_string(), r#"{"code":42}"#);
    }

    #[test]
    fn should_describe_status_when_body_empty() {
        let err = ApiError::from_response(502, "  ");

        assert_eq!(err.to_string(), "Request failed with status code 502");
    }

    #[test]
    fn should_detect_unauthorized() {
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert!(!ApiError::Transport("Could not connect".to_string()).is_unauthorized());
    }

    #[test]
    fn should_convert_into_gateway_error() {
        let err: GatewayError = ApiError::from_response(404, r#"{"message":"Order not found"}"#).into();

        assert_eq!(err, GatewayError::rejected(404, "Order not found"));
    }
}
