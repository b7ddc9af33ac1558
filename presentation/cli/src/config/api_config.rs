use std::env;
use std::time::Duration;

use rest_client::config::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use tracing::warn;

/// Load the backend API configuration from environment variables
///
/// Environment variables:
/// - FOODEE_API_URL: Base URL of the backend API (default: "http://localhost:8080/api")
/// - FOODEE_API_TIMEOUT_SECS: Request timeout in seconds (default: 5)
pub fn from_env() -> ApiConfig {
    from_values(
        env::var("FOODEE_API_URL").ok(),
        env::var("FOODEE_API_TIMEOUT_SECS").ok(),
    )
}

fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> ApiConfig {
    let base_url = base_url
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let timeout = match timeout_secs {
        None => DEFAULT_TIMEOUT,
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                warn!("Ignoring invalid FOODEE_API_TIMEOUT_SECS value '{}'", raw);
                DEFAULT_TIMEOUT
            }
        },
    };

    ApiConfig::new(base_url).with_timeout(timeout)
}
