use rest_client::config::ApiConfig;

use super::{api_config, session_config::SessionConfig};

pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api: api_config::from_env(),
            session: SessionConfig::from_env(),
        }
    }
}
