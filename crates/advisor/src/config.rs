//! Text service configuration, the `[advisor]` section of `config.toml`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdvisorConfig {
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// How long a tip stays on screen.
    #[serde(default = "default_advice_ttl")]
    pub advice_ttl_secs: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
            endpoint: default_endpoint(),
            advice_ttl_secs: default_advice_ttl(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl AdvisorConfig {
    /// The API key from the environment, if set and non-blank.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    pub fn advice_ttl(&self) -> Duration {
        Duration::from_secs(self.advice_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}
fn default_api_key_env() -> String {
    "API_KEY".to_string()
}
fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
fn default_advice_ttl() -> u64 {
    8
}
fn default_request_timeout() -> u64 {
    10
}
