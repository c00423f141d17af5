use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_timeout_secs() -> u64 {
    5
}

fn default_definition_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

/// Settings for outbound lookup calls
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    /// Per-request timeout for every external call
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Base URL of the definition service, the word is appended as a path segment
    #[serde(default = "default_definition_api_url")]
    pub definition_api_url: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_secs);

        let definition_api_url =
            env::var("DEFINITION_API_URL").unwrap_or_else(|_| default_definition_api_url());

        Self {
            request_timeout_secs,
            definition_api_url,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_timeout_secs(),
            definition_api_url: default_definition_api_url(),
        }
    }
}
