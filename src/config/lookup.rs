use serde::{Deserialize, Serialize};
use url::Url;

/// Outbound character-lookup configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// Base URL of the upstream character API. Must end with a trailing slash
    /// so relative paths join underneath it.
    /// TOML: `lookup.base_url`. Default: `https://swapi.dev/api/`.
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// Connect timeout for the upstream client, in seconds.
    /// TOML: `lookup.connect_timeout_secs`. Default: `5`.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Total request timeout for the upstream client, in seconds.
    /// TOML: `lookup.request_timeout_secs`. Default: `10`.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("https://swapi.dev/api/").expect("default lookup base url is valid")
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_request_timeout_secs() -> u64 {
    10
}
