use crate::config::LookupConfig;
use crate::error::LookupError;
use serde_json::Value;
use std::time::Duration;
use tracing::warn;
use url::Url;

/// Client for the upstream character API. The response schema is opaque:
/// whatever JSON the upstream returns is relayed to the caller unmodified.
#[derive(Clone)]
pub struct CharacterClient {
    client: reqwest::Client,
    base_url: Url,
}

impl CharacterClient {
    pub fn new(cfg: &LookupConfig) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .expect("failed to build reqwest client");

        Self {
            client,
            base_url: cfg.base_url.clone(),
        }
    }

    /// GET `<base>/people/<id>` and parse the body as JSON.
    pub async fn fetch_character(&self, id: &str) -> Result<Value, LookupError> {
        let url = self.base_url.join(&format!("people/{id}"))?;

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let raw_body = resp.text().await.unwrap_or_default();
            warn!(
                "Upstream character API error. Status: {}, Body: {:.100}",
                status, raw_body
            );
            return Err(LookupError::UpstreamStatus(status));
        }

        let bytes = resp.bytes().await?;
        let character: Value = serde_json::from_slice(&bytes)?;
        Ok(character)
    }
}
