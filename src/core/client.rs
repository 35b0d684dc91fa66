use crate::core::request::RequestSpec;
use crate::utils::error::{CliError, Result};
use reqwest::Client;

/// Thin wrapper around one GET per process invocation. No retry, no caching;
/// timeout behavior is whatever reqwest's defaults provide.
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Perform the GET described by `spec` and hand back the JSON body.
    pub async fn fetch(&self, spec: &RequestSpec) -> Result<serde_json::Value> {
        let url = spec.url();
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(CliError::HttpStatus { status });
        }

        let text = response.text().await?;
        let body = serde_json::from_str(&text)?;
        Ok(body)
    }

    /// Fetch and render the body the way the CLI prints it.
    pub async fn fetch_pretty(&self, spec: &RequestSpec) -> Result<String> {
        let body = self.fetch(spec).await?;
        Ok(serde_json::to_string_pretty(&body)?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
