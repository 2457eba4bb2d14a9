pub mod api;
pub mod config;
pub mod error;
pub mod llm_client;
pub mod router;
pub mod sandbox;
pub mod tasks;

use std::sync::Arc;
use std::time::Duration;

use config::Config;
use llm_client::LlmClient;

/// Shared, immutable per-process state handed to every request handler.
pub struct AppState {
    pub config: Config,
    pub http_client: reqwest::Client,
    pub llm: LlmClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Arc<Self>> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        let llm = LlmClient::new(
            http_client.clone(),
            config.aiproxy_url.clone(),
            config.aiproxy_token.clone(),
        );

        Ok(Arc::new(Self {
            config,
            http_client,
            llm,
        }))
    }
}
