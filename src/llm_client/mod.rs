//! Thin client for the AI proxy's completion and embedding endpoints.
//!
//! One shared `reqwest::Client` (with its fixed timeout) does all the work;
//! there are no retries, no backoff and no rate limiting. Calls fail up front
//! when the bearer token is unset.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

pub const CHAT_MODEL: &str = "gpt-4o-mini";
pub const EMBEDDING_MODEL: &str = "text-embedding-3-small";

pub struct LlmClient {
    http_client: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingRow>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingRow {
    embedding: Vec<f32>,
}

impl LlmClient {
    pub fn new(http_client: reqwest::Client, base_url: String, token: String) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Single-turn completion; returns the first choice's content, trimmed.
    pub async fn chat(&self, prompt: &str) -> Result<String> {
        let payload = json!({
            "model": CHAT_MODEL,
            "messages": [{ "role": "user", "content": prompt }],
        });
        let completion: ChatCompletion = self
            .post("/chat/completions", payload)
            .await?
            .json()
            .await
            .context("failed to parse chat completion response")?;
        extract_content(completion)
    }

    /// Completion with an inline PNG payload attached to the user message.
    pub async fn chat_with_image(&self, prompt: &str, png_base64: &str) -> Result<String> {
        let payload = json!({
            "model": CHAT_MODEL,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": prompt },
                    {
                        "type": "image_url",
                        "image_url": { "url": format!("data:image/png;base64,{png_base64}") },
                    },
                ],
            }],
        });
        let completion: ChatCompletion = self
            .post("/chat/completions", payload)
            .await?
            .json()
            .await
            .context("failed to parse chat completion response")?;
        extract_content(completion)
    }

    /// One embedding vector per input, in input order.
    pub async fn embeddings(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>> {
        let payload = json!({
            "model": EMBEDDING_MODEL,
            "input": inputs,
        });
        let response: EmbeddingResponse = self
            .post("/embeddings", payload)
            .await?
            .json()
            .await
            .context("failed to parse embedding response")?;

        if response.data.len() != inputs.len() {
            bail!(
                "AI proxy returned {} embeddings for {} inputs",
                response.data.len(),
                inputs.len()
            );
        }

        Ok(response.data.into_iter().map(|row| row.embedding).collect())
    }

    async fn post(&self, path: &str, payload: serde_json::Value) -> Result<reqwest::Response> {
        if self.token.is_empty() {
            bail!("AIPROXY_TOKEN is not set; LLM-backed tasks are unavailable");
        }

        let endpoint = format!("{}{}", self.base_url, path);
        debug!(endpoint = %endpoint, "Sending AI proxy request");

        let response = self
            .http_client
            .post(&endpoint)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("request to {endpoint} failed"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("AI proxy returned error status {status}: {body}");
        }

        Ok(response)
    }
}

fn extract_content(completion: ChatCompletion) -> Result<String> {
    let content = completion
        .choices
        .first()
        .map(|choice| choice.message.content.trim().to_string())
        .unwrap_or_default();

    if content.is_empty() {
        bail!("AI proxy returned an empty completion");
    }
    Ok(content)
}
