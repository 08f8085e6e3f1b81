// Hugging Face Inference API client.
//
// Both hosted pipelines (summarization and extractive QA) are a JSON POST to
// `{base}/models/{model}`. This client owns the reqwest handle, the optional
// bearer token, and the status/error mapping; the pipeline modules only
// build request bodies and read responses.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default Inference API endpoint.
pub const DEFAULT_HF_API_URL: &str = "https://router.huggingface.co/hf-inference";

/// Hosted models can take a while on a cold start.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Thin reqwest wrapper for hosted model inference.
#[derive(Clone)]
pub struct HfInferenceClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HfInferenceClient {
    /// Create a client. An empty token is treated as anonymous access.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("paperlens/0.1 (research-assistant)")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Full URL for a model's inference endpoint.
    pub fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url, model)
    }

    /// POST an inference request and deserialize the response.
    pub async fn infer<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        model: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.model_url(model);
        debug!(model = model, "Hugging Face inference request");

        let mut request = self.client.post(&url).json(body);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Inference request failed: {model}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<HfErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            anyhow::bail!("Inference API {model} returned {status}: {message}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize {model} response"))
    }
}

/// Error payload the Inference API returns on failure.
#[derive(Debug, Deserialize)]
pub struct HfErrorBody {
    pub error: String,
}
