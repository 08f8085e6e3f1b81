// Summarization via the Hugging Face Inference API (facebook/bart-large-cnn).

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{SummaryParams, Summarizer};
use crate::huggingface::client::HfInferenceClient;

/// Default hosted summarization model.
pub const DEFAULT_SUMMARIZER_MODEL: &str = "facebook/bart-large-cnn";

/// Summarizer backed by a hosted seq2seq model.
pub struct HfSummarizer {
    client: HfInferenceClient,
    model: String,
}

impl HfSummarizer {
    pub fn new(client: HfInferenceClient, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl Summarizer for HfSummarizer {
    async fn summarize_chunk(&self, chunk: &str, params: &SummaryParams) -> Result<String> {
        let request = SummarizationRequest {
            inputs: chunk,
            parameters: SummarizationParameters {
                max_length: params.max_length,
                min_length: params.min_length,
                do_sample: params.do_sample,
            },
        };

        let response: Vec<SummarizationOutput> = self
            .client
            .infer(&self.model, &request)
            .await
            .context("Summarization request failed")?;

        let summary = response
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or_else(|| anyhow::anyhow!("Summarization returned no output"))?;

        debug!(
            input_chars = chunk.len(),
            summary_chars = summary.len(),
            "Summarized chunk"
        );

        Ok(summary)
    }
}

// --- Inference API request/response types ---

#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
}

#[derive(Serialize)]
struct SummarizationParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

/// One generated summary.
#[derive(Debug, Deserialize)]
pub struct SummarizationOutput {
    pub summary_text: String,
}
