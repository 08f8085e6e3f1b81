// Summarizer trait: swap-ready abstraction over the hosted model.

use anyhow::Result;
use async_trait::async_trait;

/// Generation limits passed to the summarization model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryParams {
    /// Upper bound on summary length, in model tokens
    pub max_length: u32,
    /// Lower bound on summary length, in model tokens
    pub min_length: u32,
    /// Greedy decoding when false
    pub do_sample: bool,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            max_length: 200,
            min_length: 30,
            do_sample: false,
        }
    }
}

/// Trait for summarizing a single chunk of text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize_chunk(&self, chunk: &str, params: &SummaryParams) -> Result<String>;
}
