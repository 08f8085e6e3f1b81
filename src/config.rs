use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::huggingface::client::DEFAULT_HF_API_URL;
use crate::models::download::{default_model_dir, embedding_files_present};
use crate::qa::huggingface::DEFAULT_QA_MODEL;
use crate::search::client::DEFAULT_SEMANTIC_SCHOLAR_URL;
use crate::summarize::huggingface::DEFAULT_SUMMARIZER_MODEL;

/// Central configuration loaded from environment variables.
///
/// Secrets come from env vars (never hardcoded). The .env file is loaded
/// at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hugging Face access token. Optional: anonymous inference works at a
    /// lower rate limit.
    pub hf_token: Option<String>,
    /// Hugging Face Inference API base URL
    pub hf_api_url: String,
    /// Hosted summarization model id
    pub summarizer_model: String,
    /// Hosted extractive QA model id
    pub qa_model: String,
    /// Semantic Scholar Graph API base URL
    pub semantic_scholar_url: String,
    /// Semantic Scholar API key (raises the request quota)
    pub semantic_scholar_api_key: Option<String>,
    /// Directory containing downloaded ONNX models
    pub model_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables. Everything has a default.
    pub fn load() -> Result<Self> {
        Ok(Self {
            hf_token: non_empty_var("HF_TOKEN"),
            hf_api_url: env::var("PAPERLENS_HF_API_URL")
                .unwrap_or_else(|_| DEFAULT_HF_API_URL.to_string()),
            summarizer_model: env::var("PAPERLENS_SUMMARIZER_MODEL")
                .unwrap_or_else(|_| DEFAULT_SUMMARIZER_MODEL.to_string()),
            qa_model: env::var("PAPERLENS_QA_MODEL")
                .unwrap_or_else(|_| DEFAULT_QA_MODEL.to_string()),
            semantic_scholar_url: env::var("SEMANTIC_SCHOLAR_API_URL")
                .unwrap_or_else(|_| DEFAULT_SEMANTIC_SCHOLAR_URL.to_string()),
            semantic_scholar_api_key: non_empty_var("SEMANTIC_SCHOLAR_API_KEY"),
            model_dir: env::var("PAPERLENS_MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_model_dir()),
        })
    }

    /// Check that the embedding model has been downloaded.
    /// Call this before any operation that computes novelty.
    pub fn require_embedding_model(&self) -> Result<()> {
        if !embedding_files_present(&self.model_dir) {
            anyhow::bail!(
                "Sentence embedding model not found in {}\n\
                 Run `paperlens download-model` to download it.",
                self.model_dir.display()
            );
        }
        Ok(())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_embedding_model_fails_without_files() {
        let config = Config {
            hf_token: None,
            hf_api_url: DEFAULT_HF_API_URL.to_string(),
            summarizer_model: DEFAULT_SUMMARIZER_MODEL.to_string(),
            qa_model: DEFAULT_QA_MODEL.to_string(),
            semantic_scholar_url: DEFAULT_SEMANTIC_SCHOLAR_URL.to_string(),
            semantic_scholar_api_key: None,
            model_dir: std::env::temp_dir().join("paperlens-config-missing"),
        };
        let err = config.require_embedding_model().unwrap_err();
        assert!(err.to_string().contains("download-model"));
    }
}
