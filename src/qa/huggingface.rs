// Question answering via the Hugging Face Inference API
// (distilbert-base-uncased-distilled-squad).

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Answer, QuestionAnswerer};
use crate::huggingface::client::HfInferenceClient;

/// Default hosted extractive QA model.
pub const DEFAULT_QA_MODEL: &str = "distilbert-base-uncased-distilled-squad";

/// Question answerer backed by a hosted extractive QA model.
pub struct HfQuestionAnswerer {
    client: HfInferenceClient,
    model: String,
}

impl HfQuestionAnswerer {
    pub fn new(client: HfInferenceClient, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl QuestionAnswerer for HfQuestionAnswerer {
    async fn answer(&self, question: &str, context: &str) -> Result<Answer> {
        let request = QaRequest {
            inputs: QaInputs { question, context },
        };

        let response: QaResponse = self
            .client
            .infer(&self.model, &request)
            .await
            .context("Question answering request failed")?;

        let span = response
            .best()
            .ok_or_else(|| anyhow::anyhow!("Question answering returned no answer"))?;

        debug!(score = span.score, "Answered question");

        Ok(Answer {
            answer: span.answer,
            score: span.score,
        })
    }
}

// --- Inference API request/response types ---

#[derive(Serialize)]
struct QaRequest<'a> {
    inputs: QaInputs<'a>,
}

#[derive(Serialize)]
struct QaInputs<'a> {
    question: &'a str,
    context: &'a str,
}

/// One extracted answer span.
#[derive(Debug, Clone, Deserialize)]
pub struct QaSpan {
    pub answer: String,
    pub score: f64,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
}

/// The API returns a single object, or a list when top_k > 1.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QaResponse {
    Single(QaSpan),
    Many(Vec<QaSpan>),
}

impl QaResponse {
    /// The highest-confidence span, if any.
    pub fn best(self) -> Option<QaSpan> {
        match self {
            QaResponse::Single(span) => Some(span),
            QaResponse::Many(spans) => spans
                .into_iter()
                .max_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = QaRequest {
            inputs: QaInputs {
                question: "What is regulated?",
                context: "Protein X regulates apoptosis.",
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["inputs"]["question"], "What is regulated?");
        assert_eq!(json["inputs"]["context"], "Protein X regulates apoptosis.");
    }

    #[test]
    fn test_single_response() {
        let json = r#"{"answer": "apoptosis", "score": 0.87, "start": 20, "end": 29}"#;
        let span = serde_json::from_str::<QaResponse>(json)
            .unwrap()
            .best()
            .unwrap();
        assert_eq!(span.answer, "apoptosis");
        assert!((span.score - 0.87).abs() < 1e-10);
        assert_eq!(span.start, Some(20));
    }

    #[test]
    fn test_list_response_picks_best() {
        let json = r#"[
            {"answer": "tumor cells", "score": 0.2},
            {"answer": "apoptosis", "score": 0.7}
        ]"#;
        let span = serde_json::from_str::<QaResponse>(json)
            .unwrap()
            .best()
            .unwrap();
        assert_eq!(span.answer, "apoptosis");
    }

    #[test]
    fn test_empty_list_has_no_best() {
        let resp: QaResponse = serde_json::from_str("[]").unwrap();
        assert!(resp.best().is_none());
    }
}
