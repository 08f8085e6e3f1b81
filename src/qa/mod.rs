// Extractive question answering over paper text.

pub mod huggingface;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// An extracted answer span and the model's confidence in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
    /// Confidence from 0.0 to 1.0
    pub score: f64,
}

impl Answer {
    /// The answer returned when there is nothing to ask or nothing to read.
    pub fn empty() -> Self {
        Self {
            answer: String::new(),
            score: 0.0,
        }
    }
}

/// Trait for answering a question from a context passage.
#[async_trait]
pub trait QuestionAnswerer: Send + Sync {
    async fn answer(&self, question: &str, context: &str) -> Result<Answer>;
}

/// Answer `question` from `context`.
///
/// A blank question or context short-circuits to an empty answer without
/// calling the model. The confidence is clamped into [0, 1].
pub async fn answer_question(
    qa: &dyn QuestionAnswerer,
    question: &str,
    context: &str,
) -> Result<Answer> {
    if question.trim().is_empty() || context.trim().is_empty() {
        return Ok(Answer::empty());
    }

    let mut answer = qa.answer(question.trim(), context).await?;
    answer.score = if answer.score.is_finite() {
        answer.score.clamp(0.0, 1.0)
    } else {
        0.0
    };
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Fixed {
        score: f64,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl QuestionAnswerer for Fixed {
        async fn answer(&self, _question: &str, _context: &str) -> Result<Answer> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Answer {
                answer: "caspase activation".to_string(),
                score: self.score,
            })
        }
    }

    fn fixed(score: f64) -> Fixed {
        Fixed {
            score,
            calls: AtomicUsize::new(0),
        }
    }

    #[tokio::test]
    async fn test_blank_question_skips_model() {
        let qa = fixed(0.9);
        let ans = answer_question(&qa, "  ", "Some context").await.unwrap();
        assert_eq!(ans, Answer::empty());
        assert_eq!(qa.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_blank_context_skips_model() {
        let qa = fixed(0.9);
        let ans = answer_question(&qa, "What drives apoptosis?", "")
            .await
            .unwrap();
        assert_eq!(ans, Answer::empty());
        assert_eq!(qa.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_score_is_clamped() {
        let qa = fixed(1.7);
        let ans = answer_question(&qa, "What drives apoptosis?", "Caspases do.")
            .await
            .unwrap();
        assert_eq!(ans.answer, "caspase activation");
        assert_eq!(ans.score, 1.0);
    }

    #[tokio::test]
    async fn test_nan_score_becomes_zero() {
        let qa = fixed(f64::NAN);
        let ans = answer_question(&qa, "Q?", "Context.").await.unwrap();
        assert_eq!(ans.score, 0.0);
    }
}
