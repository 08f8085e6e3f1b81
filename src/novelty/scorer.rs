// Novelty scoring: how much of a target text is not already said by a set
// of related texts.
//
// Each target sentence is matched to its single closest related sentence
// (nearest neighbor, not an average): one strongly overlapping sentence is
// enough to say the claim is not new. Novelty is the complement of that
// similarity, and the overall score is the mean over target sentences.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::NoveltyError;
use super::segment::{segment, SentenceSource};
use super::similarity::SimilarityMatrix;
use super::traits::EmbeddingProvider;

/// Per-sentence novelty detail, in target-text order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceNovelty {
    /// The target sentence
    pub sent: String,
    /// Similarity to the closest related sentence, 0.0 to 1.0
    pub max_sim: f64,
    /// 1.0 - max_sim
    pub novelty: f64,
}

/// Aggregate novelty of a target text against related texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoveltyResult {
    /// Mean sentence novelty, 0.0 (nothing new) to 1.0 (fully novel)
    pub score: f64,
    pub details: Vec<SentenceNovelty>,
}

impl NoveltyResult {
    /// Result for a blank target: no evidence of novelty.
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            details: Vec::new(),
        }
    }

    /// The `n` most novel sentences, highest novelty first.
    /// Ties keep their target-text order.
    pub fn most_novel(&self, n: usize) -> Vec<&SentenceNovelty> {
        let mut ranked: Vec<&SentenceNovelty> = self.details.iter().collect();
        ranked.sort_by(|a, b| b.novelty.partial_cmp(&a.novelty).unwrap_or(Ordering::Equal));
        ranked.truncate(n);
        ranked
    }
}

/// Score `target` for novelty against `related`.
///
/// - Blank target: `{score: 0.0, details: []}`.
/// - No related sentence survives segmentation: every target sentence is
///   fully novel and the score is 1.0. The provider is not called.
/// - No target sentence survives segmentation: score 0.0, no details.
///
/// Embedding failures propagate; they are never turned into a score.
pub async fn compute_novelty(
    provider: &dyn EmbeddingProvider,
    target: &str,
    related: &[String],
) -> Result<NoveltyResult, NoveltyError> {
    if target.trim().is_empty() {
        return Ok(NoveltyResult::empty());
    }

    let (target_sents, related_sents) = split_inputs(target, related);
    if let Some(result) = resolve_degenerate(&target_sents, &related_sents) {
        return Ok(result);
    }

    // Independent batches: embed both sides concurrently
    let (target_emb, related_emb) = tokio::try_join!(
        embed_checked(provider, &target_sents),
        embed_checked(provider, &related_sents),
    )?;

    let matrix = SimilarityMatrix::compute(&target_emb, &related_emb);

    let details: Vec<SentenceNovelty> = target_sents
        .into_iter()
        .zip(matrix.row_maxima())
        .map(|(sent, row_max)| {
            // Anti-correlated text shares nothing, same as orthogonal
            let max_sim = row_max.clamp(0.0, 1.0);
            SentenceNovelty {
                sent,
                max_sim,
                novelty: 1.0 - max_sim,
            }
        })
        .collect();

    let score = mean_novelty(&details);

    info!(
        score = score,
        sentences = details.len(),
        compared_against = matrix.cols(),
        "Computed novelty"
    );

    Ok(NoveltyResult { score, details })
}

/// The result for inputs that need no embeddings, or `None` when both
/// sides have sentences to compare.
///
/// Lets callers skip loading a model that would not be used.
pub fn score_without_embeddings(target: &str, related: &[String]) -> Option<NoveltyResult> {
    if target.trim().is_empty() {
        return Some(NoveltyResult::empty());
    }
    let (target_sents, related_sents) = split_inputs(target, related);
    resolve_degenerate(&target_sents, &related_sents)
}

fn split_inputs(target: &str, related: &[String]) -> (Vec<String>, Vec<String>) {
    let target_sents: Vec<String> = segment(target, SentenceSource::Target)
        .into_iter()
        .map(|s| s.text)
        .collect();
    let related_sents: Vec<String> = related
        .iter()
        .flat_map(|r| segment(r, SentenceSource::Related))
        .map(|s| s.text)
        .collect();

    debug!(
        target_sentences = target_sents.len(),
        related_sentences = related_sents.len(),
        related_texts = related.len(),
        "Segmented novelty inputs"
    );

    (target_sents, related_sents)
}

/// No related sentences wins over no target sentences.
fn resolve_degenerate(target_sents: &[String], related_sents: &[String]) -> Option<NoveltyResult> {
    if related_sents.is_empty() {
        let details = target_sents
            .iter()
            .map(|sent| SentenceNovelty {
                sent: sent.clone(),
                max_sim: 0.0,
                novelty: 1.0,
            })
            .collect();
        return Some(NoveltyResult {
            score: 1.0,
            details,
        });
    }

    if target_sents.is_empty() {
        return Some(NoveltyResult::empty());
    }

    None
}

/// Embed and verify the provider returned one vector per sentence, each of
/// the provider's declared dimension.
async fn embed_checked(
    provider: &dyn EmbeddingProvider,
    sentences: &[String],
) -> Result<Vec<Vec<f64>>, NoveltyError> {
    let dimension = provider.dimension();
    if dimension == 0 {
        return Err(NoveltyError::EmbeddingUnavailable(
            "backend reports zero-dimensional embeddings".to_string(),
        ));
    }

    let vectors = provider.embed(sentences).await?;
    if vectors.len() != sentences.len() {
        return Err(NoveltyError::EmbeddingCountMismatch {
            expected: sentences.len(),
            actual: vectors.len(),
        });
    }
    if let Some(bad) = vectors.iter().find(|v| v.len() != dimension) {
        return Err(NoveltyError::EmbeddingDimensionMismatch {
            expected: dimension,
            actual: bad.len(),
        });
    }
    Ok(vectors)
}

fn mean_novelty(details: &[SentenceNovelty]) -> f64 {
    if details.is_empty() {
        return 0.0;
    }
    details.iter().map(|d| d.novelty).sum::<f64>() / details.len() as f64
}
