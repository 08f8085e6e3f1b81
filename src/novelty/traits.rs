// Embedding provider trait: the novelty engine's only external boundary.
//
// The default implementation is the local ONNX SentenceEmbedder. Tests plug
// in deterministic in-memory providers through the same trait.

use async_trait::async_trait;

use super::error::NoveltyError;

/// A dense sentence embedding.
pub type Embedding = Vec<f64>;

/// Trait for turning sentences into fixed-length vectors.
///
/// Implementations must return exactly one vector per input, in input order,
/// and must return an empty vector for empty input. A backend that cannot
/// produce embeddings returns `NoveltyError::EmbeddingUnavailable` rather
/// than empty or zeroed vectors.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of sentences.
    async fn embed(&self, sentences: &[String]) -> Result<Vec<Embedding>, NoveltyError>;

    /// Dimensionality of the vectors this provider produces.
    fn dimension(&self) -> usize;
}
