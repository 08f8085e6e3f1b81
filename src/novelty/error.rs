use thiserror::Error;

/// Failures that stop a novelty computation.
///
/// Degenerate inputs (blank target, no related sentences) are not errors;
/// they resolve to defined scores inside the scorer.
#[derive(Debug, Error)]
pub enum NoveltyError {
    /// The embedding backend could not be loaded or failed during inference.
    #[error("embedding backend unavailable: {0}")]
    EmbeddingUnavailable(String),

    /// The backend answered, but not with one vector per sentence.
    #[error("embedding backend returned {actual} vectors for {expected} sentences")]
    EmbeddingCountMismatch { expected: usize, actual: usize },

    /// A returned vector does not have the provider's declared dimension.
    #[error("embedding backend returned a {actual}-dimensional vector, expected {expected}")]
    EmbeddingDimensionMismatch { expected: usize, actual: usize },
}

impl NoveltyError {
    /// Wrap an arbitrary backend failure, keeping the full context chain.
    pub fn unavailable(err: &anyhow::Error) -> Self {
        Self::EmbeddingUnavailable(format!("{err:#}"))
    }
}
