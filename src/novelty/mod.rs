// Novelty detection: sentence segmentation, embedding, similarity, scoring.
//
// The EmbeddingProvider trait is the only seam to the outside world. The
// default provider is a local ONNX all-MiniLM-L6-v2 model shared process-wide.

pub mod embeddings;
pub mod error;
pub mod scorer;
pub mod segment;
pub mod similarity;
pub mod traits;

pub use error::NoveltyError;
pub use scorer::{compute_novelty, score_without_embeddings, NoveltyResult, SentenceNovelty};
