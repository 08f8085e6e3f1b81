// Summarization: chunk a document, summarize each chunk, join the results.
//
// A failed chunk does not abort the document: its slot in the output holds
// an inline error marker and the remaining chunks still get summarized.

pub mod chunk;
pub mod huggingface;
pub mod traits;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use self::chunk::{chunk_text, DEFAULT_CHUNK_CHARS};
use self::traits::{SummaryParams, Summarizer};

/// Output when there is nothing to summarize.
pub const EMPTY_TEXT_MESSAGE: &str = "No text to summarize.";

/// Summarize `text` chunk by chunk.
///
/// Up to `concurrency` chunk requests are in flight at once; the output keeps
/// chunk order regardless of completion order.
pub async fn summarize_text(
    summarizer: &dyn Summarizer,
    text: &str,
    params: &SummaryParams,
    concurrency: usize,
) -> String {
    if text.trim().is_empty() {
        return EMPTY_TEXT_MESSAGE.to_string();
    }

    let chunks = chunk_text(text, DEFAULT_CHUNK_CHARS);
    info!(chunks = chunks.len(), "Summarizing document");

    let summaries: Vec<String> = stream::iter(chunks.iter().enumerate().map(
        |(i, chunk)| async move {
            match summarizer.summarize_chunk(chunk, params).await {
                Ok(summary) => summary,
                Err(e) => {
                    warn!(chunk = i, error = %format!("{e:#}"), "Chunk summarization failed");
                    format!("[Error summarizing chunk: {e}]")
                }
            }
        },
    ))
    .buffered(concurrency.max(1))
    .collect()
    .await;

    summaries.join(" ")
}
