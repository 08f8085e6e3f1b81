// Chunking long documents into pieces a hosted summarizer will accept.
//
// Splits on ". " and packs sentences greedily up to a character budget.
// Abbreviations like "et al. " split early and just shorten a chunk.

/// Default character budget per chunk.
pub const DEFAULT_CHUNK_CHARS: usize = 800;

/// Pack `text` into chunks of fewer than `max_chars` characters where possible.
///
/// A single sentence longer than the budget becomes its own chunk.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    if text.trim().is_empty() {
        return chunks;
    }
    let mut current = String::new();
    // Budget is in chars, not bytes, so non-ASCII text packs the same
    let mut current_chars = 0;

    for sentence in text.split(". ") {
        let sentence_chars = sentence.chars().count();
        if current_chars + sentence_chars < max_chars {
            current.push_str(sentence);
            current.push_str(". ");
            current_chars += sentence_chars + 2;
        } else {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                chunks.push(trimmed.to_string());
            }
            current = format!("{sentence}. ");
            current_chars = sentence_chars + 2;
        }
    }

    let trimmed = current.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }

    chunks
}
