// Sentence segmentation for novelty scoring.
//
// A sentence boundary is terminal punctuation (. ! ?) followed by a run of
// whitespace. Candidates are trimmed, and anything 30 characters or shorter
// is dropped as noise: headings, stray citations, "Fig. 2." and the like.

/// Candidates must be strictly longer than this (in characters) to count.
pub const MIN_SENTENCE_CHARS: usize = 30;

/// Which side of the comparison a sentence came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceSource {
    Target,
    Related,
}

/// A qualifying sentence extracted from target or related text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub source: SentenceSource,
}

/// Segment text into sentences tagged with their source.
pub fn segment(text: &str, source: SentenceSource) -> Vec<Sentence> {
    split_sentences(text)
        .into_iter()
        .map(|text| Sentence { text, source })
        .collect()
}

/// Split text into trimmed sentences longer than `MIN_SENTENCE_CHARS`,
/// preserving their order in the source.
///
/// Blank input yields an empty vector.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            push_candidate(&mut sentences, &text[start..idx]);

            // Swallow the rest of the whitespace run
            let mut end = idx + ch.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = next_idx + next.len_utf8();
                chars.next();
            }
            start = end;
            prev = None;
            continue;
        }
        prev = Some(ch);
    }
    push_candidate(&mut sentences, &text[start..]);

    sentences
}

fn push_candidate(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if trimmed.chars().count() > MIN_SENTENCE_CHARS {
        sentences.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t  ").is_empty());
    }

    #[test]
    fn test_splits_on_terminal_punctuation() {
        let text = "The first sentence is long enough to keep around. \
                    Is the second sentence also long enough to keep? \
                    The third one ends with an exclamation point here!";
        let sents = split_sentences(text);
        assert_eq!(sents.len(), 3);
        assert_eq!(sents[0], "The first sentence is long enough to keep around.");
        assert_eq!(sents[1], "Is the second sentence also long enough to keep?");
        assert_eq!(
            sents[2],
            "The third one ends with an exclamation point here!"
        );
    }

    #[test]
    fn test_punctuation_without_whitespace_does_not_split() {
        // "3.5" and "e.g.," have no whitespace after the period
        let text = "Expression rose 3.5-fold in treated samples versus controls.";
        let sents = split_sentences(text);
        assert_eq!(sents, vec![text.to_string()]);
    }

    #[test]
    fn test_short_fragments_dropped() {
        let text = "Results. The knockout mice showed reduced tumor growth overall. Fig. 2.";
        let sents = split_sentences(text);
        assert_eq!(
            sents,
            vec!["The knockout mice showed reduced tumor growth overall.".to_string()]
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let thirty = "a".repeat(29) + ".";
        let thirty_one = "b".repeat(30) + ".";
        assert_eq!(thirty.chars().count(), 30);
        assert_eq!(thirty_one.chars().count(), 31);

        assert!(split_sentences(&thirty).is_empty());
        assert_eq!(split_sentences(&thirty_one), vec![thirty_one.clone()]);
    }

    #[test]
    fn test_threshold_counts_chars_not_bytes() {
        // 29 multi-byte chars + "." = 30 chars but far more than 30 bytes
        let text = "é".repeat(29) + ".";
        assert!(split_sentences(&text).is_empty());
    }

    #[test]
    fn test_newlines_count_as_boundaries() {
        let text = "Line one describes the cohort and its selection.\n\nLine two describes the statistical methods used.";
        let sents = split_sentences(text);
        assert_eq!(sents.len(), 2);
        assert!(sents[1].starts_with("Line two"));
    }

    #[test]
    fn test_segment_tags_source() {
        let sents = segment(
            "Protein X regulates apoptosis in tumor cells through caspase activation.",
            SentenceSource::Related,
        );
        assert_eq!(sents.len(), 1);
        assert_eq!(sents[0].source, SentenceSource::Related);
    }
}
