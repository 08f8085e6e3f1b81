// Keyword trend analysis: word frequencies across pasted abstracts.
//
// Lowercases the text, pulls out alphabetic tokens of three or more
// characters (hyphens allowed, so "anti-inflammatory" stays whole), drops
// stopwords, and counts.

use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use regex_lite::Regex;
use serde::Serialize;
use stop_words::{get, LANGUAGE};
use tracing::debug;

/// Token pattern: ASCII letters and hyphens, at least 3 long.
///
/// regex-lite's `\b` only knows ASCII word characters, so "café" would match
/// as "caf". Matches next to a non-ASCII letter are dropped afterwards.
const WORD_PATTERN: &str = r"\b[a-zA-Z-]{3,}\b";

/// Built-in short stoplist for scientific abstracts.
const MINIMAL_STOPWORDS: [&str; 16] = [
    "the", "and", "for", "with", "that", "this", "are", "was", "were", "from", "have", "has",
    "but", "not", "using", "use",
];

/// Which words to ignore when counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopList {
    /// The short built-in list
    #[default]
    Minimal,
    /// Full English stopword list from the stop-words crate
    English,
}

impl StopList {
    fn words(self) -> HashSet<String> {
        match self {
            StopList::Minimal => MINIMAL_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            StopList::English => get(LANGUAGE::English).into_iter().collect(),
        }
    }
}

/// A keyword and how many times it appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// The `top_n` most frequent keywords in `text`.
///
/// Ordered by count descending; equal counts keep first-occurrence order.
/// Blank text yields an empty list.
pub fn analyze_trends(text: &str, top_n: usize, stoplist: StopList) -> Result<Vec<KeywordCount>> {
    if text.trim().is_empty() || top_n == 0 {
        return Ok(Vec::new());
    }

    let pattern = Regex::new(WORD_PATTERN).context("Invalid keyword pattern")?;
    let stop = stoplist.words();
    let lower = text.to_lowercase();

    // word -> (count, first occurrence index)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (idx, m) in pattern
        .find_iter(&lower)
        .filter(|m| !touches_non_ascii_letter(&lower, m.start(), m.end()))
        .map(|m| m.as_str())
        .filter(|w| !stop.contains(*w))
        .enumerate()
    {
        counts.entry(m).or_insert((0, idx)).0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first))| (word, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(top_n);

    debug!(
        distinct = ranked.len(),
        top = ranked.first().map(|r| r.0).unwrap_or(""),
        "Counted keywords"
    );

    Ok(ranked
        .into_iter()
        .map(|(word, count, _)| KeywordCount {
            word: word.to_string(),
            count,
        })
        .collect())
}

/// True when the match at `start..end` sits inside a word that continues
/// with non-ASCII letters or digits.
fn touches_non_ascii_letter(text: &str, start: usize, end: usize) -> bool {
    let is_unicode_word = |c: char| !c.is_ascii() && c.is_alphanumeric();
    text[..start].chars().next_back().is_some_and(is_unicode_word)
        || text[end..].chars().next().is_some_and(is_unicode_word)
}
