// Unit tests for the collaborators around the novelty engine.
//
// Semantic Scholar response parsing, chunked summarization with a mock
// summarizer, Q&A short-circuits, PDF fallbacks, and keyword trends.
// No network calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use paperlens::qa::{answer_question, Answer, QuestionAnswerer};
use paperlens::search::client::{PaperRecord, SearchResponse};
use paperlens::summarize::chunk::{chunk_text, DEFAULT_CHUNK_CHARS};
use paperlens::summarize::traits::{SummaryParams, Summarizer};
use paperlens::summarize::{summarize_text, EMPTY_TEXT_MESSAGE};
use paperlens::trends::{analyze_trends, StopList};

// ============================================================
// Semantic Scholar
// ============================================================

const SEARCH_JSON: &str = r#"{
  "total": 2,
  "offset": 0,
  "data": [
    {
      "paperId": "abc123",
      "title": "Caspase activation in tumor apoptosis",
      "abstract": "We show that protein X activates caspases.",
      "year": 2021,
      "url": "https://www.semanticscholar.org/paper/abc123",
      "authors": [
        {"authorId": "1", "name": "A. Researcher"},
        {"authorId": null, "name": "B. Scientist"}
      ],
      "openAccessPdf": {"url": "https://example.org/abc123.pdf", "status": "GREEN"}
    },
    {
      "paperId": "def456",
      "title": "A paper without a year or PDF",
      "abstract": null,
      "year": null,
      "url": null,
      "authors": [],
      "openAccessPdf": {"url": "", "status": "CLOSED"}
    }
  ]
}"#;

#[test]
fn search_response_parses_graph_api_shape() {
    let parsed: SearchResponse = serde_json::from_str(SEARCH_JSON).unwrap();
    assert_eq!(parsed.total, Some(2));
    assert_eq!(parsed.data.len(), 2);

    let first = &parsed.data[0];
    assert_eq!(first.paper_id, "abc123");
    assert_eq!(
        first.abstract_text.as_deref(),
        Some("We show that protein X activates caspases.")
    );
    assert_eq!(first.pdf_url(), Some("https://example.org/abc123.pdf"));
    assert_eq!(first.author_names(), "A. Researcher, B. Scientist");
    assert_eq!(
        first.display_label(),
        "Caspase activation in tumor apoptosis (2021)"
    );
}

#[test]
fn empty_pdf_url_means_no_download() {
    let parsed: SearchResponse = serde_json::from_str(SEARCH_JSON).unwrap();
    let second = &parsed.data[1];
    assert_eq!(second.pdf_url(), None);
    assert_eq!(second.author_names(), "");
    assert_eq!(second.display_label(), "A paper without a year or PDF ()");
}

#[test]
fn sparse_records_parse_with_defaults() {
    let record: PaperRecord = serde_json::from_str(r#"{"paperId": "x"}"#).unwrap();
    assert!(record.title.is_none());
    assert!(record.authors.is_empty());
    assert!(record.pdf_url().is_none());

    let response: SearchResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
    assert!(response.data.is_empty());
}

// ============================================================
// Summarization
// ============================================================

/// Returns "S{len}" for each chunk; fails on chunks containing "FAIL".
struct Counting {
    seen: Mutex<Vec<String>>,
}

#[async_trait]
impl Summarizer for Counting {
    async fn summarize_chunk(&self, chunk: &str, params: &SummaryParams) -> Result<String> {
        assert_eq!(params.min_length, 30);
        if chunk.contains("FAIL") {
            anyhow::bail!("503 Service Unavailable");
        }
        let mut seen = self.seen.lock().unwrap();
        seen.push(chunk.to_string());
        Ok(format!("S{}", chunk.len()))
    }
}

fn long_document(sentences: usize) -> String {
    (0..sentences)
        .map(|i| format!("Sentence number {i} describes a result about protein X in cells"))
        .collect::<Vec<_>>()
        .join(". ")
}

#[tokio::test]
async fn blank_document_returns_placeholder() {
    let summarizer = Counting {
        seen: Mutex::new(Vec::new()),
    };
    let out = summarize_text(&summarizer, "  \n ", &SummaryParams::default(), 4).await;
    assert_eq!(out, EMPTY_TEXT_MESSAGE);
    assert!(summarizer.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn long_document_summarized_per_chunk_in_order() {
    let doc = long_document(60);
    let chunks = chunk_text(&doc, DEFAULT_CHUNK_CHARS);
    assert!(chunks.len() > 1);

    let summarizer = Counting {
        seen: Mutex::new(Vec::new()),
    };
    let out = summarize_text(&summarizer, &doc, &SummaryParams::default(), 3).await;

    let expected: Vec<String> = chunks.iter().map(|c| format!("S{}", c.len())).collect();
    assert_eq!(out, expected.join(" "));
    assert_eq!(summarizer.seen.lock().unwrap().len(), chunks.len());
}

#[tokio::test]
async fn failed_chunk_becomes_inline_marker() {
    let doc = format!(
        "{}. FAIL this one chunk. {}",
        long_document(20),
        long_document(20)
    );
    let summarizer = Counting {
        seen: Mutex::new(Vec::new()),
    };
    let out = summarize_text(&summarizer, &doc, &SummaryParams::default(), 2).await;

    assert!(out.contains("[Error summarizing chunk: 503 Service Unavailable]"));
    assert!(out.starts_with('S'), "other chunks still summarized: {out}");
}

#[test]
fn chunks_respect_budget() {
    let doc = long_document(100);
    for chunk in chunk_text(&doc, DEFAULT_CHUNK_CHARS) {
        assert!(chunk.len() <= DEFAULT_CHUNK_CHARS, "chunk of {}", chunk.len());
    }
}

// ============================================================
// Q&A
// ============================================================

struct Recording {
    calls: AtomicUsize,
    score: f64,
}

#[async_trait]
impl QuestionAnswerer for Recording {
    async fn answer(&self, question: &str, _context: &str) -> Result<Answer> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Answer {
            answer: format!("answer to {question}"),
            score: self.score,
        })
    }
}

#[tokio::test]
async fn qa_blank_inputs_skip_the_model() {
    let qa = Recording {
        calls: AtomicUsize::new(0),
        score: 0.9,
    };
    assert_eq!(
        answer_question(&qa, "", "Some context.").await.unwrap(),
        Answer::empty()
    );
    assert_eq!(
        answer_question(&qa, "What does protein X do?", "   ")
            .await
            .unwrap(),
        Answer::empty()
    );
    assert_eq!(qa.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn qa_trims_question_and_clamps_score() {
    let qa = Recording {
        calls: AtomicUsize::new(0),
        score: 1.7,
    };
    let answer = answer_question(&qa, "  What does protein X do?  ", "It activates caspases.")
        .await
        .unwrap();
    assert_eq!(answer.answer, "answer to What does protein X do?");
    assert_eq!(answer.score, 1.0);
}

// ============================================================
// PDF extraction fallbacks
// ============================================================

#[test]
fn unreadable_pdf_yields_empty_text() {
    assert_eq!(
        paperlens::extract::pdf::extract_text_or_empty(b"not a pdf"),
        ""
    );
    assert!(paperlens::extract::pdf::extract_text(b"").is_err());
}

// ============================================================
// Trends across several abstracts
// ============================================================

#[test]
fn trends_over_pasted_abstracts() {
    let abstracts = "\
Tumor suppressor p53 mediates apoptosis in tumor cells.
Apoptosis resistance is common in tumor progression.
We use CRISPR screens to map apoptosis regulators.";

    let top = analyze_trends(abstracts, 5, StopList::Minimal).unwrap();
    assert_eq!(top[0].word, "tumor");
    assert_eq!(top[0].count, 3);
    assert_eq!(top[1].word, "apoptosis");
    assert_eq!(top[1].count, 3);
    assert!(top.len() <= 5);
    assert!(!top.iter().any(|k| k.word == "use"));
}
