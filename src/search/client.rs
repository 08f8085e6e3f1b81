// HTTP client for the Semantic Scholar Graph API paper search.
//
// Queries `/graph/v1/paper/search` by title and returns lightweight paper
// records, including the open-access PDF link when Semantic Scholar has one.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use super::rate_limiter::RateLimiter;

/// Default Semantic Scholar Graph API base URL.
pub const DEFAULT_SEMANTIC_SCHOLAR_URL: &str = "https://api.semanticscholar.org";

/// Fields requested for every search hit.
const SEARCH_FIELDS: &str = "title,abstract,year,openAccessPdf,url,authors";

const SEARCH_TIMEOUT: Duration = Duration::from_secs(15);
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(20);

/// An author as returned by the Graph API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub author_id: Option<String>,
    pub name: String,
}

/// Open-access PDF location.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAccessPdf {
    /// Empty string when Semantic Scholar knows the paper is OA but has no link
    #[serde(default)]
    pub url: String,
    pub status: Option<String>,
}

/// A single search hit.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRecord {
    pub paper_id: String,
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub year: Option<u32>,
    pub url: Option<String>,
    #[serde(default)]
    pub authors: Vec<Author>,
    pub open_access_pdf: Option<OpenAccessPdf>,
}

impl PaperRecord {
    /// Direct PDF download link, if one exists.
    pub fn pdf_url(&self) -> Option<&str> {
        self.open_access_pdf
            .as_ref()
            .map(|p| p.url.as_str())
            .filter(|u| !u.is_empty())
    }

    /// Author names joined with ", ".
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// "Title (Year)" for menus and lists.
    pub fn display_label(&self) -> String {
        let title = self.title.as_deref().unwrap_or("(untitled)");
        match self.year {
            Some(year) => format!("{title} ({year})"),
            None => format!("{title} ()"),
        }
    }
}

/// Response from `/graph/v1/paper/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub total: Option<u64>,
    pub offset: Option<u64>,
    #[serde(default)]
    pub data: Vec<PaperRecord>,
}

/// Client for Semantic Scholar paper search and PDF download.
pub struct SemanticScholarClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    rate_limiter: RateLimiter,
}

impl SemanticScholarClient {
    /// Create a new client pointing at the given base URL.
    ///
    /// An API key raises Semantic Scholar's quota; without one requests go
    /// through the shared anonymous pool.
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("paperlens/0.1 (research-assistant)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            rate_limiter: RateLimiter::new(1.0),
        })
    }

    /// Search for papers matching `title`, returning at most `limit` records.
    ///
    /// A blank query returns an empty list without calling the API.
    pub async fn search_by_title(&self, title: &str, limit: u32) -> Result<Vec<PaperRecord>> {
        let query = title.trim();
        if query.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        self.rate_limiter.acquire().await;

        let url = format!("{}/graph/v1/paper/search", self.base_url);
        let limit_str = limit.to_string();

        let mut request = self
            .client
            .get(&url)
            .timeout(SEARCH_TIMEOUT)
            .query(&[
                ("query", query),
                ("limit", limit_str.as_str()),
                ("fields", SEARCH_FIELDS),
            ]);
        if let Some(ref key) = self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request
            .send()
            .await
            .context("Semantic Scholar search request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Semantic Scholar returned {}: {}", status, body);
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .context("Failed to parse Semantic Scholar response")?;

        let mut papers = parsed.data;
        papers.truncate(limit as usize);

        info!(
            query = query,
            results = papers.len(),
            total = ?parsed.total,
            "Semantic Scholar search complete"
        );

        Ok(papers)
    }

    /// Download a PDF by URL and return its bytes.
    pub async fn download_pdf(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .timeout(DOWNLOAD_TIMEOUT)
            .send()
            .await
            .with_context(|| format!("Failed to download {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!("PDF download returned {}: {}", response.status(), url);
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read PDF body")?;

        debug!(url = url, bytes = bytes.len(), "Downloaded PDF");
        Ok(bytes.to_vec())
    }
}
