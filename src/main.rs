use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use paperlens::config::Config;
use paperlens::huggingface::client::HfInferenceClient;
use paperlens::summarize::traits::SummaryParams;

/// paperlens: summaries, Q&A, keyword trends, and novelty scoring for
/// biomedical papers.
#[derive(Parser)]
#[command(name = "paperlens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the sentence embedding model (~90 MB)
    DownloadModel,

    /// Score how novel a target abstract is against related abstracts
    Novelty {
        /// Target text (or use --target-file)
        #[arg(long, conflicts_with = "target_file")]
        target: Option<String>,

        /// File containing the target text
        #[arg(long)]
        target_file: Option<PathBuf>,

        /// File with related abstracts, one per line
        #[arg(long)]
        related_file: Option<PathBuf>,

        /// A related abstract (repeatable)
        #[arg(long)]
        related: Vec<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract text from a PDF and summarize it
    Summarize {
        /// Path to the PDF
        pdf: PathBuf,

        /// Max summary length per chunk, in model tokens (default: 200)
        #[arg(long, default_value = "200")]
        max_length: u32,

        /// Chunks to summarize in parallel (default: 4)
        #[arg(long, default_value = "4")]
        concurrency: usize,
    },

    /// Search Semantic Scholar by title
    Search {
        /// Title or keywords
        title: String,

        /// Max results (default: 5)
        #[arg(long, default_value = "5")]
        limit: u32,

        /// Download and summarize result N (1-based) if it has an open-access PDF
        #[arg(long)]
        download: Option<usize>,
    },

    /// Answer a question from paper text
    Qa {
        /// The question to ask
        question: String,

        /// Context text (or use --context-file)
        #[arg(long, conflicts_with = "context_file")]
        context: Option<String>,

        /// File containing the paper text or summary
        #[arg(long)]
        context_file: Option<PathBuf>,
    },

    /// Show the most frequent keywords across abstracts
    Trends {
        /// File containing one or more abstracts
        file: PathBuf,

        /// Number of keywords (5-50, default: 15)
        #[arg(long, default_value = "15", value_parser = clap::value_parser!(u32).range(5..=50))]
        top_n: u32,

        /// Use the full English stopword list instead of the short built-in one
        #[arg(long)]
        english_stopwords: bool,
    },

    /// Show model, credential, and endpoint status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("paperlens=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::DownloadModel => {
            println!("Downloading ONNX models...");
            println!("  Destination: {}", config.model_dir.display());

            paperlens::models::download::download_model(&config.model_dir).await?;

            println!("\n{}", "Models downloaded successfully.".bold());
            println!("You can now run `paperlens novelty`.");
        }

        Commands::Novelty {
            target,
            target_file,
            related_file,
            related,
            json,
        } => {
            let target = read_text(target, target_file.as_deref(), "target")?;

            let mut related_texts = related;
            if let Some(path) = related_file {
                let bulk = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                related_texts.extend(related_lines(&bulk));
            }

            // Degenerate inputs have a defined score without the model
            let result = match paperlens::novelty::score_without_embeddings(&target, &related_texts)
            {
                Some(result) => result,
                None => {
                    let embedder = load_embedder(&config).await?;
                    paperlens::novelty::compute_novelty(
                        embedder.as_ref(),
                        &target,
                        &related_texts,
                    )
                    .await?
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                paperlens::output::terminal::display_novelty(&result, related_texts.len());
            }
        }

        Commands::Summarize {
            pdf,
            max_length,
            concurrency,
        } => {
            println!("Extracting text from {}...", pdf.display());
            let text = paperlens::extract::pdf::extract_file(&pdf)?;
            if text.trim().is_empty() {
                anyhow::bail!("Could not extract text. Try another PDF.");
            }
            println!("  {} characters extracted", text.chars().count());

            summarize_and_print(&config, &text, max_length, concurrency).await?;
        }

        Commands::Search {
            title,
            limit,
            download,
        } => {
            let client = paperlens::search::client::SemanticScholarClient::new(
                &config.semantic_scholar_url,
                config.semantic_scholar_api_key.clone(),
            )?;

            println!("Searching Semantic Scholar...");
            let papers = match client.search_by_title(&title, limit).await {
                Ok(papers) => papers,
                Err(e) => {
                    warn!(error = %format!("{e:#}"), "Semantic Scholar search failed");
                    println!("  {} Search unavailable: {}", "Warning:".yellow(), e);
                    Vec::new()
                }
            };

            paperlens::output::terminal::display_papers(&papers);

            if let Some(n) = download {
                let paper = n
                    .checked_sub(1)
                    .and_then(|i| papers.get(i))
                    .ok_or_else(|| anyhow::anyhow!("No result #{n} to download"))?;
                let url = paper.pdf_url().ok_or_else(|| {
                    anyhow::anyhow!("\"{}\" has no open-access PDF", paper.display_label())
                })?;

                println!("Downloading PDF...");
                let bytes = client.download_pdf(url).await?;
                let text = paperlens::extract::pdf::extract_text_or_empty(&bytes);
                if text.trim().is_empty() {
                    anyhow::bail!("Could not extract text from the downloaded PDF.");
                }

                summarize_and_print(&config, &text, SummaryParams::default().max_length, 4)
                    .await?;
            }
        }

        Commands::Qa {
            question,
            context,
            context_file,
        } => {
            let context = read_text(context, context_file.as_deref(), "context")?;

            let client = HfInferenceClient::new(&config.hf_api_url, config.hf_token.clone())?;
            let qa = paperlens::qa::huggingface::HfQuestionAnswerer::new(client, &config.qa_model);

            let answer = paperlens::qa::answer_question(&qa, &question, &context).await?;
            paperlens::output::terminal::display_answer(&answer);
        }

        Commands::Trends {
            file,
            top_n,
            english_stopwords,
        } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let stoplist = if english_stopwords {
                paperlens::trends::StopList::English
            } else {
                paperlens::trends::StopList::Minimal
            };

            let keywords = paperlens::trends::analyze_trends(&text, top_n as usize, stoplist)?;
            paperlens::output::terminal::display_trends(&keywords);
        }

        Commands::Status => {
            paperlens::status::show(&config);
        }
    }

    Ok(())
}

/// Inline text wins; otherwise read the file. One of them is required.
fn read_text(inline: Option<String>, file: Option<&Path>, what: &str) -> Result<String> {
    match (inline, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        (None, None) => anyhow::bail!("No {what} given. Pass --{what} or --{what}-file."),
    }
}

/// Related abstracts are one per line; blank lines are skipped.
fn related_lines(bulk: &str) -> impl Iterator<Item = String> + '_ {
    bulk.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
}

/// Load the shared sentence embedder, or bail with a helpful message.
async fn load_embedder(
    config: &Config,
) -> Result<std::sync::Arc<paperlens::novelty::embeddings::SentenceEmbedder>> {
    config.require_embedding_model()?;
    let dir = paperlens::models::download::embedding_model_dir(&config.model_dir);
    let embedder = paperlens::novelty::embeddings::shared_embedder(&dir).await?;
    info!("Loaded sentence embedding model");
    Ok(embedder)
}

/// Summarize with the hosted model and print the result.
async fn summarize_and_print(
    config: &Config,
    text: &str,
    max_length: u32,
    concurrency: usize,
) -> Result<()> {
    let client = HfInferenceClient::new(&config.hf_api_url, config.hf_token.clone())?;
    let summarizer =
        paperlens::summarize::huggingface::HfSummarizer::new(client, &config.summarizer_model);
    let params = SummaryParams {
        max_length,
        ..SummaryParams::default()
    };

    println!("Summarizing with {}...", config.summarizer_model);
    let summary =
        paperlens::summarize::summarize_text(&summarizer, text, &params, concurrency).await;

    println!("\n{}", "=== Summary ===".bold());
    println!("{summary}");
    Ok(())
}
