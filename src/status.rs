// System status display: model files, credentials, endpoints.

use std::path::Path;

use colored::Colorize;

use crate::config::Config;
use crate::models::download::{embedding_files_present, embedding_model_dir, MODEL_FILE};

/// Display system status to the terminal.
pub fn show(config: &Config) {
    let embed_dir = embedding_model_dir(&config.model_dir);
    if embedding_files_present(&config.model_dir) {
        let size = file_size(&embed_dir.join(MODEL_FILE));
        println!(
            "Embedding model: {} ({})",
            "ready".green(),
            embed_dir.display()
        );
        println!("  model.onnx: {size}");
    } else {
        println!("Embedding model: {}", "not downloaded".yellow());
        println!("  Run `paperlens download-model` to enable novelty scoring");
    }

    println!(
        "Hugging Face token: {}",
        if config.hf_token.is_some() {
            "set".green().to_string()
        } else {
            "not set (anonymous, lower rate limits)".dimmed().to_string()
        }
    );
    println!("  Inference API: {}", config.hf_api_url);
    println!("  Summarizer: {}", config.summarizer_model);
    println!("  Q&A: {}", config.qa_model);

    println!(
        "Semantic Scholar: {} ({})",
        config.semantic_scholar_url,
        if config.semantic_scholar_api_key.is_some() {
            "API key set"
        } else {
            "anonymous"
        }
    );
}

fn file_size(path: &Path) -> String {
    std::fs::metadata(path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
