// Colored terminal output for novelty results, trends, search hits, and answers.

use colored::Colorize;

use crate::novelty::NoveltyResult;
use crate::qa::Answer;
use crate::search::client::PaperRecord;
use crate::trends::KeywordCount;

/// How many sentences the novelty view highlights.
pub const TOP_NOVEL_SENTENCES: usize = 5;

/// Display a novelty score and the most novel target sentences.
pub fn display_novelty(result: &NoveltyResult, related_count: usize) {
    println!(
        "\n{}",
        format!("=== Novelty (against {related_count} related abstracts) ===").bold()
    );
    println!();
    println!(
        "  Novelty score: {}  {}",
        colorize_novelty(result.score, &format!("{:.2}", result.score)),
        meter(result.score, 20)
    );
    println!("  Sentences scored: {}", result.details.len());

    if result.details.is_empty() {
        println!(
            "\n  {}",
            "No sentences longer than 30 characters in the target text.".dimmed()
        );
        return;
    }

    println!("\n  {}", "Most novel sentences:".bold());
    for (i, d) in result.most_novel(TOP_NOVEL_SENTENCES).iter().enumerate() {
        let preview = super::truncate_chars(&d.sent, 140);
        println!(
            "    {}. {} {}",
            i + 1,
            colorize_novelty(d.novelty, &format!("[novelty: {:.2}]", d.novelty)),
            preview
        );
    }
    println!();
}

/// Display keyword counts as a horizontal bar chart, most frequent first.
pub fn display_trends(keywords: &[KeywordCount]) {
    if keywords.is_empty() {
        println!("No keywords found.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top {} keywords ===", keywords.len()).bold()
    );
    println!();

    let max = keywords.iter().map(|k| k.count).max().unwrap_or(1).max(1);
    let label_width = keywords
        .iter()
        .map(|k| k.word.chars().count())
        .max()
        .unwrap_or(0);
    let bar_width: usize = 30;

    for k in keywords {
        let filled = ((k.count as f64 / max as f64) * bar_width as f64).round() as usize;
        println!(
            "  {:<width$}  {} {}",
            k.word,
            "=".repeat(filled.max(1)).bright_blue(),
            k.count,
            width = label_width
        );
    }
    println!();
}

/// Display a numbered list of search hits.
pub fn display_papers(papers: &[PaperRecord]) {
    if papers.is_empty() {
        println!("{}", "No results found.".yellow());
        return;
    }

    println!(
        "\n{}",
        format!("=== {} papers ===", papers.len()).bold()
    );
    println!();

    for (i, paper) in papers.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, paper.display_label().bold());
        let authors = paper.author_names();
        if !authors.is_empty() {
            println!("      Authors: {}", super::truncate_chars(&authors, 100).dimmed());
        }
        match paper.pdf_url() {
            Some(url) => println!("      PDF: {}", url.green()),
            None => println!("      PDF: {}", "not open access".dimmed()),
        }
    }
    println!();
}

/// Display an extracted answer with its confidence.
pub fn display_answer(answer: &Answer) {
    if answer.answer.is_empty() {
        println!("{}", "No answer found.".yellow());
        return;
    }
    println!("\n  {} {}", "Answer:".bold(), answer.answer);
    println!(
        "  {} {}",
        "Confidence:".bold(),
        colorize_novelty(answer.score, &format!("{:.2}", answer.score))
    );
}

/// A `[=====     ]` meter for a value in [0, 1].
fn meter(value: f64, width: usize) -> String {
    let filled = (value.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!(
        "[{}{}]",
        "=".repeat(filled),
        " ".repeat(width.saturating_sub(filled))
    )
}

/// Green for high, yellow for middling, dimmed for low values in [0, 1].
fn colorize_novelty(value: f64, text: &str) -> colored::ColoredString {
    if value >= 0.7 {
        text.bright_green()
    } else if value >= 0.3 {
        text.yellow()
    } else {
        text.dimmed()
    }
}
