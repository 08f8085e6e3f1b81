// paperlens: research assistant for biomedical papers
//
// This is the library root. The novelty engine is the core; the other
// modules wrap the collaborators around it (PDF text, hosted summarization
// and Q&A, Semantic Scholar search, keyword trends).

pub mod config;
pub mod extract;
pub mod huggingface;
pub mod models;
pub mod novelty;
pub mod output;
pub mod qa;
pub mod search;
pub mod status;
pub mod summarize;
pub mod trends;
