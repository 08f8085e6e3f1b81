// Bibliographic search: Semantic Scholar paper lookup by title.

pub mod client;
pub mod rate_limiter;
