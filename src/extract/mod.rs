// Document text extraction.

pub mod pdf;
