// Hugging Face Inference API: shared transport for hosted models.

pub mod client;
