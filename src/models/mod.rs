// Local model files: location and download.

pub mod download;
