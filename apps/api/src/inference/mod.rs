/// Inference clients — the single point of entry for all external model
/// capabilities: sentence embedding, abstractive summarization, and
/// structured resume field extraction.
///
/// ARCHITECTURAL RULE: No other module may talk to a model or model API
/// directly. The pipeline only sees the three traits defined here.
use thiserror::Error;

pub mod embedder;
pub mod extractor;
pub mod summarizer;

pub use embedder::Embedder;
pub use extractor::FieldExtractor;
pub use summarizer::Summarizer;

/// Failure of a single external model call. One request step maps to one
/// call, so the pipeline handles these locally per step.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("model error: {0}")]
    Model(String),

    #[error("model returned empty output")]
    EmptyOutput,
}
