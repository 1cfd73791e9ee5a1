use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with a bare env.
#[derive(Debug, Clone)]
pub struct Config {
    /// Embedding model id (`EMBED_MODEL`).
    pub embed_model: String,
    /// Summarization model id (`SUM_MODEL`).
    pub sum_model: String,
    /// Base URL of the hosted summarization API (`SUM_API_URL`).
    pub sum_api_url: String,
    /// Optional bearer token for the summarization API (`HF_API_TOKEN`).
    pub hf_api_token: Option<String>,
    /// Resume field extractor endpoint (`PARSER_URL`).
    pub parser_url: String,
    /// Listen port (`ANALYSIS_PORT`).
    pub port: u16,
    /// Embedding-failure hardening (`EMBED_STRICT`): `true` fails the
    /// request on embedding errors, `false` degrades to exact matches only.
    pub embed_strict: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            embed_model: env_or("EMBED_MODEL", "sentence-transformers/all-MiniLM-L6-v2"),
            sum_model: env_or("SUM_MODEL", "sshleifer/distilbart-cnn-12-6"),
            sum_api_url: env_or("SUM_API_URL", "https://api-inference.huggingface.co"),
            hf_api_token: std::env::var("HF_API_TOKEN").ok().filter(|t| !t.is_empty()),
            parser_url: env_or("PARSER_URL", "http://127.0.0.1:8002/extract"),
            port: env_or("ANALYSIS_PORT", "8001")
                .parse::<u16>()
                .context("ANALYSIS_PORT must be a valid port number")?,
            embed_strict: env_or("EMBED_STRICT", "true")
                .parse::<bool>()
                .context("EMBED_STRICT must be 'true' or 'false'")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
