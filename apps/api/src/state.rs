use crate::analysis::pipeline::Analyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-only after startup: the analyzer
/// holds the loaded models and the precomputed skill index behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub config: Config,
}
