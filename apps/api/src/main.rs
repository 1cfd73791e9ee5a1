mod analysis;
mod config;
mod errors;
mod inference;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::keywords::SkillIndex;
use crate::analysis::pipeline::Analyzer;
use crate::config::Config;
use crate::inference::embedder::FastembedEmbedder;
use crate::inference::extractor::ParserServiceClient;
use crate::inference::summarizer::HostedSummarizer;
use crate::inference::Embedder;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_name, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analysis API v{}", env!("CARGO_PKG_VERSION"));

    // Load the embedding model and precompute the skill embedding table.
    // Both block startup: the listener must not bind before they are ready.
    let embedder: Arc<dyn Embedder> = Arc::new(FastembedEmbedder::load(&config.embed_model)?);
    let skills = Arc::new(SkillIndex::build(embedder.as_ref())?);
    info!(
        "Skill index ready ({} skills, dimension {})",
        skills.len(),
        embedder.dimension()
    );

    // Remote capabilities: summarizer and resume field extractor
    let summarizer = Arc::new(HostedSummarizer::new(
        &config.sum_api_url,
        &config.sum_model,
        config.hf_api_token.clone(),
    ));
    info!("Summarizer client initialized (model: {})", config.sum_model);

    let extractor = Arc::new(ParserServiceClient::new(config.parser_url.clone()));
    info!("Extractor client initialized ({})", config.parser_url);

    let analyzer = Analyzer {
        extractor,
        summarizer,
        embedder,
        skills,
        strict_embedding: config.embed_strict,
    };

    // Build app state
    let state = AppState {
        analyzer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
