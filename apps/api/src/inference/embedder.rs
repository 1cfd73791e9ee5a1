//! Sentence embedding via a local ONNX model (fastembed).
//!
//! The model is loaded once at startup and is safe for concurrent read-only
//! inference; `AppState` carries it behind an `Arc`. Output is deterministic
//! for a fixed model and input, which the idempotence of `analyze` relies on.

use anyhow::{bail, Context, Result};
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::info;

use crate::inference::InferenceError;

/// Text embedding capability: text in, fixed-dimension vector out.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, InferenceError>;

    /// Embeds a batch in one call. Used at startup to build the skill index.
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, InferenceError>;

    /// Returns the embedding dimension.
    fn dimension(&self) -> usize;
}

/// Local embedder backed by fastembed's ONNX runtime.
pub struct FastembedEmbedder {
    model: TextEmbedding,
    dimension: usize,
}

impl FastembedEmbedder {
    /// Loads the model named by `EMBED_MODEL`. Blocks until the model is
    /// ready; called before the listener binds.
    pub fn load(model_name: &str) -> Result<Self> {
        let model_kind = resolve_model(model_name)?;
        let model = TextEmbedding::try_new(
            InitOptions::new(model_kind).with_show_download_progress(false),
        )
        .with_context(|| format!("failed to load embedding model '{model_name}'"))?;

        // Probe the output dimension once instead of trusting a lookup table.
        let probe = model
            .embed(vec!["dimension probe"], None)
            .map_err(|e| anyhow::anyhow!("embedding probe failed: {e}"))?;
        let dimension = probe.first().map(Vec::len).unwrap_or(0);
        if dimension == 0 {
            bail!("embedding model '{model_name}' produced an empty probe vector");
        }

        info!("Embedding model '{model_name}' ready (dimension {dimension})");
        Ok(Self { model, dimension })
    }
}

impl Embedder for FastembedEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, InferenceError> {
        let mut vectors = self
            .model
            .embed(vec![text], None)
            .map_err(|e| InferenceError::Model(e.to_string()))?;
        vectors.pop().ok_or(InferenceError::EmptyOutput)
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, InferenceError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.model
            .embed(texts.to_vec(), None)
            .map_err(|e| InferenceError::Model(e.to_string()))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Maps a sentence-transformers style model id onto a fastembed model.
fn resolve_model(name: &str) -> Result<EmbeddingModel> {
    match name {
        "sentence-transformers/all-MiniLM-L6-v2" | "all-MiniLM-L6-v2" => {
            Ok(EmbeddingModel::AllMiniLML6V2)
        }
        "sentence-transformers/all-MiniLM-L12-v2" | "all-MiniLM-L12-v2" => {
            Ok(EmbeddingModel::AllMiniLML12V2)
        }
        "BAAI/bge-small-en-v1.5" | "bge-small-en-v1.5" => Ok(EmbeddingModel::BGESmallENV15),
        "BAAI/bge-base-en-v1.5" | "bge-base-en-v1.5" => Ok(EmbeddingModel::BGEBaseENV15),
        other => bail!(
            "unsupported embedding model '{other}' \
             (supported: all-MiniLM-L6-v2, all-MiniLM-L12-v2, bge-small-en-v1.5, bge-base-en-v1.5)"
        ),
    }
}
