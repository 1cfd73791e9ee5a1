//! The analysis pipeline: field extraction → summarization → keyword
//! detection → scoring and suggestions. A straight line per request; the two
//! text-producing external calls degrade gracefully, keyword embedding
//! failure is governed by `EMBED_STRICT`.

use std::io::Write;
use std::sync::Arc;

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::warn;

use crate::analysis::keywords::{merge_keywords, SkillIndex};
use crate::analysis::models::{AnalysisResult, ParsedFields};
use crate::analysis::scoring::compute_score;
use crate::analysis::suggestions::build_suggestions;
use crate::errors::AppError;
use crate::inference::{Embedder, FieldExtractor, Summarizer};

/// Cap on summarizer input, bounding the external call's cost.
const SUMMARY_INPUT_CHARS: usize = 1600;
const SUMMARY_MAX_LEN: u32 = 120;
const SUMMARY_MIN_LEN: u32 = 30;
/// Fallback summary length when the summarizer fails.
const SUMMARY_FALLBACK_CHARS: usize = 400;

const EXTRACTION_WARNING: &str = "resume field extraction failed - structured fields unavailable";

/// Read-only analysis context: the three model capabilities and the
/// precomputed skill index. Constructed once at startup and shared across
/// requests; nothing here is mutated after construction.
#[derive(Clone)]
pub struct Analyzer {
    pub extractor: Arc<dyn FieldExtractor>,
    pub summarizer: Arc<dyn Summarizer>,
    pub embedder: Arc<dyn Embedder>,
    pub skills: Arc<SkillIndex>,
    /// `true`: embedding failure fails the request.
    /// `false`: degrade to exact keyword matches only.
    pub strict_embedding: bool,
}

impl Analyzer {
    /// Runs the full pipeline over one resume text. Extractor and summarizer
    /// failures degrade into the payload; only embedding failure (when
    /// strict) surfaces as a request error.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, AppError> {
        let parsed = self.extract_fields(text).await;
        let summary = self.summarize(text).await;
        let keywords = self.detect_keywords(text)?;

        let score = compute_score(text, &keywords, &parsed);
        let (strengths, improvements) = build_suggestions(text, &keywords, &parsed);

        Ok(AnalysisResult {
            success: true,
            summary,
            parsed,
            keywords,
            score,
            strengths,
            improvements,
        })
    }

    /// Persists the text to a temp file for the file-based extractor
    /// contract. The file is removed on drop on both success and failure;
    /// removal errors are swallowed.
    async fn extract_fields(&self, text: &str) -> ParsedFields {
        let tmp = match write_temp_resume(text) {
            Ok(tmp) => tmp,
            Err(e) => {
                warn!("could not persist resume text for extraction: {e}");
                return extraction_failure(&e.to_string());
            }
        };

        match self.extractor.extract(tmp.path()).await {
            Ok(fields) => fields,
            Err(e) => {
                warn!("field extraction failed: {e}");
                extraction_failure(&e.to_string())
            }
        }
    }

    /// Summarizes the leading slice of the text; falls back to the first
    /// 400 characters verbatim on any failure.
    async fn summarize(&self, text: &str) -> String {
        let chunk = truncate_chars(text, SUMMARY_INPUT_CHARS);
        match self
            .summarizer
            .summarize(chunk, SUMMARY_MAX_LEN, SUMMARY_MIN_LEN)
            .await
        {
            Ok(summary) => summary,
            Err(e) => {
                warn!("summarization failed, falling back to leading text: {e}");
                truncate_chars(text, SUMMARY_FALLBACK_CHARS).to_string()
            }
        }
    }

    /// Exact substring matches merged with semantic similarity matches,
    /// exact first, deduplicated.
    fn detect_keywords(&self, text: &str) -> Result<Vec<String>, AppError> {
        let exact = self.skills.exact_matches(text);
        let semantic = match self.embedder.embed(text) {
            Ok(embedding) => self.skills.semantic_matches(&embedding),
            Err(e) if self.strict_embedding => {
                return Err(AppError::Embedding(e.to_string()));
            }
            Err(e) => {
                warn!("embedding failed, keeping exact keyword matches only: {e}");
                Vec::new()
            }
        };
        Ok(merge_keywords(exact, semantic))
    }
}

fn write_temp_resume(text: &str) -> std::io::Result<NamedTempFile> {
    let mut tmp = tempfile::Builder::new().suffix(".txt").tempfile()?;
    tmp.write_all(text.as_bytes())?;
    tmp.flush()?;
    Ok(tmp)
}

fn extraction_failure(error: &str) -> ParsedFields {
    let mut parsed = ParsedFields::new();
    parsed.insert(
        "warning".to_string(),
        Value::String(EXTRACTION_WARNING.to_string()),
    );
    parsed.insert("error".to_string(), Value::String(error.to_string()));
    parsed
}

/// First `max_chars` characters of `text`, char-boundary safe.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
