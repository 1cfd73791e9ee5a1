//! Skill keyword detection — exact substring matches against a fixed
//! vocabulary plus semantic matches via cosine similarity against per-skill
//! embeddings precomputed at startup.

use std::collections::HashSet;

use crate::inference::{Embedder, InferenceError};

/// Baseline skill vocabulary. Order matters: exact matches are reported in
/// vocabulary order.
pub const SKILLS: &[&str] = &[
    "javascript",
    "react",
    "node",
    "express",
    "next",
    "typescript",
    "python",
    "java",
    "c++",
    "c",
    "c#",
    "sql",
    "mongodb",
    "postgres",
    "mysql",
    "html",
    "css",
    "tailwind",
    "bootstrap",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "git",
    "github",
    "linux",
    "bash",
    "rest",
    "graphql",
    "tensorflow",
    "pytorch",
    "machine learning",
    "data science",
    "nlp",
    "spark",
    "hadoop",
    "django",
    "flask",
    "spring",
    "react native",
    "flutter",
    "android",
    "ios",
    "swift",
    "kotlin",
    "lambda",
];

/// Minimum cosine similarity for a semantic match.
pub const SEMANTIC_THRESHOLD: f32 = 0.55;

/// The skill vocabulary with its precomputed embedding table. Built once at
/// startup, read-only afterwards; one embedding per skill at the same index.
pub struct SkillIndex {
    skills: Vec<String>,
    embeddings: Vec<Vec<f32>>,
}

impl SkillIndex {
    /// Embeds the whole vocabulary in one batch. Fails startup if the
    /// embedder does not return exactly one vector per skill.
    pub fn build(embedder: &dyn Embedder) -> Result<Self, InferenceError> {
        let skills: Vec<String> = SKILLS.iter().map(|s| s.to_lowercase()).collect();
        let embeddings = embedder.embed_batch(&skills)?;
        if embeddings.len() != skills.len() {
            return Err(InferenceError::Model(format!(
                "embedding table size {} does not match vocabulary size {}",
                embeddings.len(),
                skills.len()
            )));
        }
        Ok(Self { skills, embeddings })
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Case-insensitive substring matches, in vocabulary order.
    pub fn exact_matches(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.skills
            .iter()
            .filter(|skill| lower.contains(skill.as_str()))
            .cloned()
            .collect()
    }

    /// Skills whose embedding is within the similarity threshold of the text
    /// embedding, ordered by descending similarity (ties keep vocabulary
    /// order).
    pub fn semantic_matches(&self, text_embedding: &[f32]) -> Vec<String> {
        let mut hits: Vec<(usize, f32)> = self
            .embeddings
            .iter()
            .enumerate()
            .map(|(i, emb)| (i, cosine_similarity(text_embedding, emb)))
            .filter(|(_, sim)| *sim >= SEMANTIC_THRESHOLD)
            .collect();
        hits.sort_by(|a, b| b.1.total_cmp(&a.1));
        hits.into_iter()
            .map(|(i, _)| self.skills[i].clone())
            .collect()
    }
}

/// Concatenates exact then semantic matches, deduplicating while keeping the
/// first occurrence, so exact matches always rank first.
pub fn merge_keywords(exact: Vec<String>, semantic: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    exact
        .into_iter()
        .chain(semantic)
        .filter(|kw| seen.insert(kw.clone()))
        .collect()
}

/// Cosine similarity with f64 accumulation. Dimension mismatches and
/// zero-norm vectors score 0.0 rather than erroring.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let x64 = f64::from(x);
        let y64 = f64::from(y);
        dot += x64 * y64;
        norm_a += x64 * x64;
        norm_b += y64 * y64;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom <= f64::EPSILON {
        return 0.0;
    }
    (dot / denom) as f32
}
