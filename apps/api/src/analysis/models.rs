use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields recovered by the external resume parser, keyed by field name
/// (experience, education, total_experience, ...). When extraction fails the
/// map instead carries a `warning`/`error` string pair. No keys are
/// guaranteed present.
pub type ParsedFields = Map<String, Value>;

/// The full analysis payload returned by `POST /analyze-text` and
/// `POST /analyze-file`. Built per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub success: bool,
    pub summary: String,
    pub parsed: ParsedFields,
    /// Unique, first-seen order: exact vocabulary matches before
    /// semantic-only matches.
    pub keywords: Vec<String>,
    /// 0 – 100
    pub score: u32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Whether a parsed field is present and non-empty. The upstream parser
/// emits nulls, empty strings, and empty lists for missing sections, so all
/// of those count as absent (null, false, 0, "", [], {}).
pub fn field_present(parsed: &ParsedFields, key: &str) -> bool {
    parsed.get(key).is_some_and(value_present)
}

pub fn value_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
