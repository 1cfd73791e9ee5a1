//! Strength and improvement suggestions, generated by fixed rules evaluated
//! in a fixed order so output is deterministic for a given analysis.

use serde_json::Value;

use crate::analysis::models::{field_present, value_present, ParsedFields};

const SHOWN_KEYWORDS: usize = 8;
const EXPAND_TEXT_CHARS: usize = 600;

/// Builds (strengths, improvements). The bullet-points suggestion is always
/// the final improvement entry.
pub fn build_suggestions(
    text: &str,
    keywords: &[String],
    parsed: &ParsedFields,
) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    if !keywords.is_empty() {
        let shown: Vec<&str> = keywords
            .iter()
            .take(SHOWN_KEYWORDS)
            .map(String::as_str)
            .collect();
        strengths.push(format!("Relevant skills detected: {}", shown.join(", ")));
    }
    if let Some(value) = parsed.get("total_experience").filter(|v| value_present(v)) {
        strengths.push(format!("Experience detected: {}", render_value(value)));
    }
    if field_present(parsed, "education") {
        strengths.push("Education section present".to_string());
    }

    if keywords.is_empty() {
        improvements
            .push("Add concrete technical skills (e.g., 'React', 'Node.js', 'AWS')".to_string());
    }
    if text.chars().count() < EXPAND_TEXT_CHARS {
        improvements
            .push("Expand project descriptions and add measurable outcomes (numbers)".to_string());
    }
    improvements.push("Use bullet points under each role and quantify achievements".to_string());

    (strengths, improvements)
}

/// Renders a field value for display. Strings render bare, everything else
/// as compact JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn no_fields() -> ParsedFields {
        ParsedFields::new()
    }

    fn kw(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_skills_strength_lists_first_eight() {
        let keywords = kw(&[
            "react", "node", "aws", "docker", "sql", "python", "git", "linux", "kotlin",
        ]);
        let (strengths, _) = build_suggestions("text", &keywords, &no_fields());
        assert_eq!(
            strengths[0],
            "Relevant skills detected: react, node, aws, docker, sql, python, git, linux"
        );
    }

    #[test]
    fn test_total_experience_strength_renders_value() {
        let mut parsed = ParsedFields::new();
        parsed.insert("total_experience".to_string(), json!("4 years"));
        let (strengths, _) = build_suggestions("text", &[], &parsed);
        assert_eq!(strengths, vec!["Experience detected: 4 years"]);
    }

    #[test]
    fn test_total_experience_numeric_value() {
        let mut parsed = ParsedFields::new();
        parsed.insert("total_experience".to_string(), json!(2.5));
        let (strengths, _) = build_suggestions("text", &[], &parsed);
        assert_eq!(strengths, vec!["Experience detected: 2.5"]);
    }

    #[test]
    fn test_education_strength_present() {
        let mut parsed = ParsedFields::new();
        parsed.insert("education".to_string(), json!(["BSc"]));
        let (strengths, _) = build_suggestions("text", &[], &parsed);
        assert_eq!(strengths, vec!["Education section present"]);
    }

    #[test]
    fn test_no_keywords_suggests_adding_skills() {
        let (_, improvements) = build_suggestions("text", &[], &no_fields());
        assert!(improvements[0].starts_with("Add concrete technical skills"));
    }

    #[test]
    fn test_short_text_suggests_expanding() {
        let (_, improvements) = build_suggestions("short", &kw(&["react"]), &no_fields());
        assert!(improvements
            .iter()
            .any(|i| i.starts_with("Expand project descriptions")));
    }

    #[test]
    fn test_long_text_with_keywords_skips_conditional_improvements() {
        let text = "x".repeat(700);
        let (_, improvements) = build_suggestions(&text, &kw(&["react"]), &no_fields());
        assert_eq!(
            improvements,
            vec!["Use bullet points under each role and quantify achievements"]
        );
    }

    #[test]
    fn test_bullet_points_suggestion_is_always_last() {
        let long = "y".repeat(1000);
        let cases = [
            ("x".to_string(), kw(&[])),
            ("x".to_string(), kw(&["react"])),
            (long, kw(&[])),
        ];
        for (text, keywords) in &cases {
            let (_, improvements) = build_suggestions(text, keywords, &no_fields());
            assert_eq!(
                improvements.last().map(String::as_str),
                Some("Use bullet points under each role and quantify achievements")
            );
        }
    }

    #[test]
    fn test_strength_rule_order_is_stable() {
        let mut parsed = ParsedFields::new();
        parsed.insert("total_experience".to_string(), json!("3 years"));
        parsed.insert("education".to_string(), json!("MSc"));
        let (strengths, _) = build_suggestions("text", &kw(&["react"]), &parsed);
        assert_eq!(strengths.len(), 3);
        assert!(strengths[0].starts_with("Relevant skills detected"));
        assert!(strengths[1].starts_with("Experience detected"));
        assert_eq!(strengths[2], "Education section present");
    }
}
