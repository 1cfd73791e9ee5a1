use axum::{
    extract::{Multipart, State},
    Form, Json,
};
use serde::Deserialize;

use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnalyzeTextForm {
    pub text: String,
}

/// POST /analyze-text
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeTextForm>,
) -> Result<Json<AnalysisResult>, AppError> {
    if form.text.trim().is_empty() {
        return Err(AppError::Validation(
            "field 'text' must be a non-empty string".to_string(),
        ));
    }
    let result = state.analyzer.analyze(&form.text).await?;
    Ok(Json(result))
}

/// POST /analyze-file
///
/// Multipart field `file`. PDF uploads are converted to text; anything else
/// is decoded as UTF-8. The recovered text runs through the same pipeline
/// as /analyze-text.
pub async fn handle_analyze_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut upload: Option<(Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("could not read upload: {e}")))?;
            upload = Some((file_name, bytes.to_vec()));
        }
    }

    let (file_name, bytes) =
        upload.ok_or_else(|| AppError::Validation("missing multipart field 'file'".to_string()))?;

    let text = recover_text(file_name.as_deref(), &bytes)?;
    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "uploaded file contains no extractable text".to_string(),
        ));
    }

    let result = state.analyzer.analyze(&text).await?;
    Ok(Json(result))
}

/// Recovers plain text from an upload: PDF via pdf-extract, everything else
/// as UTF-8.
fn recover_text(file_name: Option<&str>, bytes: &[u8]) -> Result<String, AppError> {
    if is_pdf(file_name, bytes) {
        return pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            AppError::UnprocessableEntity(format!("could not extract text from PDF: {e}"))
        });
    }
    String::from_utf8(bytes.to_vec())
        .map_err(|_| AppError::UnprocessableEntity("upload is neither PDF nor UTF-8 text".to_string()))
}

fn is_pdf(file_name: Option<&str>, bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF")
        || file_name
            .map(|n| n.to_ascii_lowercase().ends_with(".pdf"))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pdf_by_magic_bytes() {
        assert!(is_pdf(None, b"%PDF-1.7 rest of file"));
    }

    #[test]
    fn test_is_pdf_by_extension() {
        assert!(is_pdf(Some("resume.PDF"), b"not really"));
        assert!(!is_pdf(Some("resume.txt"), b"plain text"));
    }

    #[test]
    fn test_recover_text_utf8_passthrough() {
        let text = recover_text(Some("resume.txt"), "plain resume text".as_bytes()).unwrap();
        assert_eq!(text, "plain resume text");
    }

    #[test]
    fn test_recover_text_rejects_binary_garbage() {
        let result = recover_text(Some("resume.bin"), &[0xff, 0xfe, 0x00, 0x80]);
        assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));
    }
}
