//! Structured resume field extraction via a parser sidecar service.
//!
//! The parser contract is file-based: the pipeline persists the resume text
//! to a temporary file and passes the path here. The client uploads the file
//! as multipart form data and expects a JSON object of named fields back
//! (experience, education, total_experience, ...). No schema is enforced on
//! the returned keys.

use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::{Map, Value};

use crate::inference::InferenceError;

const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Field extraction capability: resume file in, field mapping out.
#[async_trait]
pub trait FieldExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> Result<Map<String, Value>, InferenceError>;
}

/// Client for the resume parser service configured via `PARSER_URL`.
pub struct ParserServiceClient {
    client: Client,
    url: String,
}

impl ParserServiceClient {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            url,
        }
    }
}

#[async_trait]
impl FieldExtractor for ParserServiceClient {
    async fn extract(&self, path: &Path) -> Result<Map<String, Value>, InferenceError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume.txt".to_string());

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));

        let response = self.client.post(&self.url).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let fields: Map<String, Value> = serde_json::from_str(&body)?;
        Ok(fields)
    }
}
