//! Abstractive summarization via a hosted-inference HTTP API.
//!
//! Decoding is explicitly deterministic (`do_sample: false`) so repeated
//! calls with identical input return identical summaries. No retries: the
//! pipeline degrades to a text-prefix fallback on any failure.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::inference::InferenceError;

const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Summarization capability: bounded-length abstractive summary of a text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        text: &str,
        max_len: u32,
        min_len: u32,
    ) -> Result<String, InferenceError>;
}

#[derive(Debug, Serialize)]
struct SummaryRequest<'a> {
    inputs: &'a str,
    parameters: SummaryParameters,
    options: RequestOptions,
}

#[derive(Debug, Serialize)]
struct SummaryParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

#[derive(Debug, Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Client for a hosted summarization model (HuggingFace inference protocol).
pub struct HostedSummarizer {
    client: Client,
    url: String,
    api_token: Option<String>,
}

impl HostedSummarizer {
    pub fn new(api_base: &str, model: &str, api_token: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            url: format!("{}/models/{}", api_base.trim_end_matches('/'), model),
            api_token,
        }
    }
}

#[async_trait]
impl Summarizer for HostedSummarizer {
    async fn summarize(
        &self,
        text: &str,
        max_len: u32,
        min_len: u32,
    ) -> Result<String, InferenceError> {
        let request_body = SummaryRequest {
            inputs: text,
            parameters: SummaryParameters {
                max_length: max_len,
                min_length: min_len,
                do_sample: false,
            },
            options: RequestOptions {
                wait_for_model: true,
            },
        };

        let mut request = self.client.post(&self.url).json(&request_body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let outputs: Vec<SummaryOutput> = serde_json::from_str(&body)?;
        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or(InferenceError::EmptyOutput)
    }
}
