use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Credential;
use crate::error::{GenerationError, Result};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-1.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Seam for the text-generation call so the pipeline can be exercised
/// without network access.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Client for the Gemini generateContent endpoint.
pub struct GeminiClient {
    api_key: String,
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(credential: Credential) -> Self {
        Self {
            api_key: credential.into_inner(),
            http: reqwest::Client::new(),
            base_url: GEMINI_API_URL.to_string(),
            model: GEMINI_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }
}

#[async_trait]
impl Generator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "Gemini generate request");

        let response = self
            .http
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &body));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Generation(e.to_string()))?;
        extract_text(parsed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiError>,
}

fn classify_transport(err: &reqwest::Error) -> GenerationError {
    if err.is_connect() || err.is_timeout() {
        GenerationError::Connectivity(err.to_string())
    } else {
        GenerationError::Generation(err.to_string())
    }
}

/// Maps an unsuccessful HTTP response onto the error taxonomy using the
/// status code and the structured error body, not message substrings.
fn classify_status(status: StatusCode, body: &str) -> GenerationError {
    let detail = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .unwrap_or_default();

    if status == StatusCode::TOO_MANY_REQUESTS || detail.status == "RESOURCE_EXHAUSTED" {
        return GenerationError::QuotaExceeded;
    }
    // An unknown model or endpoint reads as "could not reach the service"
    // to the user, same as a transport failure.
    if status == StatusCode::NOT_FOUND {
        return GenerationError::Connectivity(status.to_string());
    }

    let message = if detail.message.is_empty() {
        status.to_string()
    } else {
        detail.message
    };
    GenerationError::Generation(message)
}

/// Text of the first candidate; a present but blank reply is a soft failure.
fn extract_text(response: GenerateResponse) -> Result<String> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(GenerationError::EmptyResponse)
    } else {
        Ok(text)
    }
}
