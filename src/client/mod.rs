//! Blocking client for the Ollama `/api/generate` endpoint.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "anjanafinetune:latest";

/// Longest slice of an error body carried into `ClientError::Status`.
const MAX_ERROR_BODY: usize = 512;

/// Produces one completion per prompt. The pipeline only talks to this seam.
pub trait Generator {
    fn generate(&self, prompt: &str) -> Result<String, ClientError>;

    fn model(&self) -> &str;
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },
    #[error("cannot decode generation reply: {0}")]
    Decode(String),
}

#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

impl OllamaConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            timeout: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

pub struct OllamaClient {
    config: OllamaConfig,
    http: Client,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Result<Self, ClientError> {
        // Generation can run for minutes; only bound it when asked to.
        let mut builder = Client::builder().timeout(config.timeout);
        if is_loopback(&config.endpoint) {
            builder = builder.no_proxy();
        }
        let http = builder.build().map_err(|source| ClientError::Http {
            endpoint: config.endpoint.clone(),
            source,
        })?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }
}

impl Generator for OllamaClient {
    fn generate(&self, prompt: &str) -> Result<String, ClientError> {
        let endpoint = &self.config.endpoint;
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };
        tracing::debug!(endpoint = %endpoint, prompt_chars = prompt.len(), "sending generate request");

        let response = self
            .http
            .post(endpoint)
            .json(&request)
            .send()
            .map_err(|source| ClientError::Http {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.text().map_err(|source| ClientError::Http {
            endpoint: endpoint.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(ClientError::Status {
                endpoint: endpoint.clone(),
                status: status.as_u16(),
                body: truncate_chars(body.trim(), MAX_ERROR_BODY),
            });
        }

        parse_generate_body(&body)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

/// Extracts the trimmed `response` text. A missing or non-string field reads
/// as empty. Newline-delimited (streamed) replies are concatenated in order.
pub fn parse_generate_body(body: &str) -> Result<String, ClientError> {
    match serde_json::from_str::<Value>(body) {
        Ok(doc) => Ok(response_field(&doc).trim().to_string()),
        Err(whole_err) => {
            let mut out = String::new();
            let mut chunks = 0usize;
            for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
                let doc: Value = serde_json::from_str(line)
                    .map_err(|_| ClientError::Decode(whole_err.to_string()))?;
                out.push_str(response_field(&doc));
                chunks += 1;
            }
            if chunks == 0 {
                return Err(ClientError::Decode(whole_err.to_string()));
            }
            Ok(out.trim().to_string())
        }
    }
}

fn response_field(doc: &Value) -> &str {
    doc.get("response").and_then(Value::as_str).unwrap_or("")
}

fn is_loopback(endpoint: &str) -> bool {
    match Url::parse(endpoint) {
        Ok(url) => matches!(
            url.host_str(),
            Some("localhost") | Some("127.0.0.1") | Some("[::1]")
        ),
        Err(_) => false,
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/client/mod.rs"]
mod tests;
