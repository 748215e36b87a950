//! Generative-model provider abstraction.
//!
//! Defines the [`LlmProvider`] trait and the request/response types shared
//! by implementations. One provider ships today:
//! - [`gemini::GeminiProvider`]: Google Generative Language
//!   `models/{model}:generateContent`
//!
//! [`retry::generate_with_retry`] wraps any provider with bounded
//! exponential backoff and [`extract::extract_json`] pulls a JSON object out
//! of free-form model text.

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub mod extract;
pub mod gemini;
pub mod retry;

pub use extract::extract_json;
pub use retry::{generate_with_retry, RetryPolicy};

// ---------------------------------------------------------------------------
// Request / Response
// ---------------------------------------------------------------------------

/// Sampling and output-format options for one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationConfig {
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Output MIME type, e.g. `application/json`.
    pub response_mime_type: Option<String>,
    /// Structured-output schema.
    pub response_schema: Option<serde_json::Value>,
}

impl GenerationConfig {
    /// JSON output constrained by `schema`.
    pub fn json(schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: Some("application/json".to_owned()),
            response_schema: Some(schema),
            ..Self::default()
        }
    }

    /// Plain text output at the given temperature.
    pub fn with_temperature(temperature: f32) -> Self {
        Self {
            temperature: Some(temperature),
            ..Self::default()
        }
    }
}

/// A single-turn generation request.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Model identifier, e.g. `gemini-3-flash-preview`.
    pub model: String,
    /// The full prompt, sent as one user turn.
    pub prompt: String,
    /// Optional output configuration.
    pub config: Option<GenerationConfig>,
}

/// Usage statistics for a generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UsageStats {
    /// Tokens used in the prompt.
    pub input_tokens: u32,
    /// Tokens generated in the response.
    pub output_tokens: u32,
}

/// The response from a provider.
#[derive(Debug, Clone, Default)]
pub struct GenerateResponse {
    /// Text of the first candidate; empty when the model returned none.
    pub text: String,
    /// Token usage.
    pub usage: UsageStats,
    /// The model identifier that served this response.
    pub model: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned by model providers.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP transport failure.
    #[error("provider request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Response did not match expected schema.
    #[error("provider response parse error: {0}")]
    Parse(String),
    /// Upstream provider responded with an error status.
    #[error("provider returned non-success status {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Sanitized response body.
        body: String,
    },
    /// Provider cannot satisfy the request with current configuration.
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

impl ProviderError {
    /// Whether another attempt might succeed: transport errors, 429 and 5xx.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(_) => true,
            Self::HttpStatus { status, .. } => *status == 429 || (500..=599).contains(status),
            Self::Parse(_) | Self::Unavailable(_) => false,
        }
    }
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

/// Check HTTP response status and return body text or a structured error.
///
/// # Errors
///
/// Returns `ProviderError::Request` on transport failure, `ProviderError::HttpStatus` on non-2xx.
pub async fn check_http_response(response: reqwest::Response) -> Result<String, ProviderError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ProviderError::HttpStatus {
            status: status.as_u16(),
            body: sanitize_http_error_body(&body),
        });
    }
    Ok(body)
}

/// Collapse whitespace, redact key-shaped tokens and truncate an error body.
#[doc(hidden)]
pub fn sanitize_http_error_body(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut sanitized = collapsed;
    for pattern in [
        r"AIza[A-Za-z0-9_\-]{20,}",
        r"ya29\.[A-Za-z0-9_\-\.]{20,}",
        r"sk-[A-Za-z0-9]{32,}",
    ] {
        if let Ok(regex) = Regex::new(pattern) {
            sanitized = regex.replace_all(&sanitized, "[REDACTED]").into_owned();
        }
    }

    const MAX_ERROR_BODY_CHARS: usize = 256;
    if sanitized.chars().count() > MAX_ERROR_BODY_CHARS {
        let shortened = sanitized
            .chars()
            .take(MAX_ERROR_BODY_CHARS)
            .collect::<String>();
        return format!("{shortened}...[truncated]");
    }

    sanitized
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Core generative-model interface.
///
/// Implementations must be `Send + Sync` so one provider can be shared
/// behind an `Arc` by every generation call.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Run one generation.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on API, network, or parse failure.
    async fn generate(&self, request: GenerateRequest)
        -> Result<GenerateResponse, ProviderError>;

    /// Short provider name for logs.
    fn name(&self) -> &str;
}
