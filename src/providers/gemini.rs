//! Google Gemini provider using the `models/{model}:generateContent` API.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{
    check_http_response, GenerateRequest, GenerateResponse, GenerationConfig, LlmProvider,
    ProviderError, UsageStats,
};

/// Default Generative Language API base URL.
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

// ---------------------------------------------------------------------------
// Wire types (pub for integration testing)
// ---------------------------------------------------------------------------

/// `generateContent` request body.
#[doc(hidden)]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation turns; always a single user turn here.
    pub contents: Vec<GeminiContent>,
    /// Output configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiGenerationConfig>,
}

/// One turn of content.
#[doc(hidden)]
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// "user" or "model".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts.
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// A content part. Only text parts are produced or read.
#[doc(hidden)]
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    /// Text payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// `generationConfig` object.
#[doc(hidden)]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Output MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Structured-output schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
}

/// `generateContent` response body.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    /// Candidates, best first.
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    /// Token usage.
    #[serde(default)]
    pub usage_metadata: Option<GeminiUsage>,
    /// Concrete model version that served the call.
    #[serde(default)]
    pub model_version: Option<String>,
}

/// One response candidate.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    /// Generated content; absent when blocked.
    #[serde(default)]
    pub content: Option<GeminiContent>,
    /// Why generation stopped.
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// `usageMetadata` object.
#[doc(hidden)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiUsage {
    /// Prompt tokens.
    #[serde(default)]
    pub prompt_token_count: u32,
    /// Tokens across all candidates.
    #[serde(default)]
    pub candidates_token_count: u32,
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// Gemini REST provider.
#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    /// Base URL without trailing slash.
    #[doc(hidden)]
    pub base_url: String,
    client: reqwest::Client,
}

impl fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiProvider {
    /// Create a provider against [`DEFAULT_GEMINI_URL`].
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Unavailable` if the key is empty or the HTTP
    /// client cannot be built.
    pub fn new(api_key: String) -> Result<Self, ProviderError> {
        Self::with_options(api_key, DEFAULT_GEMINI_URL, DEFAULT_TIMEOUT)
    }

    /// Create a provider with an explicit base URL and request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Unavailable` if the key is empty or the HTTP
    /// client cannot be built.
    pub fn with_options(
        api_key: String,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        if api_key.trim().is_empty() {
            return Err(ProviderError::Unavailable(
                "Gemini API key is empty; set GEMINI_API_KEY".to_owned(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Unavailable(format!("http client: {e}")))?;
        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    /// Endpoint for one model.
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }
}

// ---------------------------------------------------------------------------
// Request / Response builders (pub for integration testing)
// ---------------------------------------------------------------------------

/// Build a Gemini request body from a generation request.
#[doc(hidden)]
pub fn build_request(request: &GenerateRequest) -> GeminiRequest {
    let generation_config = request.config.as_ref().map(to_wire_config);

    GeminiRequest {
        contents: vec![GeminiContent {
            role: Some("user".to_owned()),
            parts: vec![GeminiPart {
                text: Some(request.prompt.clone()),
            }],
        }],
        generation_config,
    }
}

fn to_wire_config(config: &GenerationConfig) -> GeminiGenerationConfig {
    GeminiGenerationConfig {
        temperature: config.temperature,
        response_mime_type: config.response_mime_type.clone(),
        response_schema: config.response_schema.clone(),
    }
}

/// Parse a Gemini response body.
///
/// Text is the concatenation of the first candidate's text parts; a reply
/// with no candidates parses to empty text.
///
/// # Errors
///
/// Returns `ProviderError::Parse` if the body is not a `generateContent`
/// response.
#[doc(hidden)]
pub fn parse_response(
    body: &str,
    requested_model: &str,
) -> Result<GenerateResponse, ProviderError> {
    let resp: GeminiResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;

    let first = resp.candidates.into_iter().next();
    if let Some(reason) = first.as_ref().and_then(|c| c.finish_reason.as_deref()) {
        debug!(finish_reason = reason, "gemini candidate finished");
    }
    let text = first
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    let usage = resp
        .usage_metadata
        .map(|u| UsageStats {
            input_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        })
        .unwrap_or_default();

    Ok(GenerateResponse {
        text,
        usage,
        model: resp
            .model_version
            .unwrap_or_else(|| requested_model.to_owned()),
    })
}

// ---------------------------------------------------------------------------
// Trait impl
// ---------------------------------------------------------------------------

#[async_trait::async_trait]
impl LlmProvider for GeminiProvider {
    async fn generate(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, ProviderError> {
        let api_request = build_request(&request);

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&api_request)
            .send()
            .await?;

        let payload = check_http_response(response).await?;
        parse_response(&payload, &request.model)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
