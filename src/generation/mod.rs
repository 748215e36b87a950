//! Generation service: prompt assembly plus one model call.
//!
//! [`CreativeGenerator`] owns a shared provider and the call settings. The
//! strategy and sales-letter paths surface failures to the caller; the
//! image-prompt path degrades to [`fallback_image_prompt`] instead.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::creative::{
    AdIdentity, CreativeFormat, CreativeStrategyResult, Mechanism, ProjectContext, Story,
    StrategyContext,
};
use crate::prompt::{
    build_creative_strategy_prompt, build_image_director_prompt, build_sales_letter_prompt,
    fallback_image_prompt, strategy_response_schema, ImagePromptContext,
};
use crate::providers::{
    extract_json, generate_with_retry, GenerateRequest, GenerateResponse, GenerationConfig,
    LlmProvider, ProviderError, RetryPolicy,
};

/// Default text model.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";

/// Default sampling temperature for the image-director call.
pub const DEFAULT_IMAGE_PROMPT_TEMPERATURE: f32 = 0.85;

/// Parsed payload plus token counts of the call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenResult<T> {
    /// Parsed payload.
    pub data: T,
    /// Prompt tokens.
    pub input_tokens: u32,
    /// Generated tokens.
    pub output_tokens: u32,
}

impl<T> GenResult<T> {
    fn from_response(data: T, response: &GenerateResponse) -> Self {
        Self {
            data,
            input_tokens: response.usage.input_tokens,
            output_tokens: response.usage.output_tokens,
        }
    }
}

/// Errors from a generation call.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The provider call failed after retries.
    #[error(transparent)]
    Provider(ProviderError),
    /// The model replied, but not with the expected JSON.
    #[error("could not parse model output: {0}")]
    Parse(String),
}

impl From<ProviderError> for GenerationError {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::Parse(msg) => Self::Parse(msg),
            other => Self::Provider(other),
        }
    }
}

/// Per-call settings for [`CreativeGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    /// Model used for every text call.
    pub text_model: String,
    /// Retry policy wrapped around each call.
    pub retry: RetryPolicy,
    /// Temperature for the image-director call.
    pub image_prompt_temperature: f32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            text_model: DEFAULT_TEXT_MODEL.to_owned(),
            retry: RetryPolicy::default(),
            image_prompt_temperature: DEFAULT_IMAGE_PROMPT_TEMPERATURE,
        }
    }
}

/// Runs the prompt assemblers against a provider.
#[derive(Clone)]
pub struct CreativeGenerator {
    provider: Arc<dyn LlmProvider>,
    settings: GeneratorSettings,
}

impl std::fmt::Debug for CreativeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreativeGenerator")
            .field("provider", &self.provider.name())
            .field("settings", &self.settings)
            .finish()
    }
}

impl CreativeGenerator {
    /// Create a generator over a shared provider.
    pub fn new(provider: Arc<dyn LlmProvider>, settings: GeneratorSettings) -> Self {
        Self { provider, settings }
    }

    /// Current settings.
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    async fn call(
        &self,
        prompt: String,
        config: Option<GenerationConfig>,
    ) -> Result<GenerateResponse, ProviderError> {
        debug!(model = %self.settings.text_model, %prompt, "sending prompt");
        let request = GenerateRequest {
            model: self.settings.text_model.clone(),
            prompt,
            config,
        };
        let response =
            generate_with_retry(self.provider.as_ref(), &request, &self.settings.retry).await?;
        info!(
            provider = self.provider.name(),
            model = %response.model,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "generation complete"
        );
        Ok(response)
    }

    /// Visual strategy and copy for one format.
    ///
    /// An empty model reply parses as an all-empty result.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Provider`] when the call fails and
    /// [`GenerationError::Parse`] when the reply is not the expected JSON.
    pub async fn generate_creative_strategy(
        &self,
        project: &ProjectContext,
        strategy: &StrategyContext,
        angle: &str,
        format: CreativeFormat,
        identity: Option<AdIdentity>,
    ) -> Result<GenResult<CreativeStrategyResult>, GenerationError> {
        let prompt = build_creative_strategy_prompt(project, strategy, angle, format, identity);
        let config = GenerationConfig::json(strategy_response_schema());
        let response = self.call(prompt, Some(config)).await?;

        let text = if response.text.trim().is_empty() {
            "{}"
        } else {
            response.text.as_str()
        };
        let data: CreativeStrategyResult = extract_json(text)?;
        Ok(GenResult::from_response(data, &response))
    }

    /// Final image prompt written by the model, or the local fallback.
    ///
    /// Never fails: a provider error or an empty reply yields
    /// [`fallback_image_prompt`] with zero token counts.
    pub async fn generate_image_prompt(&self, ctx: &ImagePromptContext<'_>) -> GenResult<String> {
        let prompt = build_image_director_prompt(ctx);
        let config = GenerationConfig::with_temperature(self.settings.image_prompt_temperature);

        match self.call(prompt, Some(config)).await {
            Ok(response) if !response.text.trim().is_empty() => {
                GenResult::from_response(response.text.trim().to_owned(), &response)
            }
            Ok(_) => {
                warn!(format = %ctx.format, "empty image prompt reply, using fallback");
                fallback_result(ctx)
            }
            Err(e) => {
                warn!(
                    format = %ctx.format,
                    error = %e,
                    "image prompt generation failed, using fallback"
                );
                fallback_result(ctx)
            }
        }
    }

    /// Long-form sales letter opening on `headline`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Provider`] when the call fails.
    pub async fn generate_sales_letter(
        &self,
        headline: &str,
        story: Option<&Story>,
        mechanism: Option<&Mechanism>,
        keywords: &[String],
    ) -> Result<GenResult<String>, GenerationError> {
        let prompt = build_sales_letter_prompt(headline, story, mechanism, keywords);
        let response = self.call(prompt, None).await?;
        Ok(GenResult::from_response(response.text.clone(), &response))
    }
}

fn fallback_result(ctx: &ImagePromptContext<'_>) -> GenResult<String> {
    GenResult {
        data: fallback_image_prompt(ctx),
        input_tokens: 0,
        output_tokens: 0,
    }
}
