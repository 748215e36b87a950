//! CreativeGenerator tests against an in-memory provider.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use adcraft::creative::{
    AdIdentity, CreativeFormat, CreativeStrategyResult, Mechanism, ProjectContext, Story,
    StrategyContext,
};
use adcraft::generation::{CreativeGenerator, GenerationError, GeneratorSettings};
use adcraft::prompt::{parse_angle, ImagePromptContext};
use adcraft::providers::{
    GenerateRequest, GenerateResponse, LlmProvider, ProviderError, RetryPolicy, UsageStats,
};

/// Returns a fixed reply (or error) and records every request.
struct MockProvider {
    reply: Result<String, u16>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockProvider {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_owned()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<GenerateRequest> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(_) => panic!("request log lock poisoned"),
        }
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn generate(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, ProviderError> {
        let model = request.model.clone();
        match self.requests.lock() {
            Ok(mut requests) => requests.push(request),
            Err(_) => panic!("request log lock poisoned"),
        }
        match &self.reply {
            Ok(text) => Ok(GenerateResponse {
                text: text.clone(),
                usage: UsageStats {
                    input_tokens: 42,
                    output_tokens: 7,
                },
                model,
            }),
            Err(status) => Err(ProviderError::HttpStatus {
                status: *status,
                body: "upstream error".to_owned(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn generator(provider: Arc<MockProvider>) -> CreativeGenerator {
    let settings = GeneratorSettings {
        retry: RetryPolicy::none(),
        ..GeneratorSettings::default()
    };
    CreativeGenerator::new(provider, settings)
}

fn project() -> ProjectContext {
    ProjectContext {
        product_name: "SleepWell".to_owned(),
        ..ProjectContext::default()
    }
}

#[tokio::test]
async fn strategy_reply_is_parsed_with_token_counts() {
    let provider = MockProvider::replying(
        r#"```json
{"visualScene":"Dim bedroom at 3am","embeddedText":"Still awake?","cta":"Shop Now",
 "voiceAnchor":"The Skeptic","uglyAdStructure":{"keyword":"3am","outcome":"sleep"}}
```"#,
    );
    let generator = generator(Arc::clone(&provider));

    let result = generator
        .generate_creative_strategy(
            &project(),
            &StrategyContext::default(),
            "Hook: tired of 3am wakeups",
            CreativeFormat::Meme,
            Some(AdIdentity::Skeptic),
        )
        .await
        .expect("strategy should parse");

    assert_eq!(result.data.visual_scene, "Dim bedroom at 3am");
    assert_eq!(result.data.voice_anchor, "The Skeptic");
    assert_eq!(result.data.ugly_ad_structure.keyword, "3am");
    assert!(result.data.headline.is_empty());
    assert_eq!(result.input_tokens, 42);
    assert_eq!(result.output_tokens, 7);

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    let request = requests.first().expect("one request");
    assert_eq!(request.model, "gemini-3-flash-preview");
    assert!(request.prompt.contains("TASK: Visual Strategy for Meme."));
    let config = request.config.as_ref().expect("json config");
    assert_eq!(config.response_mime_type.as_deref(), Some("application/json"));
    assert!(config.response_schema.is_some());
}

#[tokio::test]
async fn empty_strategy_reply_is_default_result() {
    let generator = generator(MockProvider::replying("   "));
    let result = generator
        .generate_creative_strategy(
            &project(),
            &StrategyContext::default(),
            "angle",
            CreativeFormat::BigFont,
            None,
        )
        .await
        .expect("empty reply should parse");
    assert_eq!(result.data, CreativeStrategyResult::default());
}

#[tokio::test]
async fn unparseable_strategy_reply_is_parse_error() {
    let generator = generator(MockProvider::replying("I cannot help with that."));
    let result = generator
        .generate_creative_strategy(
            &project(),
            &StrategyContext::default(),
            "angle",
            CreativeFormat::BigFont,
            None,
        )
        .await;
    assert!(matches!(result, Err(GenerationError::Parse(_))));
}

#[tokio::test]
async fn strategy_provider_failure_is_surfaced() {
    let generator = generator(MockProvider::failing(500));
    let result = generator
        .generate_creative_strategy(
            &project(),
            &StrategyContext::default(),
            "angle",
            CreativeFormat::BigFont,
            None,
        )
        .await;
    match result {
        Err(GenerationError::Provider(ProviderError::HttpStatus { status, .. })) => {
            assert_eq!(status, 500);
        }
        other => panic!("expected provider error, got: {other:?}"),
    }
}

#[tokio::test]
async fn image_prompt_reply_is_trimmed() {
    let provider = MockProvider::replying("\n  A candid mirror selfie...  \n");
    let generator = generator(Arc::clone(&provider));
    let project = project();
    let angle = parse_angle("Hook: finally slept 8 hours");
    let strategy = StrategyContext::default();
    let ctx = ImagePromptContext {
        project: &project,
        format: CreativeFormat::UgcMirror,
        angle: &angle,
        strategy: &strategy,
        persona: None,
        embedded_text: None,
    };

    let result = generator.generate_image_prompt(&ctx).await;

    assert_eq!(result.data, "A candid mirror selfie...");
    assert_eq!(result.input_tokens, 42);
    let requests = provider.requests();
    let request = requests.first().expect("one request");
    let temperature = request.config.as_ref().and_then(|c| c.temperature);
    assert_eq!(temperature, Some(0.85));
}

#[tokio::test]
async fn image_prompt_falls_back_on_failure() {
    let generator = generator(MockProvider::failing(503));
    let project = project();
    let angle = parse_angle("Hook: finally slept 8 hours");
    let strategy = StrategyContext::default();
    let ctx = ImagePromptContext {
        project: &project,
        format: CreativeFormat::Billboard,
        angle: &angle,
        strategy: &strategy,
        persona: None,
        embedded_text: None,
    };

    let result = generator.generate_image_prompt(&ctx).await;

    assert!(result.data.contains("SleepWell"));
    assert!(result.data.contains("finally slept 8 hours"));
    assert_eq!(result.input_tokens, 0);
    assert_eq!(result.output_tokens, 0);
}

#[tokio::test]
async fn empty_image_reply_falls_back() {
    let generator = generator(MockProvider::replying(""));
    let project = project();
    let angle = parse_angle("Hook: finally slept 8 hours");
    let strategy = StrategyContext::default();
    let ctx = ImagePromptContext {
        project: &project,
        format: CreativeFormat::Billboard,
        angle: &angle,
        strategy: &strategy,
        persona: None,
        embedded_text: Some("8 hours. No pills."),
    };

    let result = generator.generate_image_prompt(&ctx).await;

    assert!(result.data.contains("Text says: \"8 hours. No pills.\""));
    assert_eq!(result.input_tokens, 0);
}

#[tokio::test]
async fn sales_letter_returns_raw_text() {
    let provider = MockProvider::replying("Dear friend,\nIf you have ever...");
    let generator = generator(Arc::clone(&provider));
    let story = Story {
        narrative: "I was broke".to_owned(),
        ..Story::default()
    };
    let mechanism = Mechanism {
        scientific_pseudo: "Compound Loop".to_owned(),
        ..Mechanism::default()
    };

    let result = generator
        .generate_sales_letter("Retire early", Some(&story), Some(&mechanism), &[])
        .await
        .expect("sales letter should succeed");

    assert_eq!(result.data, "Dear friend,\nIf you have ever...");
    let requests = provider.requests();
    let request = requests.first().expect("one request");
    assert!(request.prompt.starts_with("Write Gary Halbert style ad"));
    assert!(request.config.is_none());
}

#[test]
fn settings_are_exposed() {
    let generator = generator(MockProvider::replying(""));
    assert_eq!(generator.settings().retry, RetryPolicy::none());
    assert!(format!("{generator:?}").contains("mock"));
}
