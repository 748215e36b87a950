//! Retry policy tests against a scripted provider.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use adcraft::providers::{
    generate_with_retry, GenerateRequest, GenerateResponse, LlmProvider, ProviderError,
    RetryPolicy,
};

/// Replays scripted HTTP statuses; 200 succeeds, anything else errors.
struct ScriptedProvider {
    statuses: Mutex<VecDeque<u16>>,
    calls: AtomicU32,
}

impl ScriptedProvider {
    fn new(statuses: &[u16]) -> Self {
        Self {
            statuses: Mutex::new(statuses.iter().copied().collect()),
            calls: AtomicU32::new(0),
        }
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    async fn generate(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = match self.statuses.lock() {
            Ok(mut statuses) => statuses.pop_front().unwrap_or(200),
            Err(_) => panic!("status script lock poisoned"),
        };
        if next == 200 {
            Ok(GenerateResponse {
                text: "ok".to_owned(),
                model: request.model,
                ..GenerateResponse::default()
            })
        } else {
            Err(ProviderError::HttpStatus {
                status: next,
                body: String::new(),
            })
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn request() -> GenerateRequest {
    GenerateRequest {
        model: "gemini-3-flash-preview".to_owned(),
        prompt: "hi".to_owned(),
        config: None,
    }
}

#[test]
fn backoff_doubles_and_caps() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.backoff_for(1), Duration::from_millis(500));
    assert_eq!(policy.backoff_for(2), Duration::from_secs(1));
    assert_eq!(policy.backoff_for(3), Duration::from_secs(2));
    assert_eq!(policy.backoff_for(5), Duration::from_secs(5));
    assert_eq!(policy.backoff_for(u32::MAX), Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn transient_failure_is_retried_once() {
    let provider = ScriptedProvider::new(&[503, 200]);
    let started = tokio::time::Instant::now();

    let response = generate_with_retry(&provider, &request(), &RetryPolicy::default())
        .await
        .expect("second attempt should succeed");

    assert_eq!(response.text, "ok");
    assert_eq!(provider.calls(), 2);
    assert!(started.elapsed() >= Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn rate_limit_exhausts_attempts() {
    let provider = ScriptedProvider::new(&[429, 429, 429, 429]);

    match generate_with_retry(&provider, &request(), &RetryPolicy::default()).await {
        Err(ProviderError::HttpStatus { status, .. }) => assert_eq!(status, 429),
        other => panic!("expected rate-limit error, got: {other:?}"),
    }
    assert_eq!(provider.calls(), 3);
}

#[tokio::test(start_paused = true)]
async fn client_error_is_not_retried() {
    let provider = ScriptedProvider::new(&[400, 200]);

    let result = generate_with_retry(&provider, &request(), &RetryPolicy::default()).await;

    assert!(result.is_err());
    assert_eq!(provider.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn none_policy_makes_single_attempt() {
    let provider = ScriptedProvider::new(&[500, 200]);

    let result = generate_with_retry(&provider, &request(), &RetryPolicy::none()).await;

    assert!(result.is_err());
    assert_eq!(provider.calls(), 1);
}
