//! Mock provider implementation for testing.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

enum Behaviour {
    Echo,
    Reply(String),
    Fail(String),
}

/// Mock text provider that echoes, replies with canned text or fails, and
/// remembers the prompts it was given.
pub struct MockTextProvider {
    behaviour: Behaviour,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    fn with_behaviour(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn echo() -> Self {
        Self::with_behaviour(Behaviour::Echo)
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_behaviour(Behaviour::Reply(text.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_behaviour(Behaviour::Fail(message.into()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        let text = match &self.behaviour {
            Behaviour::Echo => format!("Mock response for: {}", prompt),
            Behaviour::Reply(text) => text.clone(),
            Behaviour::Fail(message) => return Err(ProviderError::ApiError(message.clone())),
        };

        Ok(ProviderResponse {
            text,
            input_tokens: prompt.len() as i32 / 4,
            output_tokens: 10,
            finish_reason: FinishReason::Complete,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.behaviour {
            Behaviour::Fail(message) => Err(ProviderError::NotConfigured(message.clone())),
            _ => Ok(()),
        }
    }
}
