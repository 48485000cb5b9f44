use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

use super::metrics::{record_agent_run, record_provider_call, record_tokens};
use super::providers::{GenerationParams, TextProvider};
use crate::models::{AgentOutcome, AgentRequest};
use crate::prompts::build_prompt;

/// Runs one user request: validates the text, picks and renders a prompt
/// template, and asks the provider for a response.
#[derive(Clone)]
pub struct LingoAgent {
    provider: Arc<dyn TextProvider>,
    params: GenerationParams,
}

impl LingoAgent {
    pub fn new(provider: Arc<dyn TextProvider>, params: GenerationParams) -> Self {
        Self { provider, params }
    }

    pub fn provider(&self) -> &Arc<dyn TextProvider> {
        &self.provider
    }

    /// Never fails: every provider error is folded into `AgentOutcome::Failure`.
    pub async fn run(&self, request: &AgentRequest) -> AgentOutcome {
        if request.is_blank() {
            tracing::info!(task = %request.task, "Rejected blank input");
            record_agent_run(request.task.as_str(), "none", "warning");
            return AgentOutcome::blank_input();
        }

        let prompt = build_prompt(request.task, request.target_lang, &request.text);

        let span = tracing::info_span!(
            "agent_run",
            provider = self.provider.name(),
            task = %request.task,
            target_lang = %request.target_lang,
            template = %prompt.template,
        );

        async {
            let started = Instant::now();
            let result = self.provider.generate(&prompt.text, &self.params).await;
            let elapsed = started.elapsed();

            let outcome = match result {
                Ok(response) => {
                    record_provider_call(self.provider.name(), "ok", elapsed);
                    record_tokens(
                        self.provider.name(),
                        response.input_tokens,
                        response.output_tokens,
                    );
                    tracing::info!(
                        input_tokens = response.input_tokens,
                        output_tokens = response.output_tokens,
                        finish_reason = ?response.finish_reason,
                        elapsed_ms = elapsed.as_millis() as u64,
                        "Provider responded"
                    );
                    AgentOutcome::Success {
                        task: request.task,
                        template: prompt.template,
                        text: response.text.trim().to_string(),
                    }
                }
                Err(e) => {
                    record_provider_call(self.provider.name(), e.kind(), elapsed);
                    tracing::error!(error = %e, "Provider call failed");
                    AgentOutcome::Failure {
                        task: request.task,
                        message: e.to_string(),
                    }
                }
            };

            record_agent_run(
                request.task.as_str(),
                prompt.template.as_str(),
                outcome.status(),
            );
            outcome
        }
        .instrument(span)
        .await
    }
}
