use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{TargetLanguage, Task};
use crate::prompts::PromptTemplate;

/// Hard upper bound on submitted text, in characters.
pub const MAX_INPUT_CHARS: u64 = 10_000;

/// One submission of the agent form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AgentRequest {
    #[serde(default)]
    #[validate(length(max = MAX_INPUT_CHARS, message = "text is too long"))]
    pub text: String,
    #[serde(default)]
    pub target_lang: TargetLanguage,
    #[serde(default)]
    pub task: Task,
}

impl AgentRequest {
    pub fn new(text: impl Into<String>, target_lang: TargetLanguage, task: Task) -> Self {
        Self {
            text: text.into(),
            target_lang,
            task,
        }
    }

    /// Blank submissions never reach the provider.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Result of a single agent run, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentOutcome {
    Warning(String),
    Success {
        task: Task,
        template: PromptTemplate,
        text: String,
    },
    Failure {
        task: Task,
        message: String,
    },
}

pub const BLANK_INPUT_WARNING: &str = "⚠️ Please enter text.";

impl AgentOutcome {
    pub fn blank_input() -> Self {
        AgentOutcome::Warning(BLANK_INPUT_WARNING.to_string())
    }

    pub fn status(&self) -> &'static str {
        match self {
            AgentOutcome::Warning(_) => "warning",
            AgentOutcome::Success { .. } => "success",
            AgentOutcome::Failure { .. } => "error",
        }
    }

    /// Headline displayed above the response body.
    pub fn heading(&self) -> String {
        match self {
            AgentOutcome::Warning(message) => message.clone(),
            AgentOutcome::Success { task, .. } => format!("🧠 Agent Response ({}):", task),
            AgentOutcome::Failure { message, .. } => format!("❌ Error: {}", message),
        }
    }

    /// Response text for successful runs.
    pub fn body(&self) -> Option<&str> {
        match self {
            AgentOutcome::Success { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// JSON shape returned by the API route.
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentResponseBody {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PromptTemplate>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl From<AgentOutcome> for AgentResponseBody {
    fn from(outcome: AgentOutcome) -> Self {
        let status = outcome.status().to_string();
        let message = outcome.heading();
        match outcome {
            AgentOutcome::Warning(_) => Self {
                status,
                task: None,
                template: None,
                message,
                text: None,
            },
            AgentOutcome::Success {
                task,
                template,
                text,
            } => Self {
                status,
                task: Some(task),
                template: Some(template),
                message,
                text: Some(text),
            },
            AgentOutcome::Failure { task, .. } => Self {
                status,
                task: Some(task),
                template: None,
                message,
                text: None,
            },
        }
    }
}
