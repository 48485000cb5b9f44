pub mod agent;
pub mod language;
pub mod task;

pub use agent::{AgentOutcome, AgentRequest, AgentResponseBody};
pub use language::TargetLanguage;
pub use task::Task;
