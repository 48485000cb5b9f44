pub mod config;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod services;
pub mod startup;

use service_core::middleware::UnkeyedRateLimiter;
use services::LingoAgent;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub agent: LingoAgent,
    pub agent_rate_limiter: UnkeyedRateLimiter,
}

impl AppState {
    pub fn new(agent: LingoAgent, agent_rate_limiter: UnkeyedRateLimiter) -> Self {
        Self {
            agent,
            agent_rate_limiter,
        }
    }
}
