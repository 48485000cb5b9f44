use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use service_core::error::AppError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::services::providers::gemini::{GeminiConfig, GEMINI_API_BASE};
use crate::services::providers::GenerationParams;

/// Conventional variable holding the Gemini credential, honoured alongside
/// `APP_GEMINI__API_KEY`.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Message shown when the credential is absent.
pub const MISSING_API_KEY: &str = "Gemini API key not found";

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub agent: AgentSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone)]
pub struct GeminiSettings {
    #[serde(default)]
    pub api_key: Option<Secret<String>>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_output_tokens: Option<i32>,
}

#[derive(Deserialize, Clone)]
pub struct AgentSettings {
    /// Agent submissions accepted per minute across all clients.
    pub requests_per_minute: u32,
}

#[derive(Deserialize, Clone)]
pub struct TelemetrySettings {
    pub log_level: String,
    /// OTLP gRPC endpoint (e.g. http://tempo:4317); traces are only exported when set.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl GeminiSettings {
    /// Provider configuration, failing when the credential is missing or blank.
    pub fn provider_config(&self) -> Result<GeminiConfig, AppError> {
        let api_key = self
            .api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| AppError::ConfigError(anyhow::anyhow!(MISSING_API_KEY)))?;

        Ok(GeminiConfig {
            api_key: api_key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }

    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            temperature: self.temperature,
            max_tokens: self.max_output_tokens,
        }
    }
}

fn configuration_directory() -> Result<PathBuf, AppError> {
    let base_path = std::env::current_dir()?;

    // Running from the workspace root or from inside the crate
    Ok(if base_path.ends_with("lingomate") {
        base_path.join("config")
    } else {
        base_path.join("lingomate").join("config")
    })
}

/// Load settings from `config/base.yaml` (optional) and the process environment.
pub fn get_configuration() -> Result<Settings, AppError> {
    let env: HashMap<String, String> = std::env::vars().collect();
    load_settings(&configuration_directory()?, env)
}

/// Load settings from an explicit directory and environment map.
///
/// Precedence, lowest first: built-in defaults, `base.yaml`, `APP_*` variables,
/// then `GEMINI_API_KEY` when no non-blank key was configured otherwise.
pub fn load_settings(
    configuration_directory: &Path,
    env: HashMap<String, String>,
) -> Result<Settings, AppError> {
    let fallback_key = env
        .get(API_KEY_ENV)
        .filter(|key| !key.trim().is_empty())
        .cloned();

    let settings = config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8501)?
        .set_default("gemini.model", "gemini-1.5-flash")?
        .set_default("gemini.base_url", GEMINI_API_BASE)?
        .set_default("gemini.timeout_secs", 60)?
        .set_default("agent.requests_per_minute", 30)?
        .set_default("telemetry.log_level", "info")?
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .source(Some(env)),
        )
        .build()?;

    let mut settings = settings.try_deserialize::<Settings>()?;

    let configured = settings
        .gemini
        .api_key
        .as_ref()
        .is_some_and(|key| !key.expose_secret().trim().is_empty());
    if !configured {
        settings.gemini.api_key = fallback_key.map(Secret::new);
    }

    Ok(settings)
}
