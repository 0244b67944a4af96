use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_OUTPUT_DIR: &str = "data/outputs";
const DEFAULT_PORT: u16 = 8080;

/// Application configuration loaded from environment variables.
/// Fails at startup if the API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub output_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

/// Everything the Gemini client needs. Injected into the client at construction.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        load_dotenv();

        let mut llm = LlmConfig::new(require_env("API_KEY")?);
        if let Some(model) = optional_env("GEMINI_MODEL") {
            llm.model = model;
        }
        if let Some(base_url) = optional_env("GEMINI_BASE_URL") {
            llm.base_url = base_url;
        }
        if let Some(secs) = optional_env("LLM_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?;
            llm.timeout = Duration::from_secs(secs);
        }

        Ok(Config {
            llm,
            output_dir: optional_env("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            port: parse_port(optional_env("PORT"))?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// `.env.development` wins over `.env`; neither is required.
fn load_dotenv() {
    let dev = Path::new(".env.development");
    if dev.exists() {
        dotenvy::from_path(dev).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Unset or blank `PORT` falls back to the default; anything else must be a port number.
fn parse_port(value: Option<String>) -> Result<u16> {
    match value {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got '{raw}'")),
    }
}
