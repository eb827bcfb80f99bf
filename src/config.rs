use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Default chat-completion API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model for keyword extraction and categorisation.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Two remote calls per record at this spacing keeps roughly one record
/// every 1.5 seconds.
pub const DEFAULT_REQUEST_INTERVAL_MS: u64 = 750;

pub const DEFAULT_KEYWORD_ROWS: usize = 100;
pub const DEFAULT_ROUGE_ROWS: usize = 1000;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    /// Chat-completion API root, without a trailing slash.
    pub api_base_url: String,
    pub model: String,
    /// Minimum spacing between remote calls.
    pub request_interval: Duration,
    /// Row cap for the keyword pipeline.
    pub keyword_rows: usize,
    /// Row cap for the overlap pipeline.
    pub rouge_rows: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything except the API key has a default. Numeric values that
    /// don't parse are reported rather than silently replaced.
    pub fn load() -> Result<Self> {
        let request_interval_ms = parse_var(
            "TEXTBENCH_REQUEST_INTERVAL_MS",
            DEFAULT_REQUEST_INTERVAL_MS,
        )?;

        Ok(Self {
            api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            api_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: env::var("TEXTBENCH_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            request_interval: Duration::from_millis(request_interval_ms),
            keyword_rows: parse_var("TEXTBENCH_KEYWORD_ROWS", DEFAULT_KEYWORD_ROWS)?,
            rouge_rows: parse_var("TEXTBENCH_ROUGE_ROWS", DEFAULT_ROUGE_ROWS)?,
        })
    }

    /// Check that the API key is configured.
    /// Call this before any operation that talks to the chat-completion API.
    pub fn require_api_key(&self) -> Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!(
                "OPENAI_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }

    /// The API key with everything but the last four characters hidden.
    pub fn redacted_api_key(&self) -> String {
        if self.api_key.is_empty() {
            return "(not set)".to_string();
        }
        let tail: String = self
            .api_key
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("****{tail}")
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got {raw:?}")),
        _ => Ok(default),
    }
}
