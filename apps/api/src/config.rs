use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every field has a default; startup fails only on values that don't parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on request bodies. Audio payloads ride in the JSON body.
    pub max_body_bytes: usize,
    /// Delay per stage of the simulated processing timeline. Zero disables pacing.
    pub processing_step_delay_ms: u64,
    /// Delay before the mock interview analysis returns. Zero disables pacing.
    pub interview_analysis_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            processing_step_delay_ms: 0,
            interview_analysis_delay_ms: 0,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_body_bytes: parse_env("MAX_BODY_BYTES", defaults.max_body_bytes)?,
            processing_step_delay_ms: parse_env(
                "PROCESSING_STEP_DELAY_MS",
                defaults.processing_step_delay_ms,
            )?,
            interview_analysis_delay_ms: parse_env(
                "INTERVIEW_ANALYSIS_DELAY_MS",
                defaults.interview_analysis_delay_ms,
            )?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn processing_step_delay(&self) -> Duration {
        Duration::from_millis(self.processing_step_delay_ms)
    }

    pub fn interview_analysis_delay(&self) -> Duration {
        Duration::from_millis(self.interview_analysis_delay_ms)
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{key} has an invalid value '{raw}'"))
}
