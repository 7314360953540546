use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Nothing here is hard-required: the service runs with content-assist
/// degraded when no API key is set, and falls back to `./data` for storage.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for the JSON document storage files.
    pub data_dir: PathBuf,
    /// Gemini credential. Absent means assist operations fail fast with an
    /// "AI unavailable" condition, never a startup panic.
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        // Preferred key first, then the legacy aliases older deployments used.
        let gemini_api_key = std::env::var("GOOGLE_GENERATIVE_AI_API_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
            .ok()
            .filter(|k| !k.is_empty());

        Ok(Config {
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            gemini_api_key,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
