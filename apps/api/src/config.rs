use anyhow::{Context, Result};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the Gemini endpoint. Deliberately not validated at
    /// startup: an empty key produces failing outbound calls, surfaced
    /// per-request as LLM errors.
    pub google_api_key: String,
    /// Path of the JSON array file backing the candidate store.
    pub candidate_file: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: std::env::var("GOOGLE_API_KEY").unwrap_or_default(),
            candidate_file: std::env::var("CANDIDATE_FILE")
                .unwrap_or_else(|_| "candidates.json".to_string())
                .into(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
