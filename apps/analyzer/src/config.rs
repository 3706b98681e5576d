use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a development default, so a bare `talentsync analyze`
/// works against locally running services.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external CV-parsing service.
    pub parser_service_url: String,
    /// Base URL of the persistence backend.
    pub backend_url: String,
    /// Where the session context persists itself between runs.
    pub session_file: PathBuf,
    /// When true, the scorer only counts matched skills it can verify
    /// against the job's required list.
    pub strict_skill_validation: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            parser_service_url: env_or("PARSER_SERVICE_URL", "http://127.0.0.1:5000"),
            backend_url: env_or("BACKEND_URL", "http://localhost:3000"),
            session_file: PathBuf::from(env_or("SESSION_FILE", ".talentsync-session.json")),
            strict_skill_validation: match std::env::var("STRICT_SKILL_VALIDATION") {
                Ok(raw) => parse_bool(&raw)?,
                Err(_) => false,
            },
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(anyhow::anyhow!("invalid boolean value '{other}'"))
            .context("STRICT_SKILL_VALIDATION must be a boolean"),
    }
}
