use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional seed for the interview-question shuffle. When set, question
    /// output is reproducible across runs; when unset, each request draws
    /// from OS entropy.
    pub question_shuffle_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            question_shuffle_seed: match std::env::var("QUESTION_SHUFFLE_SEED") {
                Ok(v) => Some(
                    v.parse::<u64>()
                        .context("QUESTION_SHUFFLE_SEED must be a u64")?,
                ),
                Err(_) => None,
            },
        })
    }
}
