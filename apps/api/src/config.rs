use std::str::FromStr;

use anyhow::{Context, Result};

use crate::generation::generator::MAX_VARIATIONS;
use crate::generation::normalizer::{NormalizerSettings, DEFAULT_LARGE_DEFICIT, DEFAULT_TRIM_MARGIN};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub trim_margin: usize,
    pub large_deficit: usize,
    pub variations_per_request: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: parse_or("PORT", std::env::var("PORT").ok(), 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            trim_margin: parse_or(
                "TRIM_MARGIN",
                std::env::var("TRIM_MARGIN").ok(),
                DEFAULT_TRIM_MARGIN,
            )?,
            large_deficit: parse_or(
                "EXPANSION_LARGE_DEFICIT",
                std::env::var("EXPANSION_LARGE_DEFICIT").ok(),
                DEFAULT_LARGE_DEFICIT,
            )?,
            variations_per_request: parse_or(
                "VARIATIONS_PER_REQUEST",
                std::env::var("VARIATIONS_PER_REQUEST").ok(),
                3,
            )?,
        };

        anyhow::ensure!(
            (1..=MAX_VARIATIONS).contains(&config.variations_per_request),
            "VARIATIONS_PER_REQUEST must be between 1 and {MAX_VARIATIONS}"
        );

        Ok(config)
    }

    pub fn normalizer_settings(&self) -> NormalizerSettings {
        NormalizerSettings {
            trim_margin: self.trim_margin,
            large_deficit: self.large_deficit,
        }
    }
}

/// Parses `raw` if set, otherwise returns `default`.
fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{value}'")),
        None => Ok(default),
    }
}
