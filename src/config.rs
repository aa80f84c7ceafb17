// src/config.rs
use std::env;

use anyhow::Context;

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    // Upstream model; the key being absent means fallback-only mode.
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    pub groq_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            groq_api_key: None,
            groq_model: DEFAULT_MODEL.to_string(),
            groq_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build a config from any variable source. Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),
            port,
            groq_api_key: var("GROQ_API_KEY"),
            groq_model: var("GROQ_MODEL").unwrap_or(defaults.groq_model),
            groq_base_url: var("GROQ_BASE_URL").unwrap_or(defaults.groq_base_url),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
