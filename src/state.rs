// src/state.rs
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::services::chatbot::ChatDispatcher;
use crate::services::llm_client::LlmClient;

pub type SharedState = Arc<AppState>;

// Built once at startup and read-only afterwards.
pub struct AppState {
    pub dispatcher: ChatDispatcher,
}

impl AppState {
    pub fn new(dispatcher: ChatDispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ChatDispatcher::new(build_client(config)))
    }
}

fn build_client(config: &Config) -> Option<LlmClient> {
    let Some(key) = config.groq_api_key.as_deref() else {
        info!("GROQ_API_KEY not set, answering from fallback replies only");
        return None;
    };

    let key_prefix: String = key.chars().take(8).collect();
    info!(%key_prefix, model = %config.groq_model, "GROQ_API_KEY found, model replies enabled");

    match LlmClient::new(key, &config.groq_model, &config.groq_base_url) {
        Ok(client) => Some(client),
        Err(e) => {
            warn!(error = %e, "could not build model client, answering from fallback replies only");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_key_means_no_model() {
        let state = AppState::from_config(&Config::default());
        assert!(!state.dispatcher.has_model());
    }

    #[test]
    fn key_enables_model() {
        let config = Config {
            groq_api_key: Some("gsk_0123456789".to_string()),
            ..Config::default()
        };
        assert!(AppState::from_config(&config).dispatcher.has_model());
    }
}
