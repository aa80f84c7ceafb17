pub mod auth;
pub mod chatbot;
pub mod llm_client;
