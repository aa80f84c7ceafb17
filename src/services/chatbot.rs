use tracing::{debug, warn};

use crate::message::ChatResponse;
use crate::services::llm_client::LlmClient;

pub const SYSTEM_PROMPT: &str = "You are Dr. Chatbot, a warm and friendly AI health assistant. \n\n\
IMPORTANT: You must structure your response using these exact Markdown sections:\n\n\
### 🩺 Overview\n(A simple, reassuring explanation)\n\n\
### 💊 What to do\n(Bullet points of simple advice)\n\n\
### ⚠️ When to see a doctor\n(Clear warning signs)\n\n\
Keep language simple (avoid jargon). Be concise.";

pub const GREETING_REPLY: &str =
    "Hello! I am Dr. Chatbot. How can I assist you with your health today?";
pub const FEVER_REPLY: &str =
    "It sounds like you have a fever. Stay hydrated and rest. If it persists, consult a doctor.";
pub const HEADACHE_REPLY: &str =
    "For a headache, try drinking water and resting in a quiet, dark room.";
pub const UNKNOWN_REPLY: &str =
    "I'm not sure about that. Please consult a real doctor for specific medical advice.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Fever,
    Headache,
    Unknown,
}

// First match wins. "hi" is a plain substring, so "this" counts as a greeting.
pub fn detect_intent(msg: &str) -> Intent {
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("hello") || msg_lower.contains("hi") {
        Intent::Greeting
    } else if msg_lower.contains("fever") {
        Intent::Fever
    } else if msg_lower.contains("headache") {
        Intent::Headache
    } else {
        Intent::Unknown
    }
}

pub fn fallback_reply(user_msg: &str) -> &'static str {
    let intent = detect_intent(user_msg);
    debug!(?intent, "answering from the fallback table");

    match intent {
        Intent::Greeting => GREETING_REPLY,
        Intent::Fever => FEVER_REPLY,
        Intent::Headache => HEADACHE_REPLY,
        Intent::Unknown => UNKNOWN_REPLY,
    }
}

/// Answers chat messages, preferring the model and never failing.
#[derive(Debug, Clone, Default)]
pub struct ChatDispatcher {
    client: Option<LlmClient>,
}

impl ChatDispatcher {
    pub fn new(client: Option<LlmClient>) -> Self {
        Self { client }
    }

    /// A dispatcher that only ever answers from the fallback table.
    pub fn fallback_only() -> Self {
        Self { client: None }
    }

    pub fn has_model(&self) -> bool {
        self.client.is_some()
    }

    pub async fn dispatch(&self, message: &str) -> ChatResponse {
        let response = match self.ask_model(message).await {
            Some(text) => text,
            None => fallback_reply(message).to_string(),
        };

        ChatResponse {
            response,
            user_message: message.to_string(),
        }
    }

    async fn ask_model(&self, message: &str) -> Option<String> {
        let client = self.client.as_ref()?;

        match client.complete(SYSTEM_PROMPT, message).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(error = %e, model = client.model(), "model call failed, using fallback reply");
                None
            }
        }
    }
}
