//! Conversational footprint assistant.

use serde::Serialize;

use crate::backend::GenerativeBackend;
use crate::error::AssistantError;
use crate::prompts::{CHAT_SYSTEM_PROMPT, ERROR_REPLY, FALLBACK_REPLY, GREETING};
use crate::wire::{Content, GenerateRequest, GenerationConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// A running conversation. The transcript opens with the greeting,
/// which is shown to the user but never sent to the service.
pub struct ChatSession<B> {
    backend: B,
    transcript: Vec<ChatMessage>,
}

impl<B: GenerativeBackend> ChatSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            transcript: vec![ChatMessage::new(ChatRole::Assistant, GREETING)],
        }
    }

    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// The request for the current transcript.
    #[must_use]
    pub fn request(&self) -> GenerateRequest {
        let contents = self
            .transcript
            .iter()
            .skip(1)
            .map(|message| match message.role {
                ChatRole::User => Content::user(message.text.as_str()),
                ChatRole::Assistant => Content::model(message.text.as_str()),
            })
            .collect();
        GenerateRequest {
            contents,
            system_instruction: Some(Content::instruction(CHAT_SYSTEM_PROMPT)),
            generation_config: GenerationConfig::CHAT,
        }
    }

    /// Send one user message. Returns the assistant reply, or `None` for
    /// blank input. On failure the apology is still recorded.
    pub fn send(&mut self, input: &str) -> Result<Option<&ChatMessage>, AssistantError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }
        self.transcript.push(ChatMessage::new(ChatRole::User, input));

        let reply = match self.backend.generate(&self.request()) {
            Ok(response) => response.first_text().unwrap_or(FALLBACK_REPLY).to_string(),
            Err(err) => {
                tracing::warn!(error = %err, backend = self.backend.name(), "chat request failed");
                self.transcript
                    .push(ChatMessage::new(ChatRole::Assistant, ERROR_REPLY));
                return Err(err);
            }
        };
        self.transcript
            .push(ChatMessage::new(ChatRole::Assistant, reply));
        Ok(self.transcript.last())
    }
}
