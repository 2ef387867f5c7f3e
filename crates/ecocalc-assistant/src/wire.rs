//! Request and response bodies of the `generateContent` endpoint.

use serde::{Deserialize, Serialize};

/// Author of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<Role>, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }

    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::text(Some(Role::User), text)
    }

    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self::text(Some(Role::Model), text)
    }

    /// Role-less block used for the system instruction.
    #[must_use]
    pub fn instruction(text: impl Into<String>) -> Self {
        Self::text(None, text)
    }

    /// Text of the first part, if any.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.parts.first().map(|p| p.text.as_str())
    }
}

/// Sampling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    /// Low temperature for structured estimates.
    pub const ESTIMATE: Self = Self {
        temperature: 0.2,
        top_k: 40,
        top_p: 0.95,
        max_output_tokens: 8192,
    };

    /// Slightly more varied answers for conversation.
    pub const CHAT: Self = Self {
        temperature: 0.4,
        top_k: 32,
        top_p: 0.95,
        max_output_tokens: 8192,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateRequest {
    /// Text of the system instruction, if one is set.
    #[must_use]
    pub fn instruction_text(&self) -> Option<&str> {
        self.system_instruction.as_ref().and_then(Content::first_text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// A response carrying a single model answer.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content::model(text)),
            }],
        }
    }

    /// Text of the first part of the first candidate, when non-empty.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .first_text()
            .filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let request = GenerateRequest {
            contents: vec![Content::user("hi")],
            system_instruction: Some(Content::instruction("be brief")),
            generation_config: GenerationConfig::ESTIMATE,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 8192);
    }

    #[test]
    fn response_first_text() {
        let json = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"42"}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("42"));
    }

    #[test]
    fn response_without_text() {
        let empty: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.first_text(), None);

        let blocked: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(blocked.first_text(), None);

        assert_eq!(GenerateResponse::from_text("  ").first_text(), None);
    }

    #[test]
    fn chat_config_values() {
        assert!((GenerationConfig::CHAT.temperature - 0.4).abs() < f32::EPSILON);
        assert_eq!(GenerationConfig::CHAT.top_k, 32);
    }
}
