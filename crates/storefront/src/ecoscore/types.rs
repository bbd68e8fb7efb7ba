//! Types for the eco-score classification API.
//!
//! These types match the OpenAI-compatible chat-completions format used by
//! the inference provider.

use ecofleet_core::EcoScore;
use serde::{Deserialize, Serialize};

/// A message in a chat-completions conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender ("user" or "assistant").
    pub role: String,
    /// The content of the message.
    pub content: String,
}

/// Request body for the chat-completions API.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model to use (e.g., "llama3-8b-8192").
    pub model: String,
    /// Conversation messages.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

/// Response from the chat-completions API.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices; the first one carries the reply.
    pub choices: Vec<Choice>,
}

/// A single completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ChatMessage,
}

/// The classifier's verdict for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcoScoreResult {
    /// Assigned sustainability tier.
    pub eco_score: EcoScore,
    /// Model-written justification, under 100 words.
    pub justification: String,
}

impl EcoScoreResult {
    /// The static substitute used on any request failure or unparsable
    /// response.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            eco_score: EcoScore::B,
            justification: "Unable to determine exact sustainability. Defaulting to B."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_wire_format() {
        let json = r#"{"eco_score": "A+", "justification": "Fully organic supply chain."}"#;
        let result: EcoScoreResult = serde_json::from_str(json).expect("deserialize");
        assert_eq!(result.eco_score, EcoScore::APlus);
        assert_eq!(result.justification, "Fully organic supply chain.");
    }

    #[test]
    fn test_result_rejects_unknown_tier() {
        let json = r#"{"eco_score": "C", "justification": "nope"}"#;
        assert!(serde_json::from_str::<EcoScoreResult>(json).is_err());
    }

    #[test]
    fn test_fallback_is_b() {
        let fallback = EcoScoreResult::fallback();
        assert_eq!(fallback.eco_score, EcoScore::B);
        assert!(fallback.justification.contains("Defaulting to B"));
    }

    #[test]
    fn test_chat_response_parses_choices() {
        let json = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "{}"}, "finish_reason": "stop"}
            ]
        }"#;
        let response: ChatResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.choices.len(), 1);
    }
}
