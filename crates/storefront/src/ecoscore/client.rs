//! Eco-score classification client.
//!
//! One best-effort, non-streaming call per product against an
//! OpenAI-compatible chat-completions endpoint. No retry loop and no timeout
//! tuning; callers get the static fallback on any failure.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::EcoScoreConfig;

use super::error::{ApiErrorResponse, EcoScoreError};
use super::types::{ChatMessage, ChatRequest, ChatResponse, EcoScoreResult};

const TEMPERATURE: f32 = 0.4;
const MAX_TOKENS: u32 = 200;

/// Eco-score classification client.
#[derive(Clone)]
pub struct EcoScoreClient {
    inner: Arc<EcoScoreClientInner>,
}

struct EcoScoreClientInner {
    client: reqwest::Client,
    api_url: String,
    model: String,
    key_configured: bool,
}

impl EcoScoreClient {
    /// Create a new classification client.
    ///
    /// With no API key configured the client never issues a request and
    /// every classification resolves to the fallback.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &EcoScoreConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = config.api_key.as_ref() {
            let bearer = format!("Bearer {}", key.expose_secret());
            let mut value =
                HeaderValue::from_str(&bearer).expect("Invalid API key for header");
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(EcoScoreClientInner {
                client,
                api_url: config.api_url.clone(),
                model: config.model.clone(),
                key_configured: config.api_key.is_some(),
            }),
        }
    }

    /// Classify a product, substituting the fallback on any failure.
    ///
    /// Failures are logged and never surfaced to the shopper.
    #[instrument(skip(self, description), fields(model = %self.inner.model))]
    pub async fn classify(&self, name: &str, description: &str) -> EcoScoreResult {
        match self.request_score(name, description).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("eco-score classification failed: {e}; using fallback");
                EcoScoreResult::fallback()
            }
        }
    }

    /// Issue the classification request and parse the reply.
    async fn request_score(
        &self,
        name: &str,
        description: &str,
    ) -> Result<EcoScoreResult, EcoScoreError> {
        if !self.inner.key_configured {
            return Err(EcoScoreError::MissingApiKey);
        }

        let request = ChatRequest {
            model: self.inner.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(name, description),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .inner
            .client
            .post(&self.inner.api_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(serde_json::from_str::<ApiErrorResponse>(&body).map_or_else(
                |_| EcoScoreError::Api {
                    error_type: status.as_str().to_string(),
                    message: body,
                },
                |api_error| EcoScoreError::Api {
                    error_type: api_error
                        .error
                        .error_type
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: api_error.error.message,
                },
            ));
        }

        let body = response.text().await?;
        let completion: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| EcoScoreError::Parse(format!("Failed to parse response: {e}")))?;
        let reply = completion
            .choices
            .first()
            .ok_or(EcoScoreError::EmptyResponse)?
            .message
            .content
            .trim();

        parse_result(reply)
    }
}

/// The fixed prompt template embedding a product's name and description.
fn build_prompt(name: &str, description: &str) -> String {
    format!(
        "Given the following product details:\n\
         - Name: {name}\n\
         - Description: {description}\n\n\
         Task: Evaluate the sustainability of this product and assign an EcoScore rating from A+, A, B+, B.\n\
         Pick only one among these 4 scores. Dont add any header in response, only JSON format should be there.\n\
         Return your result in JSON format:\n\
         {{\"eco_score\": \"A+\", \"justification\": \"Explain why this score was given in less than 100 words.\"}}"
    )
}

/// Parse the model's reply into a verdict.
///
/// Models occasionally wrap the JSON in a markdown code fence despite the
/// prompt; tolerate that before the single parse attempt.
fn parse_result(reply: &str) -> Result<EcoScoreResult, EcoScoreError> {
    serde_json::from_str(strip_code_fence(reply))
        .map_err(|e| EcoScoreError::Parse(format!("Failed to parse verdict: {e}")))
}

/// Strip a surrounding markdown code fence, if any.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use ecofleet_core::EcoScore;

    use super::*;

    #[test]
    fn test_build_prompt_embeds_product() {
        let prompt = build_prompt("Organic Cotton T-Shirt", "Made from 100% plastic");
        assert!(prompt.contains("- Name: Organic Cotton T-Shirt"));
        assert!(prompt.contains("- Description: Made from 100% plastic"));
        assert!(prompt.contains("A+, A, B+, B"));
    }

    #[test]
    fn test_parse_result_plain_json() {
        let reply = r#"{"eco_score": "A", "justification": "Low-impact materials."}"#;
        let result = parse_result(reply).expect("parse");
        assert_eq!(result.eco_score, EcoScore::A);
    }

    #[test]
    fn test_parse_result_fenced_json() {
        let reply = "```json\n{\"eco_score\": \"B+\", \"justification\": \"Mixed supply chain.\"}\n```";
        let result = parse_result(reply).expect("parse");
        assert_eq!(result.eco_score, EcoScore::BPlus);
    }

    #[test]
    fn test_parse_result_prose_is_an_error() {
        let reply = "Sure! I'd rate this product an A+ because...";
        assert!(parse_result(reply).is_err());
    }

    #[test]
    fn test_strip_code_fence_without_fence() {
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn test_strip_code_fence_unlabelled() {
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[tokio::test]
    async fn test_classify_without_key_falls_back() {
        let client = EcoScoreClient::new(&crate::config::StorefrontConfig::for_tests().ecoscore);
        let result = client.classify("Solar Power Bank", "Charges from sunlight").await;
        assert_eq!(result, EcoScoreResult::fallback());
    }

    #[test]
    fn test_client_is_clone_send_sync() {
        fn assert_clone<T: Clone>() {}
        fn assert_send_sync<T: Send + Sync>() {}
        assert_clone::<EcoScoreClient>();
        assert_send_sync::<EcoScoreClient>();
    }
}
