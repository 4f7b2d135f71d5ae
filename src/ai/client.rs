use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::AiConfig;
use crate::error::{RecommendationError, Result};

// ============================================================================
// Request types (chat-completions format)
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn user(content: impl Into<MessageContent>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Plain text, or a list of multimodal parts.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Text(text)
    }
}

impl From<Vec<ContentPart>> for MessageContent {
    fn from(parts: Vec<ContentPart>) -> Self {
        MessageContent::Parts(parts)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    ImageUrl { image_url: ImageUrl },
    Text { text: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

// ============================================================================
// Response envelope
// ============================================================================

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Extract `choices[0].message.content` from a completion body.
pub fn parse_completion_envelope(body: &str) -> std::result::Result<String, RecommendationError> {
    let response: CompletionResponse = serde_json::from_str(body).map_err(|e| {
        error!("Failed to parse completion envelope: {e}");
        RecommendationError::InvalidResponseEnvelope
    })?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(RecommendationError::InvalidResponseEnvelope)
}

// ============================================================================
// Transport
// ============================================================================

/// One chat completion round-trip. Returns the message content text.
///
/// Implementations must not retry; dropping the future cancels the call.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        request: &ChatRequest,
    ) -> std::result::Result<String, RecommendationError>;
}

/// Bearer-token HTTP client for a chat-completions endpoint.
pub struct HttpCompletionClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpCompletionClient {
    pub fn new(config: &AiConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(
        &self,
        request: &ChatRequest,
    ) -> std::result::Result<String, RecommendationError> {
        info!(model = %request.model, "Sending chat completion request");

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send completion request: {e}");
                RecommendationError::NetworkFailure {
                    status: None,
                    body: e.to_string(),
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RecommendationError::NetworkFailure {
                status: Some(status.as_u16()),
                body: e.to_string(),
            })?;

        if !status.is_success() {
            error!("Completion endpoint returned HTTP {status}");
            return Err(RecommendationError::NetworkFailure {
                status: Some(status.as_u16()),
                body,
            });
        }

        debug!("Completion response: {} bytes", body.len());
        parse_completion_envelope(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_extracts_first_choice() {
        let body = r#"{"id": "x", "choices": [{"index": 0, "message": {"role": "assistant", "content": "hello"}}]}"#;
        assert_eq!(parse_completion_envelope(body).unwrap(), "hello");
    }

    #[test]
    fn test_envelope_without_choices() {
        assert!(matches!(
            parse_completion_envelope(r#"{"choices": []}"#),
            Err(RecommendationError::InvalidResponseEnvelope)
        ));
        assert!(matches!(
            parse_completion_envelope(r#"{"error": {"message": "bad key"}}"#),
            Err(RecommendationError::InvalidResponseEnvelope)
        ));
        assert!(matches!(
            parse_completion_envelope("not json"),
            Err(RecommendationError::InvalidResponseEnvelope)
        ));
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "glm-4v-flash".to_string(),
            messages: vec![ChatMessage::user(vec![
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: "data:image/jpeg;base64,AAAA".to_string(),
                    },
                },
                ContentPart::Text {
                    text: "识别".to_string(),
                },
            ])],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"][0]["type"], "image_url");
        assert_eq!(
            json["messages"][0]["content"][0]["image_url"]["url"],
            "data:image/jpeg;base64,AAAA"
        );
        assert_eq!(json["messages"][0]["content"][1]["text"], "识别");

        let text = ChatRequest {
            model: "glm-4-flash".to_string(),
            messages: vec![ChatMessage::user("你好".to_string())],
        };
        let json = serde_json::to_value(&text).unwrap();
        assert_eq!(json["messages"][0]["content"], "你好");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_failure() {
        let config = AiConfig {
            base_url: "http://127.0.0.1:9/chat/completions".to_string(),
            timeout: std::time::Duration::from_secs(2),
            ..AiConfig::with_api_key("test")
        };
        let client = HttpCompletionClient::new(&config).unwrap();
        let request = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage::user("ping".to_string())],
        };
        let err = client.complete(&request).await.unwrap_err();
        assert!(matches!(
            err,
            RecommendationError::NetworkFailure { status: None, .. }
        ));
    }
}
