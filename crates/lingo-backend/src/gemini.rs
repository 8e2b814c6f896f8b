use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::types::{Content, GenerateRequest, GenerateResponse, GenerationConfig, Part};
use crate::{BackendError, GenerativeBackend, ProviderMetadata};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini REST backend (`models/{model}:generateContent`)
#[derive(Clone)]
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiBackend {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
        }
    }

    /// Same as `new`, with a per-request timeout
    pub fn with_timeout(
        api_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest<'a> {
    contents: &'a [Content],
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "config_is_empty")]
    generation_config: &'a GenerationConfig,
}

fn config_is_empty(config: &&GenerationConfig) -> bool {
    config.is_empty()
}

impl<'a> WireRequest<'a> {
    fn from_request(request: &'a GenerateRequest) -> Self {
        Self {
            contents: &request.contents,
            system_instruction: request.system_instruction.as_ref().map(|text| Content {
                role: None,
                parts: vec![Part::text(text.clone())],
            }),
            generation_config: &request.config,
        }
    }
}

/// Pull `error.message` out of a Google API error body
fn error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json["error"]["message"].as_str().map(str::to_string)
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, BackendError> {
        if self.api_key.is_empty() {
            return Err(BackendError::AuthenticationError);
        }

        tracing::debug!(model = %request.model, "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&WireRequest::from_request(&request))
            .send()
            .await?;

        let status = response.status();

        if status == 429 {
            return Err(BackendError::RateLimitExceeded);
        }

        if status == 401 || status == 403 {
            return Err(BackendError::AuthenticationError);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            return Err(BackendError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| BackendError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            requires_api_key: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::schema::Schema;

    #[test]
    fn test_endpoint() {
        let backend = GeminiBackend::new("key".to_string(), format!("{}/", DEFAULT_BASE_URL));
        assert_eq!(
            backend.endpoint("gemini-2.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_wire_request_shape() {
        let request = GenerateRequest::prompt("m", "hi")
            .with_system("Be a tutor")
            .with_config(GenerationConfig::json_schema(Schema::string()));

        assert_eq!(
            serde_json::to_value(WireRequest::from_request(&request)).unwrap(),
            json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hi" }] }],
                "systemInstruction": { "parts": [{ "text": "Be a tutor" }] },
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": { "type": "STRING" }
                }
            })
        );
    }

    #[test]
    fn test_wire_request_omits_empty_config() {
        let request = GenerateRequest::prompt("m", "hi");
        let value = serde_json::to_value(WireRequest::from_request(&request)).unwrap();
        assert!(value.get("generationConfig").is_none());
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"error":{"code":404,"message":"models/x is not found","status":"NOT_FOUND"}}"#;
        assert_eq!(error_message(body).as_deref(), Some("models/x is not found"));
        assert_eq!(error_message("<html>"), None);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let backend = GeminiBackend::new(String::new(), DEFAULT_BASE_URL.to_string());
        let result = backend.generate(GenerateRequest::prompt("m", "hi")).await;
        assert!(matches!(result, Err(BackendError::AuthenticationError)));
    }
}
