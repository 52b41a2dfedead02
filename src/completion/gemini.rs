//! Gemini REST client
//!
//! Calls `models/{model}:generateContent` once per request. Structured
//! output is requested through `generationConfig.responseSchema`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::settings::ApiSettings;
use crate::{log_debug, log_error, log_info};

use super::error::{Result, ServiceError};
use super::CompletionService;

const MODULE: &str = "completion::gemini";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Client for the Gemini `generateContent` endpoint
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Build a client from resolved API settings
    ///
    /// A missing credential is not an error here: the request is still
    /// sent and the service's rejection is what surfaces.
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        if settings.model.trim().is_empty() {
            return Err(ServiceError::Config("model name is empty".to_string()));
        }

        let http = Client::builder()
            .user_agent(config::app::USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn generate_content(&self, body: &GenerateContentRequest<'_>) -> Result<String> {
        let url = self.endpoint();
        log_debug!(MODULE, "POST {}", url);
        if self.api_key.is_none() {
            log_debug!(MODULE, "No API key configured, sending unauthenticated request");
        }

        let mut request = self.http.post(&url).json(body);
        if let Some(ref key) = self.api_key {
            request = request.header(config::api::API_KEY_HEADER, key.as_str());
        }

        let response = request.send().await.map_err(|e| {
            log_error!(MODULE, "Failed to reach completion service: {}", e);
            ServiceError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&raw)
                .map(|body| body.error.message)
                .unwrap_or_else(|_| {
                    if raw.trim().is_empty() {
                        status.canonical_reason().unwrap_or("unknown error").to_string()
                    } else {
                        raw.trim().to_string()
                    }
                });
            log_error!(
                MODULE,
                "Completion request failed with status {}: {}",
                status,
                message
            );
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            log_error!(MODULE, "Completion response contained no text");
            return Err(ServiceError::EmptyResponse);
        }

        log_info!(
            MODULE,
            "Received {} bytes from {}",
            text.len(),
            self.model
        );
        Ok(text)
    }
}

#[async_trait]
impl CompletionService for GeminiClient {
    async fn complete_json(&self, prompt: &str, schema: &serde_json::Value) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: config::api::JSON_MIME_TYPE,
                response_schema: schema,
            }),
        };
        self.generate_content(&body).await
    }

    async fn complete_text(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart { text: prompt }],
            }],
            generation_config: None,
        };
        self.generate_content(&body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ApiSettings {
        ApiSettings {
            base_url: "http://localhost:8080/".to_string(),
            model: "gemini-test".to_string(),
            api_key: None,
        }
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new(&settings()).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_empty_model_is_rejected() {
        let mut settings = settings();
        settings.model = "  ".to_string();
        assert!(matches!(
            GeminiClient::new(&settings),
            Err(ServiceError::Config(_))
        ));
    }

    #[test]
    fn test_json_request_body_shape() {
        let schema = serde_json::json!({"type": "ARRAY"});
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart { text: "hello" }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: config::api::JSON_MIME_TYPE,
                response_schema: &schema,
            }),
        };
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "ARRAY");
    }

    #[test]
    fn test_text_request_omits_generation_config() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![TextPart { text: "hi" }],
            }],
            generation_config: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("generationConfig").is_none());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_http_error() {
        let client = GeminiClient::new(&ApiSettings {
            base_url: "http://127.0.0.1:9".to_string(),
            model: "gemini-test".to_string(),
            api_key: None,
        })
        .unwrap();

        let result = client.complete_text("ping").await;
        assert!(matches!(result, Err(ServiceError::Http(_))));
    }
}
