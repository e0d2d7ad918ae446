use crate::error::{Error, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::time::Duration;
use url::Url;

pub const EXPLANATION_PROMPT: &str = "Explain the scientific concept, diagram, or equation shown in the image in English. Focus on concepts suitable for grades 7-10. If it is not scientific, state that.";

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub image: bytes::Bytes,
    pub mime_type: String,
    pub prompt: String,
    pub model: String,
}

/// One non-streaming answer from the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Generation {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl Generation {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part {
                        text: Some(text.into()),
                    }],
                }),
                finish_reason: Some("STOP".to_string()),
            }],
            prompt_feedback: None,
        }
    }

    pub fn blocked(reason: Option<&str>) -> Self {
        Self {
            candidates: vec![],
            prompt_feedback: Some(PromptFeedback {
                block_reason: reason.map(str::to_string),
            }),
        }
    }

    /// Text of the first candidate, or `None` when it carries no text part.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let texts: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }

    pub fn block_reason(&self) -> String {
        self.prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExplanationClient: Send + Sync {
    async fn generate_explanation(&self, request: GenerationRequest) -> Result<Generation>;
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: Url,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(api_key: String, client: Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            client,
            api_key,
            base_url,
            timeout,
        }
    }

    fn endpoint(&self, model: &str) -> Result<Url> {
        self.base_url
            .join(&format!("v1beta/models/{}:generateContent", model))
            .map_err(|e| Error::AiService(format!("Invalid Gemini endpoint for model {}: {}", model, e)))
    }
}

fn build_payload(request: &GenerationRequest) -> JsonValue {
    serde_json::json!({
        "contents": [
            {
                "role": "user",
                "parts": [
                    { "text": request.prompt },
                    {
                        "inline_data": {
                            "mime_type": request.mime_type,
                            "data": BASE64.encode(&request.image),
                        }
                    }
                ]
            }
        ]
    })
}

#[async_trait]
impl ExplanationClient for GeminiClient {
    async fn generate_explanation(&self, request: GenerationRequest) -> Result<Generation> {
        let url = self.endpoint(&request.model)?;
        tracing::info!(model = %request.model, bytes = request.image.len(), "Sending request to Gemini");

        let res = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_payload(&request))
            .timeout(self.timeout)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Error::AiService(format!("Gemini API Error {}: {}", status, text)));
        }

        let body = res.text().await?;
        serde_json::from_str::<Generation>(&body)
            .map_err(|e| Error::AiService(format!("Invalid Gemini response format: {}", e)))
    }
}
