use crate::config::Config;
use crate::error::{Error, Result};
use crate::services::ai_service::{ExplanationClient, GeminiClient, GenerationRequest, EXPLANATION_PROMPT};
use crate::utils::image::ValidatedImage;
use crate::utils::markdown::strip_emphasis;
use reqwest::Client;
use std::sync::Arc;

/// Turns an uploaded image into speech-ready explanation text.
#[derive(Clone)]
pub struct ExplanationService {
    client: Option<Arc<dyn ExplanationClient>>,
    model: String,
}

impl ExplanationService {
    pub fn new(client: Option<Arc<dyn ExplanationClient>>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config, http_client: Client) -> Self {
        let client = config.gemini_api_key.clone().map(|key| {
            Arc::new(GeminiClient::new(
                key,
                http_client,
                config.gemini_base_url.clone(),
                config.ai_timeout,
            )) as Arc<dyn ExplanationClient>
        });
        Self::new(client, config.gemini_model.clone())
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub fn ensure_configured(&self) -> Result<()> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(Error::AiNotConfigured)
        }
    }

    pub async fn explain(&self, image: ValidatedImage) -> Result<String> {
        let client = self.client.as_ref().ok_or(Error::AiNotConfigured)?;

        let request = GenerationRequest {
            image: image.bytes,
            mime_type: image.mime_type.to_string(),
            prompt: EXPLANATION_PROMPT.to_string(),
            model: self.model.clone(),
        };

        let generation = match client.generate_explanation(request).await {
            Ok(generation) => generation,
            Err(err @ (Error::GenerationBlocked(_) | Error::AiService(_) | Error::AiNotConfigured)) => {
                return Err(err)
            }
            Err(err) => return Err(Error::AiService(err.to_string())),
        };

        if generation.candidates.is_empty() {
            let reason = generation.block_reason();
            tracing::warn!(reason = %reason, "Gemini returned no candidates");
            return Err(Error::GenerationBlocked(reason));
        }

        let explanation = generation
            .text()
            .ok_or_else(|| Error::AiService("First candidate contained no text".to_string()))?;
        tracing::info!(chars = explanation.len(), "Received explanation from Gemini");

        Ok(strip_emphasis(&explanation))
    }
}
