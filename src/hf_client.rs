// Hugging Face Inference API client
// Supports: text generation, text-to-image, text-to-speech

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::gateway::{InferenceBackend, ProviderError};

// Public demo token accepted by the hosted inference API for the text
// model's free tier. Images and speech require a real credential.
const DEMO_TOKEN: &str = "hf_demo";

#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    base_url: String,
}

// ============================================================================
// API REQUEST/RESPONSE STRUCTURES
// ============================================================================

#[derive(Serialize, Debug)]
struct TextGenerationRequest<'a> {
    inputs: &'a str,
    parameters: TextGenerationParameters,
}

#[derive(Serialize, Debug)]
struct TextGenerationParameters {
    max_new_tokens: u32,
    temperature: f64,
    top_p: f64,
    return_full_text: bool,
}

#[derive(Deserialize, Debug)]
struct GeneratedText {
    #[serde(default)]
    generated_text: String,
}

#[derive(Serialize, Debug)]
struct ImageGenerationRequest<'a> {
    inputs: &'a str,
    parameters: ImageGenerationParameters<'a>,
}

#[derive(Serialize, Debug)]
struct ImageGenerationParameters<'a> {
    negative_prompt: &'a str,
}

#[derive(Serialize, Debug)]
struct SpeechRequest<'a> {
    inputs: &'a str,
}

// ============================================================================
// MODELS
// ============================================================================

pub struct HfModels;

impl HfModels {
    pub const TEXT: &'static str = "mistralai/Mistral-7B-Instruct-v0.2";
    pub const IMAGE: &'static str = "stabilityai/stable-diffusion-xl-base-1.0";
    pub const TTS: &'static str = "facebook/mms-tts-eng";
}

// ============================================================================
// IMPLEMENTATION
// ============================================================================

impl HuggingFaceClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: "https://api-inference.huggingface.co/models".to_string(),
        }
    }

    /// Credential is resolved on every call, so operators can add or rotate
    /// the key without restarting the service.
    fn api_key(&self) -> Option<String> {
        std::env::var("HUGGINGFACE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
    }

    async fn post_model(
        &self,
        model: &str,
        token: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ProviderError> {
        let url = format!("{}/{}", self.base_url, model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Api { status, body });
        }

        Ok(response)
    }
}

impl Default for HuggingFaceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InferenceBackend for HuggingFaceClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError> {
        // text generation works on the free tier, so a missing credential
        // downgrades to the demo token instead of skipping the call
        let token = self.api_key().unwrap_or_else(|| DEMO_TOKEN.to_string());

        let request = TextGenerationRequest {
            inputs: prompt,
            parameters: TextGenerationParameters {
                max_new_tokens: 250,
                temperature: 0.7,
                top_p: 0.9,
                return_full_text: false,
            },
        };

        let response = self.post_model(HfModels::TEXT, &token, &request).await?;
        let completions: Vec<GeneratedText> = response.json().await?;

        Ok(completions
            .into_iter()
            .next()
            .map(|completion| completion.generated_text)
            .unwrap_or_default())
    }

    async fn generate_image(
        &self,
        prompt: &str,
        negative_prompt: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        let token = self.api_key().ok_or(ProviderError::MissingCredential)?;

        let request = ImageGenerationRequest {
            inputs: prompt,
            parameters: ImageGenerationParameters { negative_prompt },
        };

        let response = self.post_model(HfModels::IMAGE, &token, &request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn synthesize_speech(&self, text: &str) -> Result<Vec<u8>, ProviderError> {
        let token = self.api_key().ok_or(ProviderError::MissingCredential)?;

        let request = SpeechRequest { inputs: text };

        let response = self.post_model(HfModels::TTS, &token, &request).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
