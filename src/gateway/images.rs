// Image generation adapter - one attempt per scene, failures isolated.

use base64::prelude::*;

use crate::error::ApiError;

use super::{InferenceGateway, InferenceResult, ProviderError};

/// Scenes beyond this bound are dropped (and reported via `truncated`).
pub const MAX_SCENES: usize = 4;

/// Styling suffix appended to every scene prompt.
pub const PROMPT_SUFFIX: &str =
    "cinematic, high quality, 9:16 aspect ratio, vertical video, professional photography";

pub const NEGATIVE_PROMPT: &str = "blurry, low quality, distorted";

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImages {
    /// One entry per consumed scene, in scene order.
    pub images: Vec<InferenceResult<String>>,
    /// True when more than `MAX_SCENES` scenes were offered.
    pub truncated: bool,
}

impl GeneratedImages {
    pub fn urls(&self) -> Vec<String> {
        self.images.iter().map(|image| image.payload().clone()).collect()
    }
}

impl InferenceGateway {
    /// Generate one image per scene, up to `MAX_SCENES`. A failing scene gets
    /// a placeholder tagged with its 1-indexed number and never aborts its
    /// siblings; a missing credential skips the provider entirely and tags
    /// the placeholder with the prompt text instead.
    pub async fn generate_images(&self, scenes: &[String]) -> Result<GeneratedImages, ApiError> {
        if scenes.is_empty() {
            return Err(ApiError::InvalidInput("Script is required"));
        }

        let truncated = scenes.len() > MAX_SCENES;
        if truncated {
            tracing::warn!(
                offered = scenes.len(),
                consumed = MAX_SCENES,
                "extra scenes dropped from image generation"
            );
        }

        let mut images = Vec::with_capacity(scenes.len().min(MAX_SCENES));
        for (index, scene) in scenes.iter().take(MAX_SCENES).enumerate() {
            let prompt = format!("{scene}, {PROMPT_SUFFIX}");
            let image = match self.backend.generate_image(&prompt, NEGATIVE_PROMPT).await {
                Ok(bytes) => InferenceResult::Primary(format!(
                    "data:image/jpeg;base64,{}",
                    BASE64_STANDARD.encode(&bytes)
                )),
                Err(ProviderError::MissingCredential) => InferenceResult::Fallback {
                    reason: "no inference credential configured".to_string(),
                    payload: prompt_placeholder(scene),
                },
                Err(err) => {
                    tracing::warn!(scene = index + 1, error = %err, "image generation failed, using placeholder");
                    InferenceResult::Fallback {
                        reason: err.to_string(),
                        payload: scene_placeholder(index + 1),
                    }
                }
            };
            images.push(image);
        }

        Ok(GeneratedImages { images, truncated })
    }
}

fn prompt_placeholder(scene: &str) -> String {
    let text: String = scene.chars().take(20).collect();
    format!(
        "https://via.placeholder.com/1080x1920/667eea/ffffff?text={}",
        urlencoding::encode(&text)
    )
}

fn scene_placeholder(scene_number: usize) -> String {
    format!("https://via.placeholder.com/1080x1920/4A5568/ffffff?text=Scene+{scene_number}")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::testing::FakeBackend;
    use super::*;

    fn scenes(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("scene number {i}")).collect()
    }

    #[tokio::test]
    async fn no_scenes_is_rejected() {
        let gateway = InferenceGateway::new(Arc::new(FakeBackend::default()));
        let err = gateway.generate_images(&[]).await.unwrap_err();
        assert_eq!(err, ApiError::InvalidInput("Script is required"));
    }

    #[tokio::test]
    async fn five_scenes_produce_exactly_four_images() {
        let gateway = InferenceGateway::new(Arc::new(FakeBackend::default()));
        let generated = gateway.generate_images(&scenes(5)).await.unwrap();

        assert_eq!(generated.images.len(), 4);
        assert!(generated.truncated);
    }

    #[tokio::test]
    async fn truncated_is_false_at_the_bound() {
        let gateway = InferenceGateway::new(Arc::new(FakeBackend::default()));
        let generated = gateway.generate_images(&scenes(4)).await.unwrap();

        assert_eq!(generated.images.len(), 4);
        assert!(!generated.truncated);
    }

    #[tokio::test]
    async fn one_failing_scene_never_aborts_the_others() {
        let backend = FakeBackend {
            fail_image_calls: [2].into_iter().collect(),
            ..FakeBackend::default()
        };
        let gateway = InferenceGateway::new(Arc::new(backend));
        let generated = gateway.generate_images(&scenes(4)).await.unwrap();

        assert!(!generated.images[0].is_fallback());
        assert!(!generated.images[1].is_fallback());
        assert!(!generated.images[3].is_fallback());

        // the failed scene gets a placeholder tagged with its 1-indexed number
        assert!(generated.images[2].is_fallback());
        assert!(generated.images[2].payload().ends_with("text=Scene+3"));
    }

    #[tokio::test]
    async fn missing_credential_tags_placeholders_with_the_prompt() {
        let backend = FakeBackend {
            missing_image_credential: true,
            ..FakeBackend::default()
        };
        let gateway = InferenceGateway::new(Arc::new(backend));
        let generated = gateway
            .generate_images(&["a rocket on the pad at dawn".to_string()])
            .await
            .unwrap();

        // first 20 characters of the scene, URL-encoded
        assert!(generated.images[0].is_fallback());
        assert!(generated.images[0]
            .payload()
            .ends_with(&urlencoding::encode("a rocket on the pad ").to_string()));
    }

    #[tokio::test]
    async fn prompts_carry_the_styling_suffix() {
        let backend = Arc::new(FakeBackend::default());
        let gateway = InferenceGateway::new(backend.clone());
        gateway.generate_images(&scenes(1)).await.unwrap();

        let prompts = backend.image_prompts.lock().unwrap();
        assert_eq!(prompts[0], format!("scene number 1, {PROMPT_SUFFIX}"));
    }
}
