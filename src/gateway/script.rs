// Script generation adapter.

use crate::error::ApiError;

use super::{InferenceGateway, InferenceResult};

impl InferenceGateway {
    /// Generate a Shorts script for a topic. Provider trouble or an empty
    /// completion lands on the templated fallback script; only a missing
    /// topic is an error.
    pub async fn generate_script(
        &self,
        topic: &str,
    ) -> Result<InferenceResult<String>, ApiError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ApiError::InvalidInput("Topic is required"));
        }

        let prompt = script_prompt(topic);
        match self.backend.generate_text(&prompt).await {
            Ok(completion) => {
                let script = completion.trim().to_string();
                if script.is_empty() {
                    tracing::warn!(topic, "model returned an empty script, using fallback");
                    Ok(InferenceResult::Fallback {
                        reason: "empty completion".to_string(),
                        payload: fallback_script(topic),
                    })
                } else {
                    Ok(InferenceResult::Primary(script))
                }
            }
            Err(err) => {
                tracing::warn!(topic, error = %err, "script generation failed, using fallback");
                Ok(InferenceResult::Fallback {
                    reason: err.to_string(),
                    payload: fallback_script(topic),
                })
            }
        }
    }
}

fn script_prompt(topic: &str) -> String {
    format!(
        "Write a 30-second YouTube Shorts script about: {topic}\n\n\
         Instructions:\n\
         - Keep it under 100 words\n\
         - Make it engaging and punchy\n\
         - Include a hook, 3 main points, and a call-to-action\n\
         - Format with clear scene breaks\n\n\
         Script:"
    )
}

/// Deterministic local script used whenever the model host cannot deliver.
/// The topic is interpolated into the hook line only.
pub fn fallback_script(topic: &str) -> String {
    format!(
        "[HOOK]\n\
         Did you know? Here's something amazing about {topic}!\n\
         \n\
         [SCENE 1]\n\
         First, let's understand what makes this so special.\n\
         \n\
         [SCENE 2]\n\
         The most interesting part is how it affects our daily lives.\n\
         \n\
         [SCENE 3]\n\
         Finally, here's the surprising truth most people don't know.\n\
         \n\
         [CALL TO ACTION]\n\
         Like and follow for more fascinating facts! Which fact surprised you most? Comment below!"
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::testing::FakeBackend;
    use super::*;

    #[tokio::test]
    async fn empty_topic_is_rejected_without_a_fallback() {
        let gateway = InferenceGateway::new(Arc::new(FakeBackend::with_text("anything")));
        let err = gateway.generate_script("   ").await.unwrap_err();
        assert_eq!(err, ApiError::InvalidInput("Topic is required"));
    }

    #[tokio::test]
    async fn successful_completion_is_primary() {
        let gateway = InferenceGateway::new(Arc::new(FakeBackend::with_text("  A script.  ")));
        let outcome = gateway.generate_script("Space").await.unwrap();
        assert_eq!(outcome, InferenceResult::Primary("A script.".to_string()));
    }

    #[tokio::test]
    async fn provider_failure_falls_back_to_the_template() {
        let gateway = InferenceGateway::new(Arc::new(FakeBackend::default()));
        let outcome = gateway.generate_script("Space").await.unwrap();

        assert!(outcome.is_fallback());
        let script = outcome.into_payload();
        assert!(script.contains("Space"));

        // section markers appear in order
        let markers = ["[HOOK]", "[SCENE 1]", "[SCENE 2]", "[SCENE 3]", "[CALL TO ACTION]"];
        let positions: Vec<usize> = markers
            .iter()
            .map(|marker| script.find(marker).expect("marker missing"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn empty_completion_falls_back_too() {
        let gateway = InferenceGateway::new(Arc::new(FakeBackend::with_text("   ")));
        let outcome = gateway.generate_script("Space").await.unwrap();
        assert!(outcome.is_fallback());
        assert!(outcome.payload().contains("[HOOK]"));
    }
}
