// Inference gateway - one adapter per pipeline stage, each wrapping a single
// outbound call with a first-class fallback branch.
pub mod audio;
pub mod images;
pub mod script;
pub mod video;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Provider-level failure. Consumed by the adapters' fallback arms and
/// logged there; HTTP callers never see one of these directly.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no inference credential configured")]
    MissingCredential,

    #[error("model host returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("request to model host failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// The outbound surface of the gateway. One call per method, no retries, no
/// timeout override. The live implementation is `HuggingFaceClient`; tests
/// substitute scripted fakes.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError>;

    async fn generate_image(
        &self,
        prompt: &str,
        negative_prompt: &str,
    ) -> Result<Vec<u8>, ProviderError>;

    async fn synthesize_speech(&self, text: &str) -> Result<Vec<u8>, ProviderError>;
}

/// Outcome of a gateway call: the provider's payload, or a locally computed
/// substitute that preserves the success contract.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceResult<T> {
    Primary(T),
    Fallback { reason: String, payload: T },
}

impl<T> InferenceResult<T> {
    pub fn payload(&self) -> &T {
        match self {
            InferenceResult::Primary(payload) => payload,
            InferenceResult::Fallback { payload, .. } => payload,
        }
    }

    pub fn into_payload(self) -> T {
        match self {
            InferenceResult::Primary(payload) => payload,
            InferenceResult::Fallback { payload, .. } => payload,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, InferenceResult::Fallback { .. })
    }
}

#[derive(Clone)]
pub struct InferenceGateway {
    backend: Arc<dyn InferenceBackend>,
}

impl InferenceGateway {
    pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
        Self { backend }
    }
}
