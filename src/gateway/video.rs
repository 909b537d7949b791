// Video handoff adapter. Composition happens outside this system; this
// adapter only packages the collected artifacts for the client.

use crate::error::ApiError;

use super::InferenceGateway;

pub const COMPOSITION_MESSAGE: &str = "Video composition ready. Download images and audio to create final video using video editing software.";

#[derive(Debug, Clone, PartialEq)]
pub struct VideoHandoff {
    /// Always empty; kept so the response contract has a video slot.
    pub video: String,
    pub use_client_generation: bool,
    pub images: Vec<String>,
    pub audio: String,
    pub message: String,
}

impl InferenceGateway {
    /// Package images and narration for client-side composition.
    pub fn compose_video(
        &self,
        images: Vec<String>,
        audio: String,
    ) -> Result<VideoHandoff, ApiError> {
        if images.is_empty() {
            return Err(ApiError::InvalidInput("Images are required"));
        }

        Ok(VideoHandoff {
            video: String::new(),
            use_client_generation: true,
            images,
            audio,
            message: COMPOSITION_MESSAGE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::testing::FakeBackend;
    use super::*;

    #[test]
    fn empty_image_list_is_rejected() {
        let gateway = InferenceGateway::new(Arc::new(FakeBackend::default()));
        let err = gateway.compose_video(Vec::new(), String::new()).unwrap_err();
        assert_eq!(err, ApiError::InvalidInput("Images are required"));
    }

    #[test]
    fn handoff_echoes_the_artifacts() {
        let gateway = InferenceGateway::new(Arc::new(FakeBackend::default()));
        let images = vec!["data:image/jpeg;base64,AAAA".to_string()];
        let handoff = gateway
            .compose_video(images.clone(), "data:audio/wav;base64,BBBB".to_string())
            .unwrap();

        assert_eq!(handoff.video, "");
        assert!(handoff.use_client_generation);
        assert_eq!(handoff.images, images);
        assert_eq!(handoff.audio, "data:audio/wav;base64,BBBB");
        assert_eq!(handoff.message, COMPOSITION_MESSAGE);
    }
}
