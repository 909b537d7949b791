// Request/response payloads for the stateless generation endpoints.
//
// Missing fields default to empty so validation can answer 400 with the
// contract's error message instead of a deserializer rejection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GenerateScriptRequest {
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateScriptResponse {
    pub script: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateImagesRequest {
    #[serde(default)]
    pub script: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateImagesResponse {
    pub images: Vec<String>,
    pub truncated: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateAudioRequest {
    #[serde(default)]
    pub script: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateAudioResponse {
    pub audio: String,
    #[serde(rename = "useClientTTS", skip_serializing_if = "Option::is_none")]
    pub use_client_tts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateVideoRequest {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub audio: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateVideoResponse {
    pub video: String,
    #[serde(rename = "useClientGeneration")]
    pub use_client_generation: bool,
    pub images: Vec<String>,
    pub audio: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_tts_fields_are_absent_on_synthesized_audio() {
        let response = GenerateAudioResponse {
            audio: "data:audio/wav;base64,AAAA".to_string(),
            use_client_tts: None,
            text: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("useClientTTS").is_none());
        assert!(value.get("text").is_none());
    }

    #[test]
    fn client_tts_fields_use_the_wire_names() {
        let response = GenerateAudioResponse {
            audio: String::new(),
            use_client_tts: Some(true),
            text: Some("narration".to_string()),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["useClientTTS"], true);
        assert_eq!(value["text"], "narration");
    }

    #[test]
    fn missing_request_fields_default_to_empty() {
        let request: GenerateScriptRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.topic, "");

        let request: GenerateVideoRequest = serde_json::from_str("{}").unwrap();
        assert!(request.images.is_empty());
        assert_eq!(request.audio, "");
    }
}
