// Narration adapter - text-to-speech with a client-side fallback.

use base64::prelude::*;
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ApiError;

use super::InferenceGateway;

/// The speech model rejects long inputs; submissions are capped here.
pub const TTS_CHAR_LIMIT: usize = 500;

lazy_static! {
    static ref MARKER_RE: Regex = Regex::new(r"\[.*?\]").unwrap();
    static ref BLANK_LINES_RE: Regex = Regex::new(r"\n\n+").unwrap();
}

/// Narration outcome. `ClientTts` is a contractual alternate success path,
/// not an error: the caller is asked to speak the cleaned text locally.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioOutcome {
    Synthesized { audio: String },
    ClientTts { reason: String, text: String },
}

/// Strip scene markers and collapse blank-line-separated paragraphs into
/// sentence-terminated prose, ready for a speech model.
pub fn clean_script_for_tts(script: &str) -> String {
    let without_markers = MARKER_RE.replace_all(script, "");
    let joined = BLANK_LINES_RE.replace_all(&without_markers, ". ");
    joined.trim().to_string()
}

impl InferenceGateway {
    /// Narrate a script. The provider sees at most `TTS_CHAR_LIMIT`
    /// characters of the cleaned text; the client-TTS fallback carries the
    /// full cleaned text.
    pub async fn generate_audio(&self, script: &str) -> Result<AudioOutcome, ApiError> {
        if script.trim().is_empty() {
            return Err(ApiError::InvalidInput("Script is required"));
        }

        let clean = clean_script_for_tts(script);
        let submission: String = clean.chars().take(TTS_CHAR_LIMIT).collect();

        match self.backend.synthesize_speech(&submission).await {
            Ok(bytes) => Ok(AudioOutcome::Synthesized {
                audio: format!("data:audio/wav;base64,{}", BASE64_STANDARD.encode(&bytes)),
            }),
            Err(err) => {
                tracing::warn!(error = %err, "speech synthesis failed, handing narration to the client");
                Ok(AudioOutcome::ClientTts {
                    reason: err.to_string(),
                    text: clean,
                })
            }
        }
    }
}
