//! Backend request/response types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Voice IDs reference: https://api.elevenlabs.io/v1/voices
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM"; // Rachel - calm, soothing voice

/// Errors that can occur when communicating with the TTS service.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("ELEVENLABS_API_KEY is required")]
    MissingApiKey,

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Quota exceeded. Please try a shorter text or contact support.")]
    QuotaExceeded,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Per-request voice tuning parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.75,
            similarity_boost: 0.75,
            style: 0.5,
            use_speaker_boost: true,
        }
    }
}

/// A voice available on the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voice {
    pub voice_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Response from the voice catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoicesResponse {
    pub voices: Vec<Voice>,
}

/// Request for speech synthesis.
///
/// Serializes to the JSON body of a synthesis call; the voice id is routed
/// through the URL, not the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    #[serde(default)]
    pub voice_settings: VoiceSettings,
    /// Voice to synthesize with; the service default when absent.
    #[serde(skip)]
    pub voice_id: Option<String>,
}

impl SynthesizeRequest {
    /// Create a new synthesis request with default voice settings.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_settings: VoiceSettings::default(),
            voice_id: None,
        }
    }

    /// Set the voice id.
    pub fn with_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = Some(voice_id.into());
        self
    }

    /// Set the voice tuning parameters.
    pub fn with_settings(mut self, settings: VoiceSettings) -> Self {
        self.voice_settings = settings;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_request_builder() {
        let request = SynthesizeRequest::new("Hello world").with_voice("abc123");

        assert_eq!(request.text, "Hello world");
        assert_eq!(request.voice_id, Some("abc123".to_string()));
        assert_eq!(request.voice_settings, VoiceSettings::default());
    }

    #[test]
    fn test_synthesize_request_defaults() {
        let request = SynthesizeRequest::new("Hello");

        assert_eq!(request.text, "Hello");
        assert_eq!(request.voice_id, None);
        assert_eq!(request.voice_settings.stability, 0.75);
        assert!(request.voice_settings.use_speaker_boost);
    }

    #[test]
    fn test_synthesize_request_body_omits_voice_id() {
        let request = SynthesizeRequest::new("Hello").with_voice("abc123");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["text"], "Hello");
        assert!(body.get("voice_id").is_none());
        assert_eq!(body["voice_settings"]["similarity_boost"], 0.75);
    }

    #[test]
    fn test_synthesize_request_custom_settings_serialize() {
        let settings = VoiceSettings {
            stability: 0.5,
            similarity_boost: 0.9,
            style: 0.0,
            use_speaker_boost: false,
        };
        let request = SynthesizeRequest::new("Hello").with_settings(settings.clone());

        assert_eq!(request.voice_settings, settings);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["voice_settings"]["stability"], 0.5);
        assert_eq!(body["voice_settings"]["use_speaker_boost"], false);
    }

    #[test]
    fn test_voices_response_deserialize() {
        let json = r#"{
            "voices": [
                {"voice_id": "21m00Tcm4TlvDq8ikWAM", "name": "Rachel", "category": "premade"},
                {"voice_id": "xyz", "name": "Custom"}
            ]
        }"#;

        let response: VoicesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.voices.len(), 2);
        assert_eq!(response.voices[0].name, "Rachel");
        assert_eq!(response.voices[1].category, None);
    }
}
