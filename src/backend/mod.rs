//! Communication with the TTS service.
//!
//! Provides the trait describing the external speech-synthesis collaborator
//! and the HTTP implementation that talks to an ElevenLabs-compatible server.

mod client;
mod types;

pub use client::{API_KEY_VAR, HttpBackend};
pub use types::{
    BackendError, DEFAULT_VOICE_ID, SynthesizeRequest, Voice, VoiceSettings, VoicesResponse,
};

/// Trait for TTS service communication.
///
/// This trait abstracts the HTTP communication with the synthesis server,
/// allowing for mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Backend: Send + Sync {
    /// Synthesize speech from one chunk of text.
    ///
    /// # Arguments
    /// * `request` - Synthesis request parameters
    ///
    /// # Returns
    /// Raw WAV audio data
    fn synthesize(&self, request: &SynthesizeRequest) -> Result<Vec<u8>, BackendError>;

    /// List the voices available on the service.
    fn list_voices(&self) -> Result<VoicesResponse, BackendError>;
}

/// Create a service client for the given base URL, keyed from the environment.
pub fn create_backend(base_url: &str) -> Result<HttpBackend, BackendError> {
    HttpBackend::from_env(base_url)
}
