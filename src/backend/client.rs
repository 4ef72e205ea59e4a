//! HTTP client for the TTS service.

use super::Backend;
use super::types::{BackendError, DEFAULT_VOICE_ID, SynthesizeRequest, VoicesResponse};

/// Environment variable holding the service API key.
pub const API_KEY_VAR: &str = "ELEVENLABS_API_KEY";

/// HTTP-based TTS service client.
///
/// Speaks the ElevenLabs v1 API: synthesis is a POST per voice, the catalog
/// is a single GET, and every request is authenticated with the `xi-api-key`
/// header.
pub struct HttpBackend {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    /// Create a new client against the given base URL.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            api_key: api_key.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Create a client reading the API key from the environment.
    ///
    /// Fails with [`BackendError::MissingApiKey`] when `ELEVENLABS_API_KEY`
    /// is unset or empty.
    pub fn from_env(base_url: impl Into<String>) -> Result<Self, BackendError> {
        Self::from_env_var(base_url, API_KEY_VAR)
    }

    /// Create a client reading the API key from a specific variable.
    pub fn from_env_var(
        base_url: impl Into<String>,
        var: &str,
    ) -> Result<Self, BackendError> {
        let api_key = std::env::var(var)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(BackendError::MissingApiKey)?;

        Ok(Self::new(base_url, api_key))
    }

    /// Get the base URL for this client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Map a non-success response to a backend error, surfacing quota
    /// exhaustion distinctly.
    fn error_from_body(status: reqwest::StatusCode, body: String) -> BackendError {
        if body.contains("quota_exceeded") {
            return BackendError::QuotaExceeded;
        }

        BackendError::RequestFailed(format!("Status {status}: {body}"))
    }
}

impl Backend for HttpBackend {
    fn synthesize(&self, request: &SynthesizeRequest) -> Result<Vec<u8>, BackendError> {
        let voice_id = request.voice_id.as_deref().unwrap_or(DEFAULT_VOICE_ID);
        let url = format!("{}/v1/text-to-speech/{voice_id}", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .json(request)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Self::error_from_body(status, body));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    fn list_voices(&self) -> Result<VoicesResponse, BackendError> {
        let url = format!("{}/v1/voices", self.base_url);

        let response = self
            .client
            .get(&url)
            .header("xi-api-key", &self.api_key)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Self::error_from_body(status, body));
        }

        response
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}
