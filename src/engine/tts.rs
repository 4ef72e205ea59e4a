//! TTS engine implementation.

use crate::audio::{AudioError, concat_wav};
use crate::backend::{Backend, BackendError, SynthesizeRequest, Voice};
use crate::text::{DEFAULT_CHUNK_CHARS, chunk_text, cleanup_for_audio};

use thiserror::Error;

/// Errors that can occur during synthesis.
#[derive(Error, Debug)]
pub enum TtsError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),
}

/// Orchestrates one synthesis pass: cleanup, chunking, one service call per
/// chunk, and concatenation of the results.
pub struct TtsEngine<B: Backend> {
    backend: B,
    chunk_chars: usize,
}

impl<B: Backend> TtsEngine<B> {
    /// Create an engine with the default chunk size.
    pub fn new(backend: B) -> Self {
        Self::with_chunk_chars(backend, DEFAULT_CHUNK_CHARS)
    }

    /// Create an engine with a custom chunk size.
    pub fn with_chunk_chars(backend: B, chunk_chars: usize) -> Self {
        Self {
            backend,
            chunk_chars,
        }
    }

    /// Synthesize speech from text, returning a single WAV buffer.
    ///
    /// Text that cleans down to nothing produces no chunks and surfaces as
    /// [`AudioError::Empty`]; anything the service rejects propagates as a
    /// [`BackendError`].
    pub fn synthesize(&self, text: &str, voice_id: Option<String>) -> Result<Vec<u8>, TtsError> {
        let cleaned = cleanup_for_audio(text);
        let chunks = chunk_text(&cleaned, self.chunk_chars);

        let mut parts = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let mut request = SynthesizeRequest::new(chunk);
            if let Some(ref id) = voice_id {
                request = request.with_voice(id.clone());
            }
            parts.push(self.backend.synthesize(&request)?);
        }

        Ok(concat_wav(&parts)?)
    }

    /// List the voices available on the service.
    pub fn list_voices(&self) -> Result<Vec<Voice>, TtsError> {
        let response = self.backend.list_voices()?;
        Ok(response.voices)
    }
}
