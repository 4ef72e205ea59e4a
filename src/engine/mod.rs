//! Synthesis orchestration.
//!
//! This module provides the engine that coordinates between the text
//! pipeline, the service backend, and the audio merge step.

mod tts;

pub use tts::{TtsEngine, TtsError};
