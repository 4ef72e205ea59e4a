//! tts-smoke: end-to-end smoke test for a remote text-to-speech service.
//!
//! This crate provides a command-line driver that submits one text to an
//! ElevenLabs-compatible TTS server, writes the synthesized audio to a WAV
//! file, and reports completion.

pub mod audio;
pub mod backend;
pub mod cli;
pub mod driver;
pub mod engine;
pub mod text;
