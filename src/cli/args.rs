//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

use crate::driver::SmokeTest;
use crate::text::DEFAULT_CHUNK_CHARS;

/// Smoke-test CLI for a remote text-to-speech service.
#[derive(Parser, Debug)]
#[command(name = "tts-smoke")]
#[command(about = "End-to-end smoke test for a remote text-to-speech service")]
#[command(version)]
pub struct Args {
    /// Text to synthesize
    #[arg(short, long, default_value = SmokeTest::DEFAULT_TEXT)]
    pub text: String,

    /// Output audio file
    #[arg(short, long, default_value = SmokeTest::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Voice id to synthesize with (service default when omitted)
    #[arg(long)]
    pub voice: Option<String>,

    /// TTS service base URL
    #[arg(long, default_value = "https://api.elevenlabs.io")]
    pub base_url: String,

    /// Maximum characters per synthesis request
    #[arg(long, default_value_t = DEFAULT_CHUNK_CHARS)]
    pub chunk_chars: usize,

    /// List the voices available on the service
    #[arg(long)]
    pub list_voices: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
