//! End-to-end smoke test against the TTS service.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::backend::Backend;
use crate::engine::{TtsEngine, TtsError};

/// Errors that can occur while running the smoke test.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error(transparent)]
    Synthesis(#[from] TtsError),

    #[error("Failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// One end-to-end invocation: synthesize a text, write the WAV, report.
///
/// Defaults match the historical smoke-test literals; both the text and the
/// output path can be overridden.
pub struct SmokeTest {
    text: String,
    output: PathBuf,
    voice_id: Option<String>,
}

impl SmokeTest {
    /// Text synthesized when none is supplied.
    pub const DEFAULT_TEXT: &'static str = "Hello, this is a test of the Tortoise-TTS system.";

    /// Output path written when none is supplied.
    pub const DEFAULT_OUTPUT: &'static str = "output.wav";

    /// Create a smoke test with the default text and output path.
    pub fn new() -> Self {
        Self {
            text: Self::DEFAULT_TEXT.to_string(),
            output: PathBuf::from(Self::DEFAULT_OUTPUT),
            voice_id: None,
        }
    }

    /// Set the text to synthesize.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the voice to synthesize with.
    pub fn with_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = Some(voice_id.into());
        self
    }

    /// The text this run will synthesize.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The path this run will write.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Run the smoke test, reporting completion on stdout.
    pub fn run<B: Backend>(&self, engine: &TtsEngine<B>) -> Result<(), DriverError> {
        self.run_to(engine, &mut io::stdout())
    }

    /// Run the smoke test, reporting completion to the given sink.
    ///
    /// The completion notice is a single line naming the output file and is
    /// only written after a successful synthesis and file write; any failure
    /// before that point returns without output. An existing file at the
    /// output path is overwritten.
    pub fn run_to<B, W>(&self, engine: &TtsEngine<B>, notice: &mut W) -> Result<(), DriverError>
    where
        B: Backend,
        W: Write,
    {
        let audio = engine.synthesize(&self.text, self.voice_id.clone())?;

        fs::write(&self.output, &audio).map_err(|source| DriverError::WriteOutput {
            path: self.output.clone(),
            source,
        })?;

        writeln!(
            notice,
            "Speech synthesis complete. Check the {} file.",
            self.output.display()
        )?;

        Ok(())
    }
}

impl Default for SmokeTest {
    fn default() -> Self {
        Self::new()
    }
}
