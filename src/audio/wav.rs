//! WAV concatenation for chunked synthesis results.

use std::io::{Cursor, Read, Seek, Write};

use hound::{SampleFormat, WavReader, WavWriter};
use thiserror::Error;

/// Errors that can occur while merging audio chunks.
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("No audio chunks to concatenate")]
    Empty,

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("Mismatched WAV specs across chunks")]
    SpecMismatch,
}

/// Merge per-chunk WAV buffers into a single in-memory WAV.
///
/// All parts must share one [`hound::WavSpec`]. A single part is returned
/// untouched after a parse check; zero parts is an error.
pub fn concat_wav(parts: &[Vec<u8>]) -> Result<Vec<u8>, AudioError> {
    let first = parts.first().ok_or(AudioError::Empty)?;

    if parts.len() == 1 {
        WavReader::new(Cursor::new(first.as_slice()))?;
        return Ok(first.clone());
    }

    let mut reader = WavReader::new(Cursor::new(first.as_slice()))?;
    let spec = reader.spec();

    let mut out = Cursor::new(Vec::new());
    let mut writer = WavWriter::new(&mut out, spec)?;
    append_samples(&mut writer, &mut reader)?;

    for part in &parts[1..] {
        let mut reader = WavReader::new(Cursor::new(part.as_slice()))?;
        if reader.spec() != spec {
            return Err(AudioError::SpecMismatch);
        }
        append_samples(&mut writer, &mut reader)?;
    }

    writer.finalize()?;
    Ok(out.into_inner())
}

fn append_samples<W, R>(
    writer: &mut WavWriter<W>,
    reader: &mut WavReader<R>,
) -> Result<(), AudioError>
where
    W: Write + Seek,
    R: Read,
{
    match reader.spec().sample_format {
        SampleFormat::Int => {
            for sample in reader.samples::<i32>() {
                writer.write_sample(sample?)?;
            }
        }
        SampleFormat::Float => {
            for sample in reader.samples::<f32>() {
                writer.write_sample(sample?)?;
            }
        }
    }

    Ok(())
}
