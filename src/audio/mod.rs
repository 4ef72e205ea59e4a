//! Audio handling for synthesized speech.
//!
//! The service answers each chunk with its own WAV; this module merges those
//! into the single file the driver writes.

mod wav;

pub use wav::{AudioError, concat_wav};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

    fn mono_spec(sample_rate: u32) -> WavSpec {
        WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        }
    }

    fn wav_bytes(spec: WavSpec, samples: &[i16]) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        let mut writer = WavWriter::new(&mut out, spec).unwrap();
        for &sample in samples {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
        out.into_inner()
    }

    #[test]
    fn test_concat_empty_is_error() {
        let result = concat_wav(&[]);
        assert!(matches!(result.unwrap_err(), AudioError::Empty));
    }

    #[test]
    fn test_concat_single_part_passthrough() {
        let part = wav_bytes(mono_spec(22050), &[1, 2, 3]);
        let merged = concat_wav(std::slice::from_ref(&part)).unwrap();
        assert_eq!(merged, part);
    }

    #[test]
    fn test_concat_appends_samples_in_order() {
        let spec = mono_spec(22050);
        let a = wav_bytes(spec, &[1, 2, 3]);
        let b = wav_bytes(spec, &[4, 5]);

        let merged = concat_wav(&[a, b]).unwrap();

        let mut reader = WavReader::new(Cursor::new(merged.as_slice())).unwrap();
        assert_eq!(reader.spec(), spec);
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_concat_rejects_mismatched_specs() {
        let a = wav_bytes(mono_spec(22050), &[1, 2]);
        let b = wav_bytes(mono_spec(44100), &[3, 4]);

        let result = concat_wav(&[a, b]);
        assert!(matches!(result.unwrap_err(), AudioError::SpecMismatch));
    }

    #[test]
    fn test_concat_rejects_garbage_bytes() {
        let garbage = b"not a wav file at all".to_vec();
        let result = concat_wav(&[garbage]);
        assert!(matches!(result.unwrap_err(), AudioError::Wav(_)));
    }
}
