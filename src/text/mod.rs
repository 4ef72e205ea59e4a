//! Text preparation for synthesis.
//!
//! Cleans up formatting that reads badly as audio and splits long input into
//! service-sized chunks at sentence boundaries.

mod chunk;
mod cleanup;

pub use chunk::{DEFAULT_CHUNK_CHARS, chunk_text};
pub use cleanup::cleanup_for_audio;
