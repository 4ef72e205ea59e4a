//! Sentence-aware text chunking.

/// Maximum characters per synthesis request, chosen to stay inside the
/// service's per-request limits.
pub const DEFAULT_CHUNK_CHARS: usize = 500;

/// Split text into chunks of at most `max_chars` characters, preferring to
/// cut just after the last sentence end (`. `, `! `, `? `) inside each
/// window.
///
/// Falls back to a hard cut when a window contains no sentence end.
/// Whitespace-only chunks are dropped, so empty input yields no chunks.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text.len() {
        // Byte offset just past the window's last char.
        let window_end = text[start..]
            .char_indices()
            .nth(max_chars)
            .map_or(text.len(), |(offset, _)| start + offset);
        let window = &text[start..window_end];

        let last_sentence = [". ", "! ", "? "]
            .iter()
            .filter_map(|pat| window.rfind(pat))
            .max();

        // Cut after the punctuation when a sentence end exists in the window.
        let end = match last_sentence {
            Some(offset) if offset > 0 => start + offset + 1,
            _ => window_end,
        };

        let chunk = &text[start..end];
        if !chunk.trim().is_empty() {
            chunks.push(chunk.to_string());
        }
        start = end;
    }

    chunks
}
