//! Text cleanup before synthesis.

use std::sync::LazyLock;

use regex::Regex;

static BOLD_ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.*?)\*\*\*").expect("valid regex"));
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("valid regex"));
static HEADERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#{1,6}\s+").expect("valid regex"));
static CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`{1,3}.*?`{1,3}").expect("valid regex"));
static TITLE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(Title:|Meditation:|Script:|Guide:).*\n").expect("valid regex"));
static INTRO_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(Introduction:).*\n").expect("valid regex"));
static SPECIAL: LazyLock<Regex> = LazyLock::new(|| Regex::new("[_~`#>]").expect("valid regex"));
static EXTRA_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+[.)]").expect("valid regex"));

/// Strip formatting and metadata that read badly as audio.
///
/// Removes markdown emphasis, headers, and code spans, drops known metadata
/// prefixes, collapses runs of blank lines, and skips leading lines that look
/// like notes or numbered instructions rather than content.
pub fn cleanup_for_audio(text: &str) -> String {
    let cleaned = BOLD_ITALIC.replace_all(text, "$1");
    let cleaned = BOLD.replace_all(&cleaned, "$1");
    let cleaned = ITALIC.replace_all(&cleaned, "$1");
    let cleaned = HEADERS.replace_all(&cleaned, "");
    let cleaned = CODE.replace_all(&cleaned, "");
    let cleaned = TITLE_PREFIX.replace(&cleaned, "");
    let cleaned = INTRO_PREFIX.replace(&cleaned, "");
    let cleaned = SPECIAL.replace_all(&cleaned, "");
    let cleaned = EXTRA_NEWLINES.replace_all(&cleaned, "\n\n");
    let cleaned = cleaned.trim();

    // Skip metadata-looking lines until the first meaningful one.
    let mut meaningful_content_started = false;
    let mut result = Vec::new();

    for line in cleaned.lines() {
        if !meaningful_content_started && line.trim().is_empty() {
            continue;
        }

        if !meaningful_content_started
            && (line.contains("NOTE:")
                || line.contains("DURATION:")
                || line.contains("TIME:")
                || NUMBERED.is_match(line))
        {
            continue;
        }

        meaningful_content_started = true;
        result.push(line);
    }

    result.join("\n")
}
