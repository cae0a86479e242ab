use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Comparison key for names: trimmed, lowercased, accents stripped.
///
/// "Évoli", " evoli " and "EVOLI" all map to "evoli". Punctuation and inner
/// spacing are kept ("M. Mime" stays distinct from "Mime").
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
