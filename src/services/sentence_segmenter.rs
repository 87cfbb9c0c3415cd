// Sentence Segmenter Service
// Splits text into paragraphs and sentences and reassembles them

use regex::Regex;
use std::sync::OnceLock;

fn paragraph_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n\s*\n").expect("paragraph break regex"))
}

fn sentence_end_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([.!?]+)\s+").expect("sentence end regex"))
}

/// Split text into paragraphs on runs of two-or-more newlines. Empty runs
/// between breaks are dropped.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![];
    }
    paragraph_break_re()
        .split(text)
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}

/// Rejoin paragraphs with exactly one blank line between them.
pub fn join_paragraphs(paragraphs: &[String]) -> String {
    paragraphs.join("\n\n")
}

/// Split a paragraph into sentences. Terminal punctuation runs stay attached
/// to the preceding sentence; a paragraph without any boundary is one
/// sentence. An empty or whitespace-only paragraph comes back unchanged.
pub fn split_sentences(paragraph: &str) -> Vec<String> {
    if paragraph.trim().is_empty() {
        return vec![paragraph.to_string()];
    }

    // No lookbehind in the regex crate: mark boundaries, then split on the
    // marker so the punctuation survives.
    let marked = sentence_end_re().replace_all(paragraph, "$1\x00");
    marked
        .split('\x00')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Rejoin sentences with single spaces.
pub fn join_sentences(sentences: &[String]) -> String {
    sentences.join(" ")
}
