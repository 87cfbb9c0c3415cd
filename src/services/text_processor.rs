// Text Processing Service
// Normalization, tokenization, word capping, and case/tidy utilities shared
// by the rewrite pipeline and the scanner

use regex::Regex;
use std::sync::OnceLock;

/// Word-like token: letter/digit followed by letters, digits, apostrophes,
/// hyphens.
pub fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\p{L}\p{N}][\p{L}\p{N}'-]*").expect("word regex"))
}

fn space_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t\x0B\x0C]+").expect("space run regex"))
}

fn punct_gap_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+([,.;:!?])").expect("punct gap regex"))
}

fn sentence_start_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([.!?]+\s+)(\p{Ll})").expect("sentence start regex"))
}

/// Normalize quotes, spaces, and line endings so downstream patterns see
/// plain ASCII punctuation. Blank lines (paragraph boundaries) survive.
pub fn normalize_whitespace(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut s = text
        .replace('\u{201c}', "\"")
        .replace('\u{201d}', "\"")
        .replace('\u{2018}', "'")
        .replace('\u{2019}', "'");

    s = s.replace('\u{3000}', " ").replace('\u{00a0}', " ");
    s = s.replace("\r\n", "\n").replace('\r', "\n");
    s = space_run_re().replace_all(&s, " ").to_string();

    s.lines()
        .map(|ln| ln.trim())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Count word-like tokens.
pub fn count_words(text: &str) -> usize {
    word_re().find_iter(text).count()
}

/// Truncate to at most `cap` whole words. Never cuts inside a word; text up
/// to and including the final kept word is preserved verbatim.
pub fn cap_words(text: &str, cap: usize) -> String {
    let cap = cap.max(1);
    let mut end = None;
    for (idx, m) in word_re().find_iter(text).enumerate() {
        if idx + 1 == cap {
            end = Some(m.end());
        } else if idx + 1 > cap {
            return text[..end.unwrap_or(0)].to_string();
        }
    }
    text.to_string()
}

/// True for tokens written entirely in uppercase letters.
pub fn is_all_caps(token: &str) -> bool {
    let mut saw_alpha = false;
    for ch in token.chars() {
        if ch.is_alphabetic() {
            if ch.is_lowercase() {
                return false;
            }
            saw_alpha = true;
        }
    }
    saw_alpha && token.chars().count() > 1
}

/// True when the first character is an uppercase letter.
pub fn is_capitalized(token: &str) -> bool {
    token.chars().next().map(|c| c.is_uppercase()).unwrap_or(false)
}

/// Re-apply the case pattern of `source` to `replacement`: ALL-CAPS stays
/// all-caps, leading capital stays a leading capital, anything else passes
/// through unchanged.
pub fn apply_case_pattern(source: &str, replacement: &str) -> String {
    if is_all_caps(source) {
        replacement.to_uppercase()
    } else if is_capitalized(source) {
        capitalize_first(replacement)
    } else {
        replacement.to_string()
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Fix spacing inside a single rewritten sentence: no space before
/// punctuation, single spaces everywhere else.
pub fn tidy_sentence(sentence: &str) -> String {
    let s = space_run_re().replace_all(sentence, " ");
    punct_gap_re().replace_all(&s, "$1").trim().to_string()
}

/// Paragraph-level cleanup after sentences are rejoined: spacing fixes plus
/// re-capitalization of sentence-initial letters.
pub fn tidy_paragraph(paragraph: &str) -> String {
    let s = tidy_sentence(paragraph);
    let s = sentence_start_re().replace_all(&s, |caps: &regex::Captures| {
        format!("{}{}", &caps[1], caps[2].to_uppercase())
    });
    capitalize_first(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace_folds_quotes_and_tabs() {
        let input = "He said \u{201c}hi\u{201d}.\tOk.\r\n\r\nNext\u{00a0}para";
        let out = normalize_whitespace(input);
        assert_eq!(out, "He said \"hi\". Ok.\n\nNext para");
    }

    #[test]
    fn test_cap_words_never_splits_a_word() {
        let text = "one two three four five";
        assert_eq!(cap_words(text, 3), "one two three");
        assert_eq!(cap_words(text, 99), text);
        assert_eq!(count_words(&cap_words(text, 2)), 2);
    }

    #[test]
    fn test_cap_words_keeps_punctuation_inside_kept_span() {
        let text = "First, second. Third fourth.";
        assert_eq!(cap_words(text, 3), "First, second. Third");
    }

    #[test]
    fn test_apply_case_pattern() {
        assert_eq!(apply_case_pattern("UTILIZE", "use"), "USE");
        assert_eq!(apply_case_pattern("Utilize", "use"), "Use");
        assert_eq!(apply_case_pattern("utilize", "use"), "use");
    }

    #[test]
    fn test_tidy_paragraph_recapitalizes() {
        let out = tidy_paragraph("the end came . later, more");
        assert_eq!(out, "The end came. Later, more");
    }

    #[test]
    fn test_is_all_caps_ignores_single_letters() {
        assert!(is_all_caps("NASA"));
        assert!(!is_all_caps("A"));
        assert!(!is_all_caps("NaSA"));
    }
}
