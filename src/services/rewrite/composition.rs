// Composition Normalizer
// Paragraph-level rhythm work: weaving sentence lengths, varying
// punctuation, hedging absolutes, and stripping stock openers.

use rand::Rng;
use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::services::lexicon::{hedge_map, match_stock_opener};
use crate::services::text_processor::{
    apply_case_pattern, capitalize_first, count_words, tidy_sentence, word_re,
};

pub const LONG_SENTENCE_TOKENS: usize = 28;
pub const SHORT_SENTENCE_TOKENS: usize = 6;
pub const DASH_BASE_PROB: f64 = 0.25;
pub const DASH_CREATIVITY_SCALE: f64 = 0.4;
pub const COMMA_DROP_BASE_PROB: f64 = 0.2;
pub const COMMA_DROP_CREATIVITY_SCALE: f64 = 0.3;
pub const HEDGE_BASE_PROB: f64 = 0.2;
pub const HEDGE_CREATIVITY_SCALE: f64 = 0.7;

/// Conjunctions a long sentence may be split at.
const SPLIT_CONJUNCTIONS: &[&str] = &[
    "and", "but", "because", "which", "so", "although", "when", "if",
];

fn which_who_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",\s+(which|who)\b").expect("which who regex"))
}

fn comma_and_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",\s+and\b").expect("comma and regex"))
}

fn ends_with_terminator(s: &str) -> bool {
    s.trim_end()
        .chars()
        .last()
        .map(|c| matches!(c, '.' | '!' | '?'))
        .unwrap_or(false)
}

fn close_sentence(fragment: &str) -> String {
    let fragment = fragment.trim().trim_end_matches(',').to_string();
    if ends_with_terminator(&fragment) {
        fragment
    } else {
        fragment + "."
    }
}

/// Split one overlong sentence into two: at the first comma, else before the
/// first listed conjunction, else at the character midpoint snapped to
/// whitespace so no word is cut.
fn split_long_sentence(sentence: &str) -> Option<(String, String)> {
    if let Some(idx) = sentence.find(',') {
        if idx > 0 {
            let left = &sentence[..idx];
            let right = sentence[idx + 1..].trim_start();
            if !left.trim().is_empty() && !right.is_empty() {
                return Some((close_sentence(left), capitalize_first(right)));
            }
        }
    }

    for m in word_re().find_iter(sentence) {
        if m.start() == 0 {
            continue;
        }
        if SPLIT_CONJUNCTIONS.contains(&m.as_str().to_lowercase().as_str()) {
            let left = sentence[..m.start()].trim_end();
            let right = &sentence[m.start()..];
            if !left.is_empty() && !right.trim().is_empty() {
                return Some((close_sentence(left), capitalize_first(right)));
            }
        }
    }

    // Character midpoint, snapped to the nearest following whitespace.
    let char_count = sentence.chars().count();
    let mid_byte = sentence
        .char_indices()
        .nth(char_count / 2)
        .map(|(i, _)| i)?;
    let split_at = sentence[mid_byte..]
        .find(char::is_whitespace)
        .map(|off| mid_byte + off)
        .or_else(|| sentence[..mid_byte].rfind(char::is_whitespace))?;
    let left = sentence[..split_at].trim_end();
    let right = sentence[split_at..].trim_start();
    if left.is_empty() || right.is_empty() {
        return None;
    }
    Some((close_sentence(left), capitalize_first(right)))
}

/// Weave the sentence lengths of a paragraph: split sentences past
/// `LONG_SENTENCE_TOKENS`, merge sentences under `SHORT_SENTENCE_TOKENS`
/// into their predecessor. The first sentence never merges backward.
pub fn weave_lengths(sentences: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for sentence in sentences {
        let tokens = count_words(sentence);
        if tokens > LONG_SENTENCE_TOKENS {
            if let Some((left, right)) = split_long_sentence(sentence) {
                out.push(left);
                out.push(right);
                continue;
            }
            out.push(sentence.clone());
        } else if tokens < SHORT_SENTENCE_TOKENS {
            match out.last_mut() {
                Some(prev) => {
                    prev.push(' ');
                    prev.push_str(sentence);
                    *prev = tidy_sentence(prev);
                }
                None => out.push(sentence.clone()),
            }
        } else {
            out.push(sentence.clone());
        }
    }
    out
}

/// Swap `, which`/`, who` for an em-dash clause and drop commas before
/// "and", each decided independently per occurrence.
pub fn vary_punctuation<R: Rng>(sentence: &str, creativity: f64, rng: &mut R) -> String {
    let dash_prob = DASH_BASE_PROB + DASH_CREATIVITY_SCALE * creativity;
    let comma_prob = COMMA_DROP_BASE_PROB + COMMA_DROP_CREATIVITY_SCALE * creativity;

    let s = which_who_re().replace_all(sentence, |caps: &Captures| {
        if rng.gen_bool(dash_prob) {
            format!(" \u{2014} {}", &caps[1])
        } else {
            caps[0].to_string()
        }
    });
    comma_and_re()
        .replace_all(&s, |caps: &Captures| {
            if rng.gen_bool(comma_prob) {
                " and".to_string()
            } else {
                caps[0].to_string()
            }
        })
        .to_string()
}

/// Soften absolute/superlative words with probability
/// `HEDGE_BASE_PROB + HEDGE_CREATIVITY_SCALE * creativity`, case preserved.
pub fn soften_absolutes<R: Rng>(sentence: &str, creativity: f64, rng: &mut R) -> String {
    let prob = HEDGE_BASE_PROB + HEDGE_CREATIVITY_SCALE * creativity;
    word_re()
        .replace_all(sentence, |caps: &Captures| {
            let token = &caps[0];
            match hedge_map().get(token.to_lowercase().as_str()) {
                Some(softened) if rng.gen_bool(prob) => apply_case_pattern(token, softened),
                _ => token.to_string(),
            }
        })
        .to_string()
}

/// Remove a leading discourse marker (and its trailing comma) and
/// re-capitalize what remains.
pub fn strip_stock_opener(sentence: &str) -> String {
    let Some(len) = match_stock_opener(sentence) else {
        return sentence.to_string();
    };
    let rest = sentence[len..]
        .trim_start()
        .trim_start_matches(',')
        .trim_start();
    if rest.is_empty() {
        return sentence.to_string();
    }
    capitalize_first(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_weave_splits_at_first_comma() {
        let long = format!("{}, {}.", words(16), words(15));
        let out = weave_lengths(&[long]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], format!("{}.", words(16)));
        assert_eq!(out[1], format!("Word {}.", words(14)));
    }

    #[test]
    fn test_weave_splits_before_conjunction() {
        let long = format!("{} because {}.", words(16), words(14));
        let out = weave_lengths(&[long]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], format!("{}.", words(16)));
        assert!(out[1].starts_with("Because"));
    }

    #[test]
    fn test_weave_midpoint_split_yields_two_sentences() {
        let long = format!("{}.", words(30));
        let out = weave_lengths(&[long]);
        assert_eq!(out.len(), 2);
        assert!(ends_with_terminator(&out[0]));
        // No word was cut in half.
        for piece in &out {
            for m in word_re().find_iter(piece) {
                assert_eq!(m.as_str().to_lowercase(), "word");
            }
        }
    }

    #[test]
    fn test_weave_merges_short_into_previous() {
        let sents = vec![
            "The committee reviewed the draft carefully today.".to_string(),
            "It passed.".to_string(),
        ];
        let out = weave_lengths(&sents);
        assert_eq!(out.len(), 1);
        assert!(out[0].ends_with("It passed."));
    }

    #[test]
    fn test_weave_first_short_sentence_stays() {
        let sents = vec![
            "It passed.".to_string(),
            "The committee reviewed the draft carefully today.".to_string(),
        ];
        let out = weave_lengths(&sents);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], "It passed.");
    }

    #[test]
    fn test_strip_stock_opener() {
        assert_eq!(
            strip_stock_opener("In conclusion, the results were clear."),
            "The results were clear."
        );
        assert_eq!(
            strip_stock_opener("Moreover the bridge held."),
            "The bridge held."
        );
        assert_eq!(
            strip_stock_opener("The bridge held."),
            "The bridge held."
        );
    }

    #[test]
    fn test_vary_punctuation_dash_form() {
        let s = "The engine, which ran hot, stalled.";
        let mut saw_dash = false;
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = vary_punctuation(s, 1.0, &mut rng);
            if out.contains("\u{2014} which") {
                saw_dash = true;
                assert!(!out.contains(", which"));
            }
        }
        assert!(saw_dash);
    }

    #[test]
    fn test_soften_absolutes_uses_hedge_table() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut softened = false;
        for _ in 0..64 {
            let out = soften_absolutes("This always proves it.", 1.0, &mut rng);
            if out != "This always proves it." {
                softened = true;
                assert!(out.contains("often") || out.contains("suggests"));
            }
        }
        assert!(softened);
    }
}
