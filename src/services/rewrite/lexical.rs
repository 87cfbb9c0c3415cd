// Lexical Rewriter
// Phrase substitution, word simplification, and probabilistic synonym
// selection. All replacements are meaning-preserving at the word level and
// keep the source token's case pattern.

use rand::Rng;
use regex::Captures;

use crate::services::lexicon::{is_stopword, phrase_patterns, simplification_map, synonym_map};
use crate::services::text_processor::{apply_case_pattern, is_capitalized, word_re};

pub const SYNONYM_BASE_PROB: f64 = 0.72;
pub const SYNONYM_CREATIVITY_SCALE: f64 = 0.25;

/// Apply the phrase table in its fixed order. Each pattern replaces all of
/// its matches; surrounding text keeps its case.
pub fn swap_phrases(sentence: &str) -> String {
    let mut s = sentence.to_string();
    for (re, replacement) in phrase_patterns() {
        if re.is_match(&s) {
            s = re.replace_all(&s, *replacement).to_string();
        }
    }
    s
}

/// Replace formal words with their plain counterparts, whole-word and
/// case-insensitively.
pub fn simplify_words(sentence: &str) -> String {
    word_re()
        .replace_all(sentence, |caps: &Captures| {
            let token = &caps[0];
            match simplification_map().get(token.to_lowercase().as_str()) {
                Some(plain) => apply_case_pattern(token, plain),
                None => token.to_string(),
            }
        })
        .to_string()
}

/// A token qualifies for synonym substitution when it is purely alphabetic
/// (internal hyphens/apostrophes allowed), is not a stopword, and is not a
/// capitalized word mid-sentence (the proper-noun heuristic).
fn eligible_for_synonym(token: &str, at_sentence_start: bool) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_alphabetic() {
        return false;
    }
    if !token
        .chars()
        .all(|c| c.is_alphabetic() || c == '\'' || c == '-')
    {
        return false;
    }
    if is_stopword(token) {
        return false;
    }
    if is_capitalized(token) && !at_sentence_start {
        return false;
    }
    true
}

/// Swap eligible tokens for a uniformly chosen synonym with probability
/// `SYNONYM_BASE_PROB + SYNONYM_CREATIVITY_SCALE * creativity`. Decisions are
/// independent per occurrence.
pub fn substitute_synonyms<R: Rng>(sentence: &str, creativity: f64, rng: &mut R) -> String {
    let prob = SYNONYM_BASE_PROB + SYNONYM_CREATIVITY_SCALE * creativity;
    let mut first_token = true;

    word_re()
        .replace_all(sentence, |caps: &Captures| {
            let token = &caps[0];
            let at_start = std::mem::take(&mut first_token);
            if !eligible_for_synonym(token, at_start) {
                return token.to_string();
            }
            let Some(alternatives) = synonym_map().get(token.to_lowercase().as_str()) else {
                return token.to_string();
            };
            if !rng.gen_bool(prob) {
                return token.to_string();
            }
            let pick = alternatives[rng.gen_range(0..alternatives.len())];
            apply_case_pattern(token, pick)
        })
        .to_string()
}
