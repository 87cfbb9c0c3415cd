// Feature Extractor
// Per-sentence statistical surface metrics feeding the score aggregator

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::services::lexicon::{match_stock_opener, stopword_set};
use crate::services::text_processor::word_re;

/// Suffixes stripped (one only, first match wins) by the crude stemmer used
/// to estimate lexical repetition.
const STEM_SUFFIXES: &[&str] = &["ment", "tion", "ing", "ed", "ly", "s"];

pub const CUE_LEN_SCALE: f64 = 25.0;
pub const CUE_WORD_LEN_PIVOT: f64 = 5.5;
pub const CUE_WORD_LEN_WEIGHT: f64 = 0.6;
pub const CUE_COMMA_MIN: usize = 2;
pub const CUE_COMMA_BONUS: f64 = 0.8;
pub const CUE_OPENER_BONUS: f64 = 1.2;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SentenceFeatures {
    pub token_count: usize,
    pub avg_token_len: f64,
    pub comma_count: usize,
    pub has_stock_opener: bool,
    pub uniqueness: f64,
}

fn stem(word: &str) -> String {
    let lower = word.to_lowercase();
    for suffix in STEM_SUFFIXES {
        if lower.len() > suffix.len() && lower.ends_with(suffix) {
            return lower[..lower.len() - suffix.len()].to_string();
        }
    }
    lower
}

/// Compute the surface metrics of one sentence. Ratios over empty sets take
/// safe defaults (uniqueness 1, average length 0).
pub fn extract(sentence: &str) -> SentenceFeatures {
    let tokens: Vec<&str> = word_re().find_iter(sentence).map(|m| m.as_str()).collect();
    let token_count = tokens.len();

    let avg_token_len = if token_count == 0 {
        0.0
    } else {
        tokens.iter().map(|t| t.chars().count()).sum::<usize>() as f64 / token_count as f64
    };

    let content_words: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|t| !stopword_set().contains(t.to_lowercase().as_str()))
        .collect();
    let uniqueness = if content_words.is_empty() {
        1.0
    } else {
        let stems: HashSet<String> = content_words.iter().map(|w| stem(w)).collect();
        stems.len() as f64 / content_words.len() as f64
    };

    SentenceFeatures {
        token_count,
        avg_token_len,
        comma_count: sentence.matches(',').count(),
        has_stock_opener: match_stock_opener(sentence).is_some(),
        uniqueness,
    }
}

/// Scalar estimate of how strongly a sentence exhibits machine-sounding
/// surface traits; used for highlighting, never clamped below zero twice.
pub fn cue_strength(features: &SentenceFeatures) -> f64 {
    let mut cue = (features.token_count as f64 / CUE_LEN_SCALE).max(0.0)
        + (features.avg_token_len - CUE_WORD_LEN_PIVOT) * CUE_WORD_LEN_WEIGHT;
    if features.comma_count > CUE_COMMA_MIN {
        cue += CUE_COMMA_BONUS;
    }
    if features.has_stock_opener {
        cue += CUE_OPENER_BONUS;
    }
    cue.max(0.0)
}
