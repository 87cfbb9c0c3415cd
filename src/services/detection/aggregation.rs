// Score Aggregator
// Folds per-sentence metrics into an aggregate 0-100 likelihood score,
// per-sentence cue strengths with a percentile threshold, and a verdict band.

use tracing::debug;

use crate::models::{DocumentStats, ScanResult, SentenceCue, Verdict};
use crate::services::detection::features::{cue_strength, extract};
use crate::services::sentence_segmenter::{split_paragraphs, split_sentences};
use crate::services::text_processor::normalize_whitespace;

// Score weights and pivots. Fixed design constants, not tunable per call.
const COV_WEIGHT: f64 = 45.0;
const COV_PIVOT: f64 = 0.28;
const UNIQ_WEIGHT: f64 = 25.0;
const UNIQ_PIVOT: f64 = 0.58;
const OPENER_WEIGHT: f64 = 10.0;
const OPENER_SCALE: f64 = 4.0;
const WORD_LEN_WEIGHT: f64 = 10.0;
const WORD_LEN_PIVOT: f64 = 5.6;
const WORD_LEN_RANGE: f64 = 2.2;
const COMMA_WEIGHT: f64 = 10.0;
const COMMA_PIVOT: f64 = 0.8;
const COMMA_RANGE: f64 = 2.0;

pub const CUE_THRESHOLD_PERCENTILE: f64 = 0.6;
pub const SINGLE_SENTENCE_THRESHOLD: f64 = 0.75;

// Verdict band edges over the aggregate score.
const VERDICT_MIXED_MIN: i32 = 40;
const VERDICT_AI_MIN: i32 = 71;

/// Estimate how machine-generated a text sounds from statistical surface
/// cues. Deterministic: identical input gives identical results.
pub fn scan(text: &str) -> ScanResult {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return empty_result();
    }

    let sentences: Vec<String> = split_paragraphs(&normalized)
        .iter()
        .flat_map(|p| split_sentences(p))
        .collect();
    if sentences.is_empty() {
        return empty_result();
    }

    let features: Vec<_> = sentences.iter().map(|s| extract(s)).collect();

    let lens: Vec<f64> = features.iter().map(|f| f.token_count as f64).collect();
    let mean_len = mean(&lens);
    let cov = if mean_len > 0.0 {
        std_dev(&lens) / mean_len
    } else {
        0.0
    };
    let uniq_avg = mean(&features.iter().map(|f| f.uniqueness).collect::<Vec<_>>());
    let avg_word_len = mean(&features.iter().map(|f| f.avg_token_len).collect::<Vec<_>>());
    let avg_commas = mean(&features.iter().map(|f| f.comma_count as f64).collect::<Vec<_>>());
    let opener_fraction =
        features.iter().filter(|f| f.has_stock_opener).count() as f64 / features.len() as f64;

    let raw = COV_WEIGHT * (COV_PIVOT - cov.min(COV_PIVOT)).max(0.0)
        + UNIQ_WEIGHT * (UNIQ_PIVOT - uniq_avg.min(UNIQ_PIVOT)).max(0.0)
        + OPENER_WEIGHT * (opener_fraction * OPENER_SCALE).min(1.0)
        + WORD_LEN_WEIGHT * ((avg_word_len - WORD_LEN_PIVOT) / WORD_LEN_RANGE).max(0.0)
        + COMMA_WEIGHT * ((avg_commas - COMMA_PIVOT) / COMMA_RANGE).max(0.0);

    let ai_score = raw.clamp(0.0, 100.0).round() as i32;
    debug!(
        sentences = sentences.len(),
        cov, uniq_avg, avg_word_len, avg_commas, opener_fraction, ai_score, "scan aggregated"
    );

    let strengths: Vec<f64> = features.iter().map(cue_strength).collect();
    let threshold = cue_threshold(&strengths);
    let per_sentence_cues: Vec<SentenceCue> = sentences
        .into_iter()
        .zip(strengths.iter())
        .map(|(sentence, &cue)| SentenceCue {
            sentence,
            cue_strength: cue,
            flagged: cue > threshold,
        })
        .collect();

    ScanResult {
        ai_score,
        human_score: 100 - ai_score,
        verdict: verdict_for(ai_score),
        per_sentence_cues,
        threshold,
        stats: DocumentStats {
            sentence_count: features.len(),
            mean_sentence_len: mean_len,
            len_variation: cov,
            mean_uniqueness: uniq_avg,
            mean_word_len: avg_word_len,
            mean_comma_count: avg_commas,
            opener_fraction,
        },
    }
}

fn empty_result() -> ScanResult {
    ScanResult {
        ai_score: 0,
        human_score: 100,
        verdict: Verdict::LikelyHuman,
        per_sentence_cues: vec![],
        threshold: 0.0,
        stats: DocumentStats::default(),
    }
}

fn verdict_for(ai_score: i32) -> Verdict {
    if ai_score >= VERDICT_AI_MIN {
        Verdict::LikelyAi
    } else if ai_score >= VERDICT_MIXED_MIN {
        Verdict::Mixed
    } else {
        Verdict::LikelyHuman
    }
}

/// 60th percentile of the cue-strength distribution, nearest-rank; a single
/// sentence falls back to the fixed default.
fn cue_threshold(strengths: &[f64]) -> f64 {
    if strengths.len() <= 1 {
        return SINGLE_SENTENCE_THRESHOLD;
    }
    let mut sorted = strengths.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let rank = (CUE_THRESHOLD_PERCENTILE * (sorted.len() - 1) as f64).floor() as usize;
    sorted[rank.min(sorted.len() - 1)]
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
