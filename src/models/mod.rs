// Prosemask Data Models
// Value objects exchanged with callers of the rewrite and scan operations

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============ Rewrite Configuration ============

pub const DEFAULT_CREATIVITY: f64 = 0.5;
pub const DEFAULT_WORD_CAP: usize = 1000;

fn default_creativity() -> f64 {
    DEFAULT_CREATIVITY
}

fn default_word_cap() -> usize {
    DEFAULT_WORD_CAP
}

/// Per-call rewrite settings. `creativity` is a [0,1] dial controlling how
/// aggressively substitutions and restructurings fire; `word_cap` bounds the
/// input before any pattern matching runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteConfig {
    #[serde(default = "default_creativity")]
    pub creativity: f64,
    #[serde(default = "default_word_cap")]
    pub word_cap: usize,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            creativity: DEFAULT_CREATIVITY,
            word_cap: DEFAULT_WORD_CAP,
        }
    }
}

impl RewriteConfig {
    /// Validating constructor. Direct struct construction stays possible;
    /// `rewrite` clamps defensively either way.
    pub fn new(creativity: f64, word_cap: usize) -> Result<Self, ConfigError> {
        if !creativity.is_finite() || !(0.0..=1.0).contains(&creativity) {
            return Err(ConfigError::InvalidCreativity { got: creativity });
        }
        if word_cap == 0 {
            return Err(ConfigError::InvalidWordCap);
        }
        Ok(Self {
            creativity,
            word_cap,
        })
    }

    /// Creativity clamped into [0,1]; NaN maps to 0.
    pub fn clamped_creativity(&self) -> f64 {
        if self.creativity.is_nan() {
            0.0
        } else {
            self.creativity.clamp(0.0, 1.0)
        }
    }

    /// Word cap with the zero case defused.
    pub fn effective_word_cap(&self) -> usize {
        self.word_cap.max(1)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("word cap must be greater than zero")]
    InvalidWordCap,
    #[error("creativity must be a finite value in [0, 1], got {got}")]
    InvalidCreativity { got: f64 },
}

// ============ Scan Result ============

/// Coarse band over the aggregate score, for callers that want a label
/// instead of a number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    LikelyHuman,
    Mixed,
    LikelyAi,
}

/// One scanned sentence with its cue strength. `flagged` is true iff the cue
/// strength exceeds the document threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceCue {
    pub sentence: String,
    pub cue_strength: f64,
    pub flagged: bool,
}

/// Document-level aggregates behind the score, exposed for transparency.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStats {
    pub sentence_count: usize,
    pub mean_sentence_len: f64,
    pub len_variation: f64,
    pub mean_uniqueness: f64,
    pub mean_word_len: f64,
    pub mean_comma_count: f64,
    pub opener_fraction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub ai_score: i32,
    pub human_score: i32,
    pub verdict: Verdict,
    pub per_sentence_cues: Vec<SentenceCue>,
    pub threshold: f64,
    pub stats: DocumentStats,
}
