// Prosemask
// Rewrites the lexical and structural surface of a text while preserving
// meaning, and independently estimates how machine-generated a text sounds
// from statistical surface cues. Both operations are pure, synchronous
// string transforms; the only nondeterminism is the injectable random
// source behind the probabilistic substitutions.

pub mod models;
pub mod services;

pub use models::{
    ConfigError, DocumentStats, RewriteConfig, ScanResult, SentenceCue, Verdict,
};
pub use services::detection::scan;
pub use services::rewrite::{rewrite, rewrite_seeded, rewrite_with_rng};
