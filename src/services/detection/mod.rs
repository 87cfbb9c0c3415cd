// Detection Module
// Heuristic AI-likelihood scoring organized into specialized submodules:
// - features: per-sentence statistical surface metrics
// - aggregation: document-level score, cue threshold, verdict band

pub mod aggregation;
pub mod features;

pub use aggregation::scan;
pub use features::{cue_strength, extract, SentenceFeatures};
