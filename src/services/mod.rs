// Prosemask Core Services

pub mod detection;
pub mod lexicon;
pub mod rewrite;
pub mod sentence_segmenter;
pub mod text_processor;

pub use detection::scan;
pub use rewrite::{rewrite, rewrite_seeded, rewrite_with_rng};
