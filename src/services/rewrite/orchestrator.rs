// Rewrite Orchestrator
// Sequences the lexical, structural, and compositional transforms per
// sentence and per paragraph under a hard word cap.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::models::RewriteConfig;
use crate::services::rewrite::composition::{
    soften_absolutes, strip_stock_opener, vary_punctuation, weave_lengths,
};
use crate::services::rewrite::lexical::{simplify_words, substitute_synonyms, swap_phrases};
use crate::services::rewrite::structural::{
    apply_possessive, passive_to_active, promote_there_is, remove_filler_that, reorder_clauses,
};
use crate::services::sentence_segmenter::{
    join_paragraphs, join_sentences, split_paragraphs, split_sentences,
};
use crate::services::text_processor::{cap_words, normalize_whitespace, tidy_paragraph, tidy_sentence};

/// Longest run of text allowed without a paragraph break; the merge step can
/// otherwise produce runaway sentences.
pub const MAX_RUN_CHARS: usize = 220;

/// Rewrite with ambient randomness. Not idempotent: rerunning on its own
/// output generally differs.
pub fn rewrite(text: &str, config: &RewriteConfig) -> String {
    rewrite_with_rng(text, config, &mut rand::thread_rng())
}

/// Rewrite with a deterministic seed; identical seed and input give
/// identical output.
pub fn rewrite_seeded(text: &str, config: &RewriteConfig, seed: u64) -> String {
    rewrite_with_rng(text, config, &mut StdRng::seed_from_u64(seed))
}

/// Rewrite with a caller-supplied random source.
pub fn rewrite_with_rng<R: Rng>(text: &str, config: &RewriteConfig, rng: &mut R) -> String {
    let creativity = config.clamped_creativity();

    // The cap runs before any pattern matching; it bounds worst-case regex
    // work on pathological input.
    let capped = cap_words(text, config.effective_word_cap());
    let normalized = normalize_whitespace(&capped);
    if normalized.is_empty() {
        return String::new();
    }

    let paragraphs = split_paragraphs(&normalized);
    debug!(
        paragraphs = paragraphs.len(),
        creativity, "rewrite segmented input"
    );

    let rewritten: Vec<String> = paragraphs
        .iter()
        .map(|p| rewrite_paragraph(p, creativity, rng))
        .collect();

    break_long_runs(&join_paragraphs(&rewritten))
}

fn rewrite_paragraph<R: Rng>(paragraph: &str, creativity: f64, rng: &mut R) -> String {
    let sentences = split_sentences(paragraph);
    let woven = weave_lengths(&sentences);
    let rewritten: Vec<String> = woven
        .iter()
        .map(|s| rewrite_sentence(s, creativity, rng))
        .collect();
    tidy_paragraph(&join_sentences(&rewritten))
}

fn rewrite_sentence<R: Rng>(sentence: &str, creativity: f64, rng: &mut R) -> String {
    let s = strip_stock_opener(sentence);
    let s = swap_phrases(&s);
    let s = simplify_words(&s);
    let s = substitute_synonyms(&s, creativity, rng);
    let s = remove_filler_that(&s);
    let s = passive_to_active(&s);
    let s = promote_there_is(&s, creativity);
    let s = reorder_clauses(&s, creativity);
    let s = apply_possessive(&s, creativity, rng);
    let s = vary_punctuation(&s, creativity, rng);
    let s = soften_absolutes(&s, creativity, rng);
    tidy_sentence(&s)
}

/// Insert a paragraph break after the first terminator run past
/// `MAX_RUN_CHARS` characters without one.
fn break_long_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut run = 0usize;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch == '\n' {
            run = 0;
            continue;
        }
        run += 1;
        if run > MAX_RUN_CHARS && matches!(ch, '.' | '!' | '?') {
            while let Some(&next) = chars.peek() {
                if matches!(next, '.' | '!' | '?') {
                    out.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            if chars.peek() == Some(&' ') {
                chars.next();
                out.push_str("\n\n");
                run = 0;
            }
        }
    }
    out
}
