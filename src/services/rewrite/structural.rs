// Structural Rewriter
// Pattern-based clause surgery: filler-that removal, a deliberately narrow
// passive-to-active rewrite, there-is promotion, clause reordering, and the
// possessive transform. No syntactic parsing happens here.

use rand::Rng;
use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::services::text_processor::{capitalize_first, count_words};

pub const THERE_IS_MIN_CREATIVITY: f64 = 0.4;
pub const REORDER_MIN_CREATIVITY: f64 = 0.35;
pub const REORDER_MIN_CLAUSE_WORDS: usize = 3;
pub const POSSESSIVE_BASE_PROB: f64 = 0.35;
pub const POSSESSIVE_CREATIVITY_SCALE: f64 = 0.3;

fn filler_that_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(say|says|said|saying|believe|believes|believed|believing|think|thinks|thought|thinking|feel|feels|felt|feeling|argue|argues|argued|arguing|note|notes|noted|noting)\s+that\b",
        )
        .expect("filler that regex")
    })
}

fn passive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"\b(?:was|were|is|are|been|being)\s+([A-Za-z]+)ed\s+by\s+([A-Z][A-Za-z'-]*(?:\s+[A-Z][A-Za-z'-]*)*)",
        )
        .expect("passive regex")
    })
}

fn there_is_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^There\s+(?:is|are)\s+(.+)$").expect("there is regex"))
}

fn reorder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(.+),\s+(because|when|if|although)\s+(.+?)([.!?]+)?$")
            .expect("reorder regex")
    })
}

fn possessive_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bthe\s+([a-z]+)\s+of\s+([a-z]+)\b").expect("possessive regex"))
}

/// Drop the "that" after cognition/reporting verbs; the verb stays.
pub fn remove_filler_that(sentence: &str) -> String {
    filler_that_re().replace_all(sentence, "$1").to_string()
}

/// Rewrite the literal shape `<be> <verb>ed by <Capitalized Agent>` to
/// `<Agent> <verb-root>`. Fires at most once; passives without a capitalized
/// agent phrase are left alone.
pub fn passive_to_active(sentence: &str) -> String {
    passive_re().replace(sentence, "$2 $1").to_string()
}

/// `There is/are <clause>` becomes the capitalized clause. Only fires above
/// the creativity gate.
pub fn promote_there_is(sentence: &str, creativity: f64) -> String {
    if creativity <= THERE_IS_MIN_CREATIVITY {
        return sentence.to_string();
    }
    match there_is_re().captures(sentence) {
        Some(caps) => capitalize_first(&caps[1]),
        None => sentence.to_string(),
    }
}

/// Lowercase the leading capital of a demoted main clause, unless the word
/// looks like an acronym or initial ("NASA", "I").
fn demote_leading_capital(clause: &str) -> String {
    let mut chars = clause.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let second_is_lower = chars.next().map(|c| c.is_lowercase()).unwrap_or(false);
    if first.is_uppercase() && second_is_lower {
        first.to_lowercase().collect::<String>() + &clause[first.len_utf8()..]
    } else {
        clause.to_string()
    }
}

/// `<main>, <subordinator> <clause>` becomes
/// `<Subordinator> <clause>, <main>` when the trailing clause carries at
/// least `REORDER_MIN_CLAUSE_WORDS` words.
pub fn reorder_clauses(sentence: &str, creativity: f64) -> String {
    if creativity <= REORDER_MIN_CREATIVITY {
        return sentence.to_string();
    }
    let Some(caps) = reorder_re().captures(sentence) else {
        return sentence.to_string();
    };
    let main = &caps[1];
    let subordinator = &caps[2];
    let clause = &caps[3];
    let terminator = caps.get(4).map(|m| m.as_str()).unwrap_or("");
    if count_words(clause) < REORDER_MIN_CLAUSE_WORDS {
        return sentence.to_string();
    }
    format!(
        "{} {}, {}{}",
        capitalize_first(subordinator),
        clause,
        demote_leading_capital(main),
        terminator
    )
}

/// `the <noun> of <owner>` becomes `<owner>'s <noun>`, decided independently
/// per match with probability
/// `POSSESSIVE_BASE_PROB + POSSESSIVE_CREATIVITY_SCALE * creativity`.
pub fn apply_possessive<R: Rng>(sentence: &str, creativity: f64, rng: &mut R) -> String {
    let prob = POSSESSIVE_BASE_PROB + POSSESSIVE_CREATIVITY_SCALE * creativity;
    possessive_re()
        .replace_all(sentence, |caps: &Captures| {
            if rng.gen_bool(prob) {
                format!("{}'s {}", &caps[2], &caps[1])
            } else {
                caps[0].to_string()
            }
        })
        .to_string()
}
