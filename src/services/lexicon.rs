// Lexicon Tables
// Static word/phrase tables behind every lexical and compositional rule.
// Loaded once, never mutated.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Formal word -> plain word, one-to-one. Matched whole-word,
/// case-insensitively; the source token's case pattern is re-applied.
const SIMPLIFICATIONS: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("utilizes", "uses"),
    ("utilized", "used"),
    ("utilization", "use"),
    ("leverage", "use"),
    ("leverages", "uses"),
    ("leveraged", "used"),
    ("commence", "begin"),
    ("commenced", "began"),
    ("facilitate", "help"),
    ("facilitates", "helps"),
    ("demonstrate", "show"),
    ("demonstrates", "shows"),
    ("demonstrated", "showed"),
    ("endeavor", "try"),
    ("ascertain", "learn"),
    ("obtain", "get"),
    ("obtained", "got"),
    ("purchase", "buy"),
    ("sufficient", "enough"),
    ("insufficient", "too little"),
    ("approximately", "about"),
    ("subsequently", "later"),
    ("consequently", "so"),
    ("nevertheless", "still"),
    ("furthermore", "also"),
    ("additionally", "also"),
    ("numerous", "many"),
    ("regarding", "about"),
    ("methodology", "method"),
    ("terminate", "end"),
    ("terminated", "ended"),
    ("necessitate", "require"),
    ("advantageous", "helpful"),
    ("expedite", "speed up"),
    ("optimal", "best"),
    ("ameliorate", "improve"),
];

/// Multi-word phrase rewrites, most specific first. Each pattern is applied
/// in this order, case-insensitively, across the whole sentence.
const PHRASE_PATTERNS: &[(&str, &str)] = &[
    ("due to the fact that", "because"),
    ("in spite of the fact that", "although"),
    ("at this point in time", "now"),
    ("in the event that", "if"),
    ("a significant number of", "many"),
    ("in close proximity to", "near"),
    ("has the ability to", "can"),
    ("have the ability to", "can"),
    ("with regard to", "about"),
    ("a wide range of", "many"),
    ("a majority of", "most"),
    ("on a daily basis", "daily"),
    ("in order to", "to"),
    ("is able to", "can"),
    ("are able to", "can"),
    ("prior to", "before"),
    ("subsequent to", "after"),
];

/// Headword -> alternatives. Substitution picks uniformly at random.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("important", &["key", "vital", "major"]),
    ("good", &["solid", "strong", "decent"]),
    ("bad", &["poor", "weak", "rough"]),
    ("big", &["large", "huge", "sizable"]),
    ("small", &["little", "minor", "compact"]),
    ("fast", &["quick", "rapid", "swift"]),
    ("slow", &["sluggish", "gradual", "unhurried"]),
    ("help", &["aid", "assist", "support"]),
    ("helps", &["aids", "assists", "supports"]),
    ("show", &["reveal", "display", "illustrate"]),
    ("shows", &["reveals", "displays", "illustrates"]),
    ("make", &["create", "build", "produce"]),
    ("makes", &["creates", "builds", "produces"]),
    ("begin", &["start", "open", "launch"]),
    ("end", &["finish", "close", "conclude"]),
    ("think", &["reckon", "figure", "believe"]),
    ("say", &["state", "mention", "note"]),
    ("says", &["states", "mentions", "notes"]),
    ("many", &["numerous", "several", "countless"]),
    ("new", &["fresh", "recent", "modern"]),
    ("old", &["aged", "dated", "longtime"]),
    ("hard", &["tough", "difficult", "tricky"]),
    ("easy", &["simple", "effortless", "painless"]),
    ("change", &["shift", "alter", "adjust"]),
    ("changes", &["shifts", "alters", "adjusts"]),
    ("problem", &["issue", "snag", "hurdle"]),
    ("problems", &["issues", "snags", "hurdles"]),
    ("result", &["outcome", "upshot", "effect"]),
    ("results", &["outcomes", "effects", "findings"]),
    ("idea", &["notion", "concept", "thought"]),
    ("ideas", &["notions", "concepts", "thoughts"]),
    ("clear", &["plain", "obvious", "evident"]),
    ("often", &["frequently", "regularly", "commonly"]),
    ("very", &["quite", "rather", "fairly"]),
    ("also", &["too", "likewise", "additionally"]),
];

/// Function words excluded from synonym substitution and from the scanner's
/// content-word set.
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "is", "it", "that",
    "this", "with", "as", "by", "from", "was", "were", "are", "be", "been", "has", "have", "had",
    "not", "no", "do", "does", "did", "will", "would", "could", "should", "can", "may", "might",
    "if", "then", "than", "so", "up", "out", "about", "into", "over", "after", "before", "between",
    "through", "just", "also", "very", "more", "most", "some", "any", "each", "every", "all",
    "both", "few", "other", "such", "only", "own", "same", "too", "how", "what", "which", "who",
    "when", "where", "why", "he", "she", "they", "we", "you", "i", "his", "her", "their", "our",
    "your", "its", "them", "him", "us", "me",
];

/// Absolute/superlative word -> softened counterpart.
const HEDGES: &[(&str, &str)] = &[
    ("always", "often"),
    ("never", "rarely"),
    ("proves", "suggests"),
    ("proven", "supported"),
    ("perfect", "strong"),
    ("perfectly", "well"),
    ("flawless", "polished"),
    ("flawlessly", "smoothly"),
    ("undeniable", "compelling"),
    ("undeniably", "arguably"),
    ("impossible", "unlikely"),
    ("certainly", "likely"),
    ("definitely", "probably"),
    ("absolutely", "largely"),
    ("completely", "largely"),
    ("totally", "mostly"),
    ("everyone", "most people"),
    ("nobody", "few people"),
    ("everything", "much"),
    ("nothing", "little"),
    ("guarantee", "expect"),
    ("guarantees", "expects"),
    ("guaranteed", "expected"),
    ("obviously", "apparently"),
];

/// Discourse-marker openers flagged as formality cues, most specific first.
const STOCK_OPENERS: &[&str] = &[
    "it is important to note that",
    "it's important to note that",
    "it is worth noting that",
    "at the end of the day",
    "first and foremost",
    "on the other hand",
    "needless to say",
    "as a result",
    "in conclusion",
    "in addition",
    "in summary",
    "in essence",
    "furthermore",
    "additionally",
    "consequently",
    "importantly",
    "ultimately",
    "therefore",
    "moreover",
    "notably",
    "overall",
    "in fact",
    "indeed",
];

pub fn simplification_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| SIMPLIFICATIONS.iter().copied().collect())
}

pub fn synonym_map() -> &'static HashMap<&'static str, &'static [&'static str]> {
    static MAP: OnceLock<HashMap<&'static str, &'static [&'static str]>> = OnceLock::new();
    MAP.get_or_init(|| SYNONYMS.iter().copied().collect())
}

/// Compiled phrase patterns in table order. Word-bounded and
/// case-insensitive.
pub fn phrase_patterns() -> &'static Vec<(Regex, &'static str)> {
    static PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        PHRASE_PATTERNS
            .iter()
            .map(|(pat, repl)| {
                let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(pat)))
                    .expect("phrase pattern regex");
                (re, *repl)
            })
            .collect()
    })
}

pub fn stopword_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOPWORDS.iter().copied().collect())
}

pub fn is_stopword(token: &str) -> bool {
    stopword_set().contains(token.to_lowercase().as_str())
}

pub fn hedge_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| HEDGES.iter().copied().collect())
}

pub fn stock_openers() -> &'static [&'static str] {
    STOCK_OPENERS
}

/// Byte length of the stock opener the sentence starts with, if any.
/// Case-insensitive; the opener must end at a word boundary.
pub fn match_stock_opener(sentence: &str) -> Option<usize> {
    let lowered = sentence.to_lowercase();
    for opener in STOCK_OPENERS {
        if lowered.starts_with(opener) {
            // Unicode case folding can shift byte lengths; only accept a
            // match that lands on a char boundary of the original text.
            if !sentence.is_char_boundary(opener.len()) {
                continue;
            }
            let boundary_ok = sentence[opener.len()..]
                .chars()
                .next()
                .map(|c| !c.is_alphanumeric())
                .unwrap_or(true);
            if boundary_ok {
                return Some(opener.len());
            }
        }
    }
    None
}
