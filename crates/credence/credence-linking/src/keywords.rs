//! Keyword normalization over the open attribute bag.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use credence_core::models::LedgerEntry;
use regex::Regex;

static NON_WORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").ok());

/// Generic transaction words that carry no identifying signal.
const STOPWORDS: &[&str] = &[
    "and", "for", "from", "the", "with", "you", "your", "paid", "payment", "transfer",
    "order", "received", "receive", "thanks", "thank", "myr",
];

/// Normalized tokens of every string-valued field in the entry's open bag.
pub fn entry_tokens(entry: &LedgerEntry, min_len: usize) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    for text in entry.attributes.text_fields() {
        tokens.extend(tokenize(text, min_len));
    }
    tokens
}

/// Case-fold, strip punctuation, split, and drop short tokens and stopwords.
pub fn tokenize(text: &str, min_len: usize) -> BTreeSet<String> {
    let Some(separator) = NON_WORD.as_ref() else {
        return BTreeSet::new();
    };
    let lowered = text.to_lowercase();
    separator
        .split(&lowered)
        .filter(|t| t.chars().count() >= min_len)
        .filter(|t| !STOPWORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Overlap coefficient `|A ∩ B| / min(|A|, |B|)`; 0.0 when either side is empty.
pub fn overlap(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let smaller = a.len().min(b.len());
    if smaller == 0 {
        return 0.0;
    }
    let shared = a.intersection(b).count();
    shared as f64 / smaller as f64
}
