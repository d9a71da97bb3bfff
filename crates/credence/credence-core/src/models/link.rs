use std::fmt;

use serde::{Deserialize, Serialize};

/// Why two entries were linked. Declared weakest first so `Ord` ranks strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    CrossChannel,
    KeywordMatch,
    TimeMatch,
    AmountMatch,
}

impl LinkType {
    pub const ALL: [LinkType; 4] = [
        Self::AmountMatch,
        Self::TimeMatch,
        Self::KeywordMatch,
        Self::CrossChannel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AmountMatch => "amount_match",
            Self::TimeMatch => "time_match",
            Self::KeywordMatch => "keyword_match",
            Self::CrossChannel => "cross_channel",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Order-independent key for an unordered pair of ids. `first <= second`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self {
                first: a.to_string(),
                second: b.to_string(),
            }
        } else {
            Self {
                first: b.to_string(),
                second: a.to_string(),
            }
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn is_reflexive(&self) -> bool {
        self.first == self.second
    }
}

/// Proposed corroboration between two distinct ledger entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLink {
    /// Lexicographically smaller entry id.
    pub entry_a_id: String,
    pub entry_b_id: String,
    pub link_type: LinkType,
    /// Weighted similarity in [0.0, 1.0].
    pub similarity_score: f64,
}

impl EventLink {
    /// Build a link with its endpoints canonicalized.
    pub fn new(x_id: &str, y_id: &str, link_type: LinkType, similarity_score: f64) -> Self {
        let key = PairKey::new(x_id, y_id);
        Self {
            entry_a_id: key.first,
            entry_b_id: key.second,
            link_type,
            similarity_score: similarity_score.clamp(0.0, 1.0),
        }
    }

    pub fn pair_key(&self) -> PairKey {
        PairKey::new(&self.entry_a_id, &self.entry_b_id)
    }
}
