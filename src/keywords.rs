//! # Keyword Bias Scorer
//!
//! Counts left- and right-associated phrases in raw article text. Matching is
//! plain substring counting over the lowercased text: every non-overlapping
//! occurrence of a phrase counts, so a phrase repeated three times adds three.

use crate::article::BiasLabel;
use serde::{Deserialize, Serialize};

/// Built-in left-leaning phrases.
pub const DEFAULT_LEFT_KEYWORDS: &[&str] = &[
    "progressive",
    "liberal",
    "democrat",
    "socialism",
    "social justice",
    "equality",
    "diversity",
    "inclusion",
    "climate change",
    "renewable energy",
    "gun control",
    "abortion rights",
    "pro-choice",
    "lgbtq+ rights",
    "universal healthcare",
    "tax the rich",
    "wealth tax",
    "welfare",
    "regulation",
    "union",
    "labor rights",
    "immigration reform",
    "racial justice",
    "defund police",
    "income inequality",
    "green new deal",
    "student loan forgiveness",
    "living wage",
];

/// Built-in right-leaning phrases.
pub const DEFAULT_RIGHT_KEYWORDS: &[&str] = &[
    "conservative",
    "republican",
    "free market",
    "capitalism",
    "traditional values",
    "tax cuts",
    "deregulation",
    "second amendment",
    "pro-life",
    "religious freedom",
    "border security",
    "national security",
    "military spending",
    "law and order",
    "small government",
    "family values",
    "patriotism",
    "american exceptionalism",
    "tough on crime",
    "deficit reduction",
    "individual liberty",
    "personal responsibility",
    "school choice",
    "free speech",
    "constitutional originalism",
];

/// Two phrase lists, stored lowercase with blanks removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordLexicon {
    left: Vec<String>,
    right: Vec<String>,
}

impl Default for KeywordLexicon {
    fn default() -> Self {
        Self::new(
            DEFAULT_LEFT_KEYWORDS.iter().copied(),
            DEFAULT_RIGHT_KEYWORDS.iter().copied(),
        )
    }
}

impl KeywordLexicon {
    pub fn new<L, R, S>(left: L, right: R) -> Self
    where
        L: IntoIterator<Item = S>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            left: clean_phrases(left),
            right: clean_phrases(right),
        }
    }

    pub fn left(&self) -> &[String] {
        &self.left
    }

    pub fn right(&self) -> &[String] {
        &self.right
    }

    /// Count phrase occurrences on both sides. `None` and empty text count nothing.
    pub fn counts(&self, text: Option<&str>) -> KeywordCounts {
        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            return KeywordCounts::default();
        };
        let lowered = text.to_lowercase();
        KeywordCounts {
            left: count_phrases(&lowered, &self.left),
            right: count_phrases(&lowered, &self.right),
        }
    }

    /// Signed lexical score, `right − left`.
    pub fn score(&self, text: Option<&str>) -> i64 {
        self.counts(text).signed()
    }
}

/// Raw hit counts for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCounts {
    pub left: u32,
    pub right: u32,
}

impl KeywordCounts {
    /// Positive leans right, negative leans left.
    pub fn signed(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    /// Size of the imbalance regardless of direction.
    pub fn magnitude(&self) -> u32 {
        self.right.abs_diff(self.left)
    }

    /// Direction of the imbalance; ties and no hits are `Center`.
    pub fn lean(&self) -> BiasLabel {
        match self.signed() {
            s if s > 0 => BiasLabel::Right,
            s if s < 0 => BiasLabel::Left,
            _ => BiasLabel::Center,
        }
    }

    /// `(right − left) / (right + left)`, or 0 with no hits. Diagnostic only.
    pub fn ratio(&self) -> f64 {
        let total = self.left + self.right;
        if total == 0 {
            0.0
        } else {
            self.signed() as f64 / f64::from(total)
        }
    }
}

/// Left/right hit counts against the built-in lexicon.
pub fn keyword_counts(text: Option<&str>) -> KeywordCounts {
    default_lexicon().counts(text)
}

/// Signed keyword score against the built-in lexicon.
pub fn score_keywords(text: Option<&str>) -> i64 {
    default_lexicon().score(text)
}

fn default_lexicon() -> &'static KeywordLexicon {
    static LEXICON: once_cell::sync::Lazy<KeywordLexicon> =
        once_cell::sync::Lazy::new(KeywordLexicon::default);
    &LEXICON
}

fn count_phrases(lowered: &str, phrases: &[String]) -> u32 {
    phrases
        .iter()
        .map(|p| lowered.matches(p.as_str()).count() as u32)
        .sum()
}

fn clean_phrases<I, S>(phrases: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    phrases
        .into_iter()
        .map(|p| p.as_ref().trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect()
}
