//! # Source Bias
//!
//! Maps a publisher name to its known political lean.
//!
//! - Exact, case-sensitive match on the name as it appears in the record
//!   (`"Fox News"` is known, `"fox news"` is not).
//! - Unknown publishers have no entry and contribute a neutral prior of 0.
//! - Includes a built-in `default_seed()` with common outlets.
//!
//! The table is built once and never mutated afterwards.

use crate::article::BiasLabel;
use serde::Deserialize;
use std::collections::HashMap;

/// Publisher → lean table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SourceBiasTable {
    entries: HashMap<String, BiasLabel>,
}

impl SourceBiasTable {
    pub fn new(entries: HashMap<String, BiasLabel>) -> Self {
        Self { entries }
    }

    /// Known lean of `source`, if any.
    pub fn lookup(&self, source: &str) -> Option<BiasLabel> {
        self.entries.get(source).copied()
    }

    /// Numeric prior in {-1, 0, +1}; unknown publishers are 0.
    pub fn prior(&self, source: &str) -> f64 {
        self.lookup(source).map_or(0.0, |b| b.prior())
    }

    pub fn is_known(&self, source: &str) -> bool {
        self.entries.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlay `other` on top of this table (entries in `other` win).
    pub fn extend(&mut self, other: SourceBiasTable) {
        self.entries.extend(other.entries);
    }

    /// Built-in seed with common US/UK outlets.
    pub fn default_seed() -> Self {
        let mut entries = HashMap::new();

        for (name, bias) in [
            ("CNN", BiasLabel::Left),
            ("MSNBC", BiasLabel::Left),
            ("NBC News", BiasLabel::Left),
            ("New York Times", BiasLabel::Left),
            ("Washington Post", BiasLabel::Left),
            ("Huffington Post", BiasLabel::Left),
            ("The Guardian", BiasLabel::Left),
            ("Vox", BiasLabel::Left),
            ("BuzzFeed", BiasLabel::Left),
            ("Slate", BiasLabel::Left),
            ("Fox News", BiasLabel::Right),
            ("Breitbart", BiasLabel::Right),
            ("The Daily Wire", BiasLabel::Right),
            ("The Blaze", BiasLabel::Right),
            ("National Review", BiasLabel::Right),
            ("Washington Times", BiasLabel::Right),
            ("NewsMax", BiasLabel::Right),
            ("The Spectator", BiasLabel::Right),
            ("New York Post", BiasLabel::Right),
            ("Washington Examiner", BiasLabel::Right),
            ("Reuters", BiasLabel::Center),
            ("AP", BiasLabel::Center),
            ("Associated Press", BiasLabel::Center),
            ("BBC", BiasLabel::Center),
            ("The Hill", BiasLabel::Center),
            ("USA Today", BiasLabel::Center),
            ("Bloomberg", BiasLabel::Center),
            ("The Wall Street Journal", BiasLabel::Center),
            ("The Economist", BiasLabel::Center),
            ("CNBC", BiasLabel::Center),
            ("Axios", BiasLabel::Center),
            ("Financial Times", BiasLabel::Center),
            ("NPR", BiasLabel::Center),
        ] {
            entries.insert(name.to_string(), bias);
        }

        Self { entries }
    }
}
