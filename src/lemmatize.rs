//! Noun lemmatizer in the style of WordNet's `morphy`.
//!
//! Lookup order:
//! 1. irregular forms (`children` → `child`, `crises` → `crisis`, ...)
//! 2. uninflected words that only look plural (`news`, `politics`, `bias`, ...)
//! 3. suffix detachment rules, longest suffix first
//!
//! There is no dictionary to validate candidates against, so `ses → s` only
//! fires for `-us` singulars (`bonuses`) and known uninflected `-s` words
//! (`biases`), and `zes → z` only after `zz`/`tz` (`buzzes`, `waltzes`). Other
//! `-ses`/`-zes` plurals drop the `s` (`houses`, `prizes`).
//!
//! Tokens are expected lowercase and ASCII-alphabetic (the normalizer guarantees
//! both). Apart from irregular forms (`men`), anything of three letters or fewer
//! is returned unchanged.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("children", "child"),
        ("women", "woman"),
        ("men", "man"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("leaves", "leaf"),
        ("wolves", "wolf"),
        ("halves", "half"),
        ("selves", "self"),
        ("shelves", "shelf"),
        ("thieves", "thief"),
        ("loaves", "loaf"),
        ("calves", "calf"),
        ("crises", "crisis"),
        ("analyses", "analysis"),
        ("theses", "thesis"),
        ("hypotheses", "hypothesis"),
        ("diagnoses", "diagnosis"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("oxen", "ox"),
        ("buses", "bus"),
        ("gases", "gas"),
        ("quizzes", "quiz"),
        ("heroes", "hero"),
        ("potatoes", "potato"),
        ("tomatoes", "tomato"),
        ("vetoes", "veto"),
        ("echoes", "echo"),
        ("torpedoes", "torpedo"),
        ("cacti", "cactus"),
        ("fungi", "fungus"),
        ("stimuli", "stimulus"),
        ("alumni", "alumnus"),
    ]
    .into_iter()
    .collect()
});

static UNINFLECTED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "news",
        "politics",
        "economics",
        "physics",
        "ethics",
        "mathematics",
        "athletics",
        "electronics",
        "series",
        "species",
        "means",
        "headquarters",
        "people",
        "sheep",
        "deer",
        "fish",
        "aircraft",
        "bias",
        "alias",
        "atlas",
        "canvas",
        "texas",
        "kansas",
        "arkansas",
        "christmas",
        "paris",
        "always",
        "perhaps",
        "sometimes",
        "towards",
        "afterwards",
        "whereas",
        "aids",
        "lens",
        "mars",
        "jesus",
        "wales",
        "diabetes",
        "measles",
        "billiards",
        "pants",
        "scissors",
    ]
    .into_iter()
    .collect()
});

/// Words ending in `men` that are not `-man` plurals.
const MEN_EXCEPTIONS: &[&str] = &["specimen", "abdomen", "regimen", "acumen", "stamen", "semen"];

/// `-use` nouns whose plural must keep the `e` (`abuses` → `abuse`).
const USE_NOUNS: &[&str] = &[
    "abuse", "accuse", "excuse", "fuse", "muse", "refuse", "reuse", "misuse", "overuse", "ruse",
    "recluse", "obtuse",
];

/// Reduce a single lowercase token to its noun lemma.
pub fn lemmatize(word: &str) -> String {
    if let Some(lemma) = IRREGULAR.get(word) {
        return (*lemma).to_string();
    }
    if word.len() <= 3 {
        return word.to_string();
    }
    if UNINFLECTED.contains(word) {
        return word.to_string();
    }
    detach_suffix(word).unwrap_or_else(|| word.to_string())
}

fn detach_suffix(word: &str) -> Option<String> {
    let n = word.len();

    if let Some(stem) = word.strip_suffix("men") {
        if n > 5 && !MEN_EXCEPTIONS.contains(&word) {
            return Some(format!("{stem}man"));
        }
        return None;
    }
    if !word.ends_with('s') || word.ends_with("ss") || word.ends_with("us") || word.ends_with("is")
    {
        return None;
    }
    for suffix in ["sses", "ches", "shes", "xes"] {
        if word.ends_with(suffix) {
            return Some(word[..n - 2].to_string());
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if word.ends_with("ses") && takes_ses(stem, &word[..n - 1]) {
            return Some(stem.to_string());
        }
        if stem.ends_with("zz") || stem.ends_with("tz") {
            return Some(stem.to_string());
        }
    }
    if let Some(stem) = word.strip_suffix("ies") {
        // cities -> city, but ties -> tie
        return Some(if n > 4 {
            format!("{stem}y")
        } else {
            format!("{stem}ie")
        });
    }
    Some(word[..n - 1].to_string())
}

/// `stem` is the word minus `es`, `with_e` minus only `s`.
fn takes_ses(stem: &str, with_e: &str) -> bool {
    if UNINFLECTED.contains(stem) {
        return true;
    }
    let Some(head) = stem.strip_suffix("us") else {
        return false;
    };
    // houses, causes: vowel before `us` means the singular ends in `-use`
    let consonant = head
        .chars()
        .last()
        .is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
    consonant && !USE_NOUNS.contains(&with_e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_plurals() {
        assert_eq!(lemmatize("articles"), "article");
        assert_eq!(lemmatize("houses"), "house");
        assert_eq!(lemmatize("cuts"), "cut");
        assert_eq!(lemmatize("elections"), "election");
    }

    #[test]
    fn sibilant_plurals() {
        assert_eq!(lemmatize("classes"), "class");
        assert_eq!(lemmatize("churches"), "church");
        assert_eq!(lemmatize("wishes"), "wish");
        assert_eq!(lemmatize("taxes"), "tax");
    }

    #[test]
    fn ses_and_zes_plurals() {
        assert_eq!(lemmatize("bonuses"), "bonus");
        assert_eq!(lemmatize("viruses"), "virus");
        assert_eq!(lemmatize("campuses"), "campus");
        assert_eq!(lemmatize("biases"), "bias");
        assert_eq!(lemmatize("buzzes"), "buzz");
        assert_eq!(lemmatize("waltzes"), "waltz");
        // singular ends in -se / -ze
        assert_eq!(lemmatize("causes"), "cause");
        assert_eq!(lemmatize("abuses"), "abuse");
        assert_eq!(lemmatize("excuses"), "excuse");
        assert_eq!(lemmatize("cases"), "case");
        assert_eq!(lemmatize("prizes"), "prize");
    }

    #[test]
    fn short_irregulars_are_looked_up() {
        assert_eq!(lemmatize("men"), "man");
        assert_eq!(lemmatize("oxen"), "ox");
        assert_eq!(lemmatize("cats"), "cat");
        assert_eq!(lemmatize("its"), "its");
    }

    #[test]
    fn ies_plurals() {
        assert_eq!(lemmatize("cities"), "city");
        assert_eq!(lemmatize("policies"), "policy");
        assert_eq!(lemmatize("ties"), "tie");
    }

    #[test]
    fn men_plurals() {
        assert_eq!(lemmatize("policemen"), "policeman");
        assert_eq!(lemmatize("chairmen"), "chairman");
        assert_eq!(lemmatize("specimen"), "specimen");
    }

    #[test]
    fn irregulars_and_uninflected() {
        assert_eq!(lemmatize("children"), "child");
        assert_eq!(lemmatize("crises"), "crisis");
        assert_eq!(lemmatize("news"), "news");
        assert_eq!(lemmatize("politics"), "politics");
        assert_eq!(lemmatize("bias"), "bias");
    }

    #[test]
    fn non_plural_endings_untouched() {
        assert_eq!(lemmatize("congress"), "congress");
        assert_eq!(lemmatize("virus"), "virus");
        assert_eq!(lemmatize("analysis"), "analysis");
        assert_eq!(lemmatize("running"), "running");
        assert_eq!(lemmatize("gas"), "gas");
    }
}
