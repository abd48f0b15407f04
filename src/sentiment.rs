//! # Sentiment Scorer
//!
//! Lexicon-and-rule valence scoring with VADER semantics:
//! - per-token valence from `sentiment_lexicon.json` (scale roughly ±4)
//! - boosters/dampeners in the three preceding tokens, decaying with distance
//! - ALL-CAPS emphasis when the text mixes caps and non-caps
//! - negation (`not`, `never`, any `n't`, ...) within three tokens
//! - contrastive `but`: earlier clause ×0.5, later clause ×1.5
//! - `!` and repeated `?` amplify the summed magnitude
//!
//! The summed valence is squashed into `[-1, 1]` as `s / sqrt(s² + 15)`.

use crate::article::SentimentLabel;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static LEXICON: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, f64>>(raw).expect("valid sentiment lexicon")
});

static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let incr = [
        "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
        "decidedly", "deeply", "enormous", "enormously", "entirely", "especially", "exceptional",
        "exceptionally", "extreme", "extremely", "fabulously", "fully", "greatly", "hella",
        "highly", "hugely", "incredible", "incredibly", "intensely", "major", "majorly", "more",
        "most", "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
        "thoroughly", "total", "totally", "tremendous", "tremendously", "uber", "unbelievably",
        "unusually", "utter", "utterly", "very",
    ];
    let decr = [
        "almost", "barely", "hardly", "just enough", "kind of", "kinda", "kindof", "kind-of",
        "less", "little", "marginal", "marginally", "occasional", "occasionally", "partly",
        "scarce", "scarcely", "slight", "slightly", "somewhat", "sort of", "sorta", "sortof",
        "sort-of",
    ];
    incr.into_iter()
        .map(|w| (w, B_INCR))
        .chain(decr.into_iter().map(|w| (w, B_DECR)))
        .collect()
});

/// Multi-word expressions whose valence overrides the head word's.
static IDIOMS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("the bomb", 3.0),
        ("bad ass", 1.5),
        ("badass", 1.5),
        ("bus stop", 0.0),
        ("yeah right", -2.0),
        ("kiss of death", -1.5),
        ("to die for", 3.0),
        ("beating heart", 3.1),
        ("broken heart", -2.9),
        ("cut the mustard", 2.0),
        ("hand to mouth", -2.0),
    ]
    .into_iter()
    .collect()
});

const NEGATORS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
const NORMALIZE_ALPHA: f64 = 15.0;

/// Compound score at or above which text is labeled positive (and its mirror for negative).
pub const POLARITY_THRESHOLD: f64 = 0.05;

/// Full VADER-style breakdown; `compound` is what the pipeline stores.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Label plus score as attached to an article; `score` is `None` when unanalyzable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub label: SentimentLabel,
    pub score: Option<f64>,
}

impl SentimentScore {
    pub fn unanalyzable() -> Self {
        Self {
            label: SentimentLabel::Unanalyzable,
            score: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score optional raw text. Missing or blank text is unanalyzable.
    pub fn score(&self, text: Option<&str>) -> SentimentScore {
        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            return SentimentScore::unanalyzable();
        };
        let compound = self.polarity_scores(text).compound;
        SentimentScore {
            label: label_for(compound),
            score: Some(compound),
        }
    }

    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        let sentitext = SentiText::new(text);
        let words = &sentitext.words;
        let lower = &sentitext.lower;

        let mut sentiments = Vec::with_capacity(words.len());
        for i in 0..words.len() {
            let item = lower[i].as_str();
            if BOOSTERS.contains_key(item) {
                sentiments.push(0.0);
                continue;
            }
            if item == "kind" && lower.get(i + 1).is_some_and(|n| n == "of") {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&sentitext, i));
        }

        but_check(lower, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn sentiment_valence(&self, st: &SentiText, i: usize) -> f64 {
        let words = &st.words;
        let lower = &st.lower;
        let item = lower[i].as_str();

        let Some(&base) = LEXICON.get(item) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" directly before another lexicon word is a negator, not a sentiment word.
        if item == "no" && lower.get(i + 1).is_some_and(|n| in_lexicon(n)) {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && matches!(lower[i - 1].as_str(), "or" | "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_upper(&words[i]) && st.is_cap_diff {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start_i in 0..3 {
            if i > start_i && !in_lexicon(&lower[i - (start_i + 1)]) {
                let mut s = scalar_inc_dec(&words[i - (start_i + 1)], valence, st.is_cap_diff);
                if start_i == 1 && s != 0.0 {
                    s *= 0.95;
                }
                if start_i == 2 && s != 0.0 {
                    s *= 0.9;
                }
                valence += s;
                valence = negation_check(valence, lower, start_i, i);
                if start_i == 2 {
                    valence = idioms_check(valence, lower, i);
                }
            }
        }

        least_check(valence, lower, i)
    }
}

/// Score raw text with the shared analyzer.
pub fn score_sentiment(text: Option<&str>) -> SentimentScore {
    static ANALYZER: Lazy<SentimentAnalyzer> = Lazy::new(SentimentAnalyzer::new);
    ANALYZER.score(text)
}

/// Map a compound score to its three-way label.
pub fn label_for(compound: f64) -> SentimentLabel {
    if compound >= POLARITY_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= -POLARITY_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

struct SentiText {
    words: Vec<String>,
    lower: Vec<String>,
    is_cap_diff: bool,
}

impl SentiText {
    fn new(text: &str) -> Self {
        let words: Vec<String> = text.split_whitespace().map(strip_punct_if_word).collect();
        let lower = words.iter().map(|w| w.to_lowercase()).collect();
        let caps = words.iter().filter(|w| is_upper(w)).count();
        Self {
            is_cap_diff: caps > 0 && caps < words.len(),
            words,
            lower,
        }
    }
}

/// Strip surrounding punctuation unless that would leave two chars or fewer (emoticons).
fn strip_punct_if_word(token: &str) -> String {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token.to_string()
    } else {
        stripped.to_string()
    }
}

/// Python-style `isupper`: at least one cased char and no lowercase ones.
fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

fn in_lexicon(word: &str) -> bool {
    LEXICON.contains_key(word)
}

fn is_negated(word: &str) -> bool {
    NEGATORS.contains(&word) || word.contains("n't")
}

fn scalar_inc_dec(word: &str, valence: f64, is_cap_diff: bool) -> f64 {
    let Some(&boost) = BOOSTERS.get(word.to_lowercase().as_str()) else {
        return 0.0;
    };
    let mut scalar = if valence < 0.0 { -boost } else { boost };
    if is_upper(word) && is_cap_diff {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

fn negation_check(valence: f64, lower: &[String], start_i: usize, i: usize) -> f64 {
    let w = |k: usize| lower[i - k].as_str();
    match start_i {
        0 => {
            if is_negated(w(1)) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if w(2) == "never" && matches!(w(1), "so" | "this") {
                return valence * 1.25;
            } else if w(2) == "without" && w(1) == "doubt" {
                return valence;
            } else if is_negated(w(2)) {
                return valence * N_SCALAR;
            }
        }
        2 => {
            if w(3) == "never"
                && (matches!(w(2), "so" | "this") || matches!(w(1), "so" | "this"))
            {
                return valence * 1.25;
            } else if w(3) == "without" && (w(2) == "doubt" || w(1) == "doubt") {
                return valence;
            } else if is_negated(w(3)) {
                return valence * N_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

fn idioms_check(mut valence: f64, lower: &[String], i: usize) -> f64 {
    let w = |k: usize| lower[i - k].as_str();
    let onezero = format!("{} {}", w(1), w(0));
    let twoonezero = format!("{} {} {}", w(2), w(1), w(0));
    let twoone = format!("{} {}", w(2), w(1));
    let threetwoone = format!("{} {} {}", w(3), w(2), w(1));
    let threetwo = format!("{} {}", w(3), w(2));

    for seq in [&onezero, &twoonezero, &twoone, &threetwoone, &threetwo] {
        if let Some(&v) = IDIOMS.get(seq.as_str()) {
            valence = v;
            break;
        }
    }
    if lower.len() > i + 1 {
        let zeroone = format!("{} {}", w(0), lower[i + 1]);
        if let Some(&v) = IDIOMS.get(zeroone.as_str()) {
            valence = v;
        }
    }
    if lower.len() > i + 2 {
        let zeroonetwo = format!("{} {} {}", w(0), lower[i + 1], lower[i + 2]);
        if let Some(&v) = IDIOMS.get(zeroonetwo.as_str()) {
            valence = v;
        }
    }
    for ngram in [&threetwoone, &threetwo, &twoone] {
        if let Some(&b) = BOOSTERS.get(ngram.as_str()) {
            valence += b;
        }
    }
    valence
}

fn least_check(valence: f64, lower: &[String], i: usize) -> f64 {
    if i > 1 && lower[i - 1] == "least" && !in_lexicon(&lower[i - 1]) {
        if lower[i - 2] != "at" && lower[i - 2] != "very" {
            return valence * N_SCALAR;
        }
    } else if i > 0 && lower[i - 1] == "least" && !in_lexicon(&lower[i - 1]) {
        return valence * N_SCALAR;
    }
    valence
}

/// Shift weight to the clause after the first "but".
fn but_check(lower: &[String], sentiments: &mut [f64]) {
    let Some(bi) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (si, s) in sentiments.iter_mut().enumerate() {
        if si < bi {
            *s *= 0.5;
        } else if si > bi {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let ep = text.matches('!').count().min(4) as f64 * 0.292;
    let qm_count = text.matches('?').count();
    let qm = match qm_count {
        0 | 1 => 0.0,
        2..=3 => qm_count as f64 * 0.18,
        _ => 0.96,
    };
    ep + qm
}

fn normalize_score(score: f64) -> f64 {
    (score / (score * score + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(x: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    (x * f).round() / f
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let punct = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punct;
    } else if sum < 0.0 {
        sum -= punct;
    }
    let compound = normalize_score(sum);

    let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0_f64, 0.0_f64, 0usize);
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += punct;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct;
    }

    let total = pos_sum + neg_sum.abs() + neu_count as f64;
    PolarityScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neu_count as f64 / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(text: &str) -> f64 {
        SentimentAnalyzer::new().polarity_scores(text).compound
    }

    #[test]
    fn lexicon_loads() {
        assert!(LEXICON.len() > 2000);
        assert_eq!(LEXICON.get("good"), Some(&1.9));
    }

    #[test]
    fn single_word_matches_reference_value() {
        // 1.9 / sqrt(1.9² + 15)
        assert_eq!(compound("good"), 0.4404);
    }

    #[test]
    fn headlines_match_reference_values() {
        assert_eq!(compound("Senators condemn shameful scam"), -0.8591);
        assert_eq!(compound("Leaders praise the outstanding deal"), 0.8225);
        assert_eq!(compound("Fatal accident on highway"), -0.765);
        assert_eq!(compound("Investors cheer strong recovery"), 0.8402);
        assert_eq!(compound("Protesters clash with police in violent riot"), -0.9081);
    }

    #[test]
    fn no_before_a_sentiment_word_negates_it() {
        // "no" itself scores 0 and flips "problems"
        assert_eq!(compound("no problems"), 0.3089);
        assert!(compound("no") < 0.0);
    }

    #[test]
    fn least_negates_unless_at_or_very() {
        assert_eq!(compound("the least good"), -0.3412);
        assert_eq!(compound("at least good"), 0.4404);
        assert_eq!(compound("at least good"), compound("good"));
    }

    #[test]
    fn idiom_overrides_word_valence() {
        assert_eq!(compound("They called it the kiss of death"), -0.6124);
        assert_eq!(compound("They called it the death"), -0.5994);
    }

    #[test]
    fn never_so_intensifies() {
        assert_eq!(compound("It was so good"), 0.4927);
        assert_eq!(compound("It was never so good"), 0.5777);
    }

    #[test]
    fn blank_is_unanalyzable() {
        assert_eq!(score_sentiment(None), SentimentScore::unanalyzable());
        assert_eq!(score_sentiment(Some("")), SentimentScore::unanalyzable());
        assert_eq!(score_sentiment(Some("  \t\n")), SentimentScore::unanalyzable());
    }

    #[test]
    fn no_sentiment_words_is_neutral_zero() {
        let s = score_sentiment(Some("Committee meets on Tuesday"));
        assert_eq!(s.label, SentimentLabel::Neutral);
        assert_eq!(s.score, Some(0.0));
    }

    #[test]
    fn negation_flips_polarity() {
        assert!(compound("The movie is good") > 0.05);
        assert!(compound("The movie is not good") < -0.05);
        assert!(compound("The movie isn't good") < -0.05);
    }

    #[test]
    fn caps_and_exclamation_boost_magnitude() {
        let plain = compound("The movie is good");
        assert!(compound("The movie is GOOD") > plain);
        assert!(compound("The movie is good!!!") > plain);
        // all-caps text has no caps differential
        assert_eq!(compound("GOOD"), compound("good"));
    }

    #[test]
    fn boosters_and_dampeners() {
        let plain = compound("The movie is good");
        assert!(compound("The movie is very good") > plain);
        assert!(compound("The movie is slightly good") < plain);
        assert!(compound("The movie is very bad") < compound("The movie is bad"));
    }

    #[test]
    fn but_shifts_weight_to_second_clause() {
        let s = score_sentiment(Some("The service was horrible but the food was good"));
        assert_eq!(s.label, SentimentLabel::Positive);
        let s = score_sentiment(Some("The food was good but the service was horrible"));
        assert_eq!(s.label, SentimentLabel::Negative);
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(label_for(0.05), SentimentLabel::Positive);
        assert_eq!(label_for(-0.05), SentimentLabel::Negative);
        assert_eq!(label_for(0.0499), SentimentLabel::Neutral);
        assert_eq!(label_for(-0.0499), SentimentLabel::Neutral);
    }

    #[test]
    fn punctuation_amplifier_caps_out() {
        assert!((punctuation_emphasis("!!!!!!!!") - 4.0 * 0.292).abs() < 1e-12);
        assert!((punctuation_emphasis("??") - 0.36).abs() < 1e-12);
        assert!((punctuation_emphasis("?????") - 0.96).abs() < 1e-12);
        assert_eq!(punctuation_emphasis("?"), 0.0);
    }

    #[test]
    fn proportions_sum_to_one() {
        let p = SentimentAnalyzer::new().polarity_scores("Great win, but a terrible loss");
        assert!((p.neg + p.neu + p.pos - 1.0).abs() < 0.01);
    }
}
