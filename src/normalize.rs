//! # Text Normalizer
//!
//! Turns a raw title or description into the canonical token sequence that is
//! stored next to the article for later text mining:
//!
//! 0. decode HTML entities, strip tags (feed text often carries both)
//! 1. lowercase
//! 2. drop URL-like tokens (`http…`, `https…`, `www…`)
//! 3. drop every character that is not an ASCII letter or whitespace
//! 4. split on whitespace
//! 5. drop English stopwords
//! 6. lemmatize what is left
//!
//! Order and duplicates are preserved. The classifier does not read these
//! tokens; sentiment and keyword scoring work on the raw text.

use crate::article::Article;
use crate::lemmatize::lemmatize;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static RE_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)</?[^>]+>").expect("tag regex"));
static RE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http\S+|www\S+|https\S+").expect("url regex"));
static RE_NON_ALPHA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").expect("non-alpha regex"));

/// English stopwords (NLTK list). Apostrophes are already gone by the time
/// tokens are checked, so contracted forms are listed without them.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "youre", "youve",
        "youll", "youd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
        "she", "shes", "her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
        "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "thatll", "these",
        "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
        "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
        "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
        "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
        "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then",
        "once", "here", "there", "when", "where", "why", "how", "all", "any", "both", "each",
        "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same",
        "so", "than", "too", "very", "s", "t", "can", "will", "just", "don", "dont", "should",
        "shouldve", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "arent", "couldn",
        "couldnt", "didn", "didnt", "doesn", "doesnt", "hadn", "hadnt", "hasn", "hasnt", "haven",
        "havent", "isn", "isnt", "ma", "mightn", "mightnt", "mustn", "mustnt", "needn", "neednt",
        "shan", "shant", "shouldn", "shouldnt", "wasn", "wasnt", "weren", "werent", "won", "wont",
        "wouldn", "wouldnt",
    ]
    .into_iter()
    .collect()
});

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Clean a raw text field into its canonical token sequence.
pub fn normalize(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let decoded = html_escape::decode_html_entities(text);
    let untagged = RE_TAGS.replace_all(&decoded, " ");
    let lowered = untagged.to_lowercase();
    let no_urls = RE_URL.replace_all(&lowered, "");
    let letters_only = RE_NON_ALPHA.replace_all(&no_urls, "");

    letters_only
        .split_whitespace()
        .filter(|t| !is_stopword(t))
        .map(lemmatize)
        .collect()
}

/// Storage form: tokens joined by single spaces.
pub fn normalize_joined(text: &str) -> String {
    normalize(text).join(" ")
}

/// Attach `title_cleaned` / `description_cleaned` to an article.
pub fn preprocess_article(article: &mut Article) {
    article.title_cleaned = Some(normalize_joined(article.title.as_deref().unwrap_or("")));
    article.description_cleaned =
        Some(normalize_joined(article.description.as_deref().unwrap_or("")));
}

/// Preprocess every article in place.
pub fn preprocess_batch(articles: &mut [Article]) {
    for article in articles.iter_mut() {
        preprocess_article(article);
    }
    tracing::info!(count = articles.len(), "preprocessed articles");
}
