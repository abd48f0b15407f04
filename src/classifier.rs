//! # Composite Bias Classifier
//! Pure, testable logic that maps an article to `Left` / `Center` / `Right`.
//! No I/O.
//!
//! Policy: fixed linear blend of three terms,
//!
//! ```text
//! final = 0.5 · source_prior + 0.3 · (right_hits − left_hits) + 0.2 · sentiment
//! ```
//!
//! with `source_prior ∈ {-1, 0, +1}` (0 for unknown publishers) and the
//! sentiment term 0 when the article has no score. `final > 0.2` is `Right`,
//! `final < −0.2` is `Left`, anything in between (bounds included) is `Center`.

use crate::article::{Article, BiasLabel};
use crate::error::{AnalysisError, ConfigError};
use crate::keywords::{KeywordCounts, KeywordLexicon};
use crate::sentiment::{SentimentAnalyzer, SentimentScore};
use crate::source_bias::SourceBiasTable;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Blend weights and decision threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendWeights {
    pub source: f64,
    pub keywords: f64,
    pub sentiment: f64,
    pub threshold: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            source: 0.5,
            keywords: 0.3,
            sentiment: 0.2,
            threshold: 0.2,
        }
    }
}

impl BlendWeights {
    /// Reject non-finite weights and negative thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [self.source, self.keywords, self.sentiment, self.threshold];
        if all.iter().any(|w| !w.is_finite()) {
            return Err(ConfigError::InvalidWeights(format!(
                "weights must be finite: {:?}",
                self
            )));
        }
        if self.threshold < 0.0 {
            return Err(ConfigError::InvalidWeights(format!(
                "threshold must be >= 0, got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Weighted sum of the three terms.
    pub fn composite(&self, source_prior: f64, keyword_score: i64, sentiment: Option<f64>) -> f64 {
        self.source * source_prior
            + self.keywords * keyword_score as f64
            + self.sentiment * sentiment.unwrap_or(0.0)
    }

    /// Strict threshold: values exactly on ±threshold stay `Center`.
    pub fn label(&self, final_score: f64) -> BiasLabel {
        if final_score > self.threshold {
            BiasLabel::Right
        } else if final_score < -self.threshold {
            BiasLabel::Left
        } else {
            BiasLabel::Center
        }
    }
}

/// Every term that went into one classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BiasBreakdown {
    pub source_prior: f64,
    pub keyword_counts: KeywordCounts,
    pub keyword_score: i64,
    pub sentiment: Option<f64>,
    pub final_score: f64,
    pub label: BiasLabel,
}

/// Sentiment + bias classifier over immutable lookup tables.
///
/// Cheap to clone; the tables are shared.
#[derive(Debug, Clone)]
pub struct Classifier {
    sources: Arc<SourceBiasTable>,
    keywords: Arc<KeywordLexicon>,
    weights: BlendWeights,
    sentiment: SentimentAnalyzer,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(
            SourceBiasTable::default_seed(),
            KeywordLexicon::default(),
            BlendWeights::default(),
        )
    }
}

impl Classifier {
    pub fn new(sources: SourceBiasTable, keywords: KeywordLexicon, weights: BlendWeights) -> Self {
        Self {
            sources: Arc::new(sources),
            keywords: Arc::new(keywords),
            weights,
            sentiment: SentimentAnalyzer::new(),
        }
    }

    pub fn sources(&self) -> &SourceBiasTable {
        &self.sources
    }

    pub fn keywords(&self) -> &KeywordLexicon {
        &self.keywords
    }

    pub fn weights(&self) -> BlendWeights {
        self.weights
    }

    /// Sentiment of the article's combined title + description.
    pub fn score_sentiment(&self, article: &Article) -> SentimentScore {
        self.sentiment.score(Some(article.content().as_str()))
    }

    /// All scoring terms for `article`, using whatever sentiment score it carries.
    pub fn explain(&self, article: &Article) -> BiasBreakdown {
        let source_prior = self.sources.prior(article.source_name());
        let content = article.content();
        let keyword_counts = self.keywords.counts(Some(content.as_str()));
        let keyword_score = keyword_counts.signed();
        let sentiment = article.sentiment_value();
        let final_score = self
            .weights
            .composite(source_prior, keyword_score, sentiment);

        BiasBreakdown {
            source_prior,
            keyword_counts,
            keyword_score,
            sentiment,
            final_score,
            label: self.weights.label(final_score),
        }
    }

    /// Final bias label. Call after sentiment scoring; a missing score counts as 0.
    pub fn classify_bias(&self, article: &Article) -> BiasLabel {
        self.explain(article).label
    }

    /// Score sentiment, then bias, and write all three annotation fields.
    ///
    /// Existing annotation fields are overwritten, so re-running on output is stable.
    pub fn annotate(&self, article: &mut Article) -> Result<BiasBreakdown, AnalysisError> {
        let sentiment = self.score_sentiment(article);
        if let Some(score) = sentiment.score.filter(|s| !s.is_finite()) {
            return Err(AnalysisError::NonFiniteScore(score));
        }
        article.sentiment = Some(sentiment.label);
        article.sentiment_score = Some(sentiment.score);

        let breakdown = self.explain(article);
        article.political_bias = Some(breakdown.label);

        debug!(
            article = article.log_label(),
            source = article.source_name(),
            sentiment = %sentiment.label,
            source_prior = breakdown.source_prior,
            keyword_score = breakdown.keyword_score,
            final_score = breakdown.final_score,
            bias = %breakdown.label,
            "classified article"
        );
        Ok(breakdown)
    }
}

/// Classify with the built-in tables and default weights.
pub fn classify_bias(article: &Article) -> BiasLabel {
    static DEFAULT: Lazy<Classifier> = Lazy::new(Classifier::default);
    DEFAULT.classify_bias(article)
}
