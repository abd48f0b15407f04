// src/batch.rs
//! Batch runner: annotate every record, skip the broken ones, tabulate the labels.

use crate::article::{raw_log_label, Article, BiasLabel, ANNOTATION_FIELDS};
use crate::classifier::Classifier;
use crate::error::AnalysisError;
use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{info, warn};

/// One-time metrics registration.
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "articles_analyzed_total",
            "Articles annotated with sentiment and bias."
        );
        describe_counter!(
            "articles_skipped_total",
            "Records dropped because they could not be analyzed."
        );
        describe_counter!("articles_bias_total", "Annotated articles per bias label.");
    });
}

/// Per-label counts over the annotated records of one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BiasDistribution {
    pub left: usize,
    pub center: usize,
    pub right: usize,
}

impl BiasDistribution {
    pub fn record(&mut self, label: BiasLabel) {
        match label {
            BiasLabel::Left => self.left += 1,
            BiasLabel::Center => self.center += 1,
            BiasLabel::Right => self.right += 1,
        }
    }

    pub fn count(&self, label: BiasLabel) -> usize {
        match label {
            BiasLabel::Left => self.left,
            BiasLabel::Center => self.center,
            BiasLabel::Right => self.right,
        }
    }

    pub fn total(&self) -> usize {
        self.left + self.center + self.right
    }

    /// Share of `label` in percent; 0.0 for an empty batch.
    pub fn percentage(&self, label: BiasLabel) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(label) as f64 * 100.0 / total as f64
    }

    /// e.g. `Left: 4 (40.0%)`
    pub fn line(&self, label: BiasLabel) -> String {
        format!(
            "{}: {} ({:.1}%)",
            label,
            self.count(label),
            self.percentage(label)
        )
    }
}

impl fmt::Display for BiasDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = BiasLabel::ALL.iter().map(|l| self.line(*l)).collect();
        f.write_str(&lines.join("\n"))
    }
}

/// Result of one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Annotated articles, input order, skipped records removed.
    pub articles: Vec<Article>,
    pub distribution: BiasDistribution,
    /// Number of input records, skipped ones included.
    pub total: usize,
}

impl BatchOutcome {
    pub fn analyzed(&self) -> usize {
        self.articles.len()
    }

    pub fn skipped(&self) -> usize {
        self.total - self.articles.len()
    }
}

impl Classifier {
    /// Annotate loosely-typed JSON records.
    ///
    /// Existing annotation fields are discarded before decoding, whatever
    /// their shape. Records that are not objects, carry ill-typed text fields,
    /// or produce a non-finite score are logged and dropped.
    pub fn classify_batch(&self, records: Vec<Value>) -> BatchOutcome {
        let total = records.len();
        let articles = records
            .into_iter()
            .map(|mut value| {
                if let Some(obj) = value.as_object_mut() {
                    for key in ANNOTATION_FIELDS {
                        obj.remove(*key);
                    }
                }
                value
            })
            .filter_map(|value| match Article::deserialize(&value) {
                Ok(article) => Some(article),
                Err(e) => {
                    skip(&raw_log_label(&value), &AnalysisError::from(e));
                    None
                }
            })
            .collect();
        self.run(articles, total)
    }

    /// Annotate already-typed articles.
    pub fn classify_articles(&self, articles: Vec<Article>) -> BatchOutcome {
        let total = articles.len();
        self.run(articles, total)
    }

    fn run(&self, articles: Vec<Article>, total: usize) -> BatchOutcome {
        ensure_metrics_described();

        let mut distribution = BiasDistribution::default();
        let mut annotated = Vec::with_capacity(articles.len());
        for mut article in articles {
            match self.annotate(&mut article) {
                Ok(breakdown) => {
                    distribution.record(breakdown.label);
                    counter!("articles_bias_total", "bias" => breakdown.label.as_str())
                        .increment(1);
                    annotated.push(article);
                }
                Err(e) => skip(article.log_label(), &e),
            }
        }
        counter!("articles_analyzed_total").increment(annotated.len() as u64);

        let outcome = BatchOutcome {
            articles: annotated,
            distribution,
            total,
        };
        log_summary(&outcome);
        outcome
    }
}

/// Annotate `records` with the built-in tables and default weights.
pub fn classify_batch(records: Vec<Value>) -> BatchOutcome {
    Classifier::default().classify_batch(records)
}

fn skip(label: &str, error: &AnalysisError) {
    warn!(article = label, error = %error, "skipping record");
    counter!("articles_skipped_total").increment(1);
}

fn log_summary(outcome: &BatchOutcome) {
    info!(
        skipped = outcome.skipped(),
        "analyzed {} of {} articles",
        outcome.analyzed(),
        outcome.total
    );
    for label in BiasLabel::ALL {
        info!("{}", outcome.distribution.line(label));
    }
}
