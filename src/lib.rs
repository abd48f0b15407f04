// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod article;
pub mod batch;
pub mod classifier;
pub mod config;
pub mod error;
pub mod keywords;
pub mod lemmatize;
pub mod normalize;
pub mod sentiment;
pub mod source_bias;
pub mod store;

// ---- Re-exports for stable public API ----
pub use crate::article::{Article, BiasLabel, SentimentLabel};
pub use crate::batch::{classify_batch, BatchOutcome, BiasDistribution};
pub use crate::classifier::{classify_bias, BiasBreakdown, BlendWeights, Classifier};
pub use crate::config::{load_config_default, load_config_from, BiasConfig};
pub use crate::error::{AnalysisError, ConfigError};
pub use crate::keywords::{keyword_counts, score_keywords, KeywordCounts, KeywordLexicon};
pub use crate::normalize::{normalize, preprocess_article};
pub use crate::sentiment::{score_sentiment, SentimentAnalyzer, SentimentScore};
pub use crate::source_bias::SourceBiasTable;
