// src/config.rs
//! Classifier configuration: blend weights, publisher table and keyword lists.
//!
//! File shape (TOML; JSON with the same keys also works):
//!
//! ```toml
//! [weights]
//! source = 0.5
//! keywords = 0.3
//! sentiment = 0.2
//! threshold = 0.2
//!
//! [sources]
//! "Daily Planet" = "Center"
//!
//! [keywords]
//! left = ["progressive"]
//! right = ["tax cuts"]
//! ```
//!
//! Every section is optional. `[sources]` entries are laid over the built-in
//! publisher table; a `left` or `right` keyword list replaces the built-in list
//! for that side.

use crate::article::BiasLabel;
use crate::classifier::{BlendWeights, Classifier};
use crate::error::ConfigError;
use crate::keywords::{KeywordLexicon, DEFAULT_LEFT_KEYWORDS, DEFAULT_RIGHT_KEYWORDS};
use crate::source_bias::SourceBiasTable;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub const ENV_BIAS_CONFIG_PATH: &str = "BIAS_CONFIG_PATH";
pub const DEFAULT_TOML_PATH: &str = "config/bias.toml";
pub const DEFAULT_JSON_PATH: &str = "config/bias.json";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BiasConfig {
    #[serde(default)]
    pub weights: BlendWeights,
    #[serde(default)]
    pub sources: HashMap<String, BiasLabel>,
    #[serde(default)]
    pub keywords: KeywordsSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct KeywordsSection {
    #[serde(default)]
    pub left: Option<Vec<String>>,
    #[serde(default)]
    pub right: Option<Vec<String>>,
}

impl BiasConfig {
    /// Build the classifier this configuration describes.
    pub fn build(self) -> Result<Classifier, ConfigError> {
        self.weights.validate()?;

        let mut sources = SourceBiasTable::default_seed();
        sources.extend(SourceBiasTable::new(self.sources));

        let left = self.keywords.left.unwrap_or_else(|| to_owned(DEFAULT_LEFT_KEYWORDS));
        let right = self
            .keywords
            .right
            .unwrap_or_else(|| to_owned(DEFAULT_RIGHT_KEYWORDS));
        let keywords = KeywordLexicon::new(left, right);

        debug!(
            sources = sources.len(),
            left_keywords = keywords.left().len(),
            right_keywords = keywords.right().len(),
            "classifier tables built"
        );
        Ok(Classifier::new(sources, keywords, self.weights))
    }
}

/// Load configuration from an explicit path. TOML or JSON, picked by extension.
pub fn load_config_from(path: &Path) -> Result<BiasConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if ext == "json" {
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Load configuration using env var + fallbacks:
/// 1) $BIAS_CONFIG_PATH (must exist)
/// 2) config/bias.toml
/// 3) config/bias.json
/// 4) built-in defaults
pub fn load_config_default() -> Result<BiasConfig, ConfigError> {
    if let Ok(p) = std::env::var(ENV_BIAS_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if !pb.exists() {
            return Err(ConfigError::MissingPath(ENV_BIAS_CONFIG_PATH.to_string()));
        }
        info!(path = %pb.display(), "loading bias config");
        return load_config_from(&pb);
    }
    for candidate in [DEFAULT_TOML_PATH, DEFAULT_JSON_PATH] {
        let pb = PathBuf::from(candidate);
        if pb.exists() {
            info!(path = %pb.display(), "loading bias config");
            return load_config_from(&pb);
        }
    }
    warn!("no bias config found, using built-in tables");
    Ok(BiasConfig::default())
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
