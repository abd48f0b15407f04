// src/store.rs
//! JSON file I/O for article batches.

use crate::article::Article;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a JSON array of records without decoding them into `Article`s.
pub fn load_records(path: &Path) -> Result<Vec<Value>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading articles from {}", path.display()))?;
    let records: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of records", path.display()))?;
    Ok(records)
}

/// Read a JSON array of articles; any ill-typed record fails the whole load.
pub fn load_articles(path: &Path) -> Result<Vec<Article>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading articles from {}", path.display()))?;
    let articles: Vec<Article> = serde_json::from_str(&raw)
        .with_context(|| format!("decoding articles in {}", path.display()))?;
    Ok(articles)
}

/// Write articles as pretty JSON with 4-space indent.
pub fn save_articles(path: &Path, articles: &[Article]) -> Result<()> {
    save_json(path, articles)
}

pub fn save_json<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    items
        .serialize(&mut ser)
        .with_context(|| format!("encoding {}", path.display()))?;
    buf.push(b'\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    fs::write(path, buf).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
