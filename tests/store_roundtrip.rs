// tests/store_roundtrip.rs
//
// File-level flow as the binary runs it: load -> annotate/preprocess -> save.

use news_bias_analyzer::normalize::preprocess_batch;
use news_bias_analyzer::{store, Classifier};
use serde_json::Value;
use std::fs;

const INPUT: &str = r#"[
  {"source": "Fox News", "title": "Tax cuts pass", "description": "Border security boosted", "publishedAt": "2024-03-01"},
  {"source": "Unknown Blog", "title": "", "description": null},
  "garbage",
  {"source": "CNN", "title": "The senators are debating new taxes", "description": "<p>Read more at https://cnn.test/x</p>"}
]"#;

#[test]
fn analyze_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("articles.json");
    let output = dir.path().join("out").join("annotated.json");
    fs::write(&input, INPUT).unwrap();

    let records = store::load_records(&input).unwrap();
    let outcome = Classifier::default().classify_batch(records);
    store::save_articles(&output, &outcome.articles).unwrap();

    let written: Vec<Value> = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written.len(), 3);
    assert_eq!(written[0]["political_bias"], "Right");
    assert_eq!(written[0]["publishedAt"], "2024-03-01");
    assert!(written[1]["sentiment_score"].is_null());
    assert_eq!(written[1]["sentiment"], "Unanalyzable");
    assert_eq!(written[2]["political_bias"], "Left");
    for w in &written {
        assert!(w.get("sentiment").is_some());
        assert!(w.get("political_bias").is_some());
    }
}

#[test]
fn preprocess_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("articles.json");
    let output = dir.path().join("clean.json");
    // typed load rejects the garbage record, so drop it for this flow
    fs::write(&input, INPUT.replace("  \"garbage\",\n", "")).unwrap();

    let mut articles = store::load_articles(&input).unwrap();
    preprocess_batch(&mut articles);
    store::save_articles(&output, &articles).unwrap();

    let written: Vec<Value> = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written.len(), 3);
    assert_eq!(written[0]["title_cleaned"], "tax cut pass");
    assert_eq!(written[1]["title_cleaned"], "");
    assert_eq!(written[1]["description_cleaned"], "");
    assert_eq!(written[2]["title_cleaned"], "senator debating new tax");
    assert_eq!(written[2]["description_cleaned"], "read");
    // raw fields are untouched
    assert_eq!(written[2]["title"], "The senators are debating new taxes");
}

#[test]
fn typed_load_fails_on_bad_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("articles.json");
    fs::write(&input, INPUT).unwrap();
    assert!(store::load_articles(&input).is_err());
}

#[test]
fn preprocess_after_analyze_keeps_annotations() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("articles.json");
    let annotated = dir.path().join("annotated.json");
    let cleaned = dir.path().join("clean.json");
    fs::write(&input, INPUT).unwrap();

    let outcome = Classifier::default().classify_batch(store::load_records(&input).unwrap());
    store::save_articles(&annotated, &outcome.articles).unwrap();

    let mut articles = store::load_articles(&annotated).unwrap();
    preprocess_batch(&mut articles);
    store::save_articles(&cleaned, &articles).unwrap();

    let written: Vec<Value> = serde_json::from_str(&fs::read_to_string(&cleaned).unwrap()).unwrap();
    assert_eq!(written.len(), 3);
    let unanalyzable = written[1].as_object().unwrap();
    assert!(unanalyzable.contains_key("sentiment_score"));
    assert!(unanalyzable["sentiment_score"].is_null());
    assert_eq!(unanalyzable["sentiment"], "Unanalyzable");
    assert_eq!(written[0]["political_bias"], "Right");
    assert!(written[0]["sentiment_score"].is_number());
    assert_eq!(written[0]["title_cleaned"], "tax cut pass");
}

#[test]
fn missing_title_is_not_written_back() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("articles.json");
    let output = dir.path().join("clean.json");
    fs::write(&input, r#"[{"source": "BBC", "description": "Storm warning"}]"#).unwrap();

    let mut articles = store::load_articles(&input).unwrap();
    preprocess_batch(&mut articles);
    store::save_articles(&output, &articles).unwrap();

    let written: Vec<Value> = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let obj = written[0].as_object().unwrap();
    assert!(!obj.contains_key("title"));
    assert_eq!(obj["description"], "Storm warning");
    assert_eq!(obj["title_cleaned"], "");
}
