// tests/config_loading.rs
use news_bias_analyzer::config::{load_config_default, load_config_from, ENV_BIAS_CONFIG_PATH};
use news_bias_analyzer::{Article, BiasLabel, BlendWeights, ConfigError};
use std::{env, fs};

#[test]
fn parse_toml_and_json_paths() {
    let dir = tempfile::tempdir().unwrap();

    let p_toml = dir.path().join("bias.toml");
    fs::write(
        &p_toml,
        r#"
[weights]
threshold = 0.6

[sources]
"Daily Planet" = "Left"
"#,
    )
    .unwrap();
    let cfg = load_config_from(&p_toml).unwrap();
    assert_eq!(cfg.weights.threshold, 0.6);
    assert_eq!(cfg.sources.get("Daily Planet"), Some(&BiasLabel::Left));

    let p_json = dir.path().join("bias.json");
    fs::write(
        &p_json,
        r#"{"weights": {"source": 1.0}, "keywords": {"right": ["Low Taxes"]}}"#,
    )
    .unwrap();
    let cfg = load_config_from(&p_json).unwrap();
    assert_eq!(cfg.weights.source, 1.0);
    assert_eq!(cfg.weights.keywords, 0.3);

    let c = cfg.build().unwrap();
    assert_eq!(c.keywords().right(), &["low taxes".to_string()]);
    let a = Article::new("Unknown Blog", "Low taxes for all", "");
    assert_eq!(c.explain(&a).keyword_score, 1);
}

#[test]
fn malformed_files_report_their_path() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("broken.toml");
    fs::write(&p, "[weights\nsource = ").unwrap();
    let err = load_config_from(&p).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
    assert!(err.to_string().contains("broken.toml"));

    let missing = dir.path().join("nope.json");
    assert!(matches!(
        load_config_from(&missing),
        Err(ConfigError::Io { .. })
    ));
}

#[serial_test::serial]
#[test]
fn default_uses_env_then_fallbacks() {
    // Isolate CWD so the repo's own config/ is not picked up
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();

    env::remove_var(ENV_BIAS_CONFIG_PATH);

    // 1) nothing on disk -> built-in defaults
    let cfg = load_config_default().unwrap();
    assert_eq!(cfg.weights, BlendWeights::default());
    assert!(cfg.sources.is_empty());

    // 2) JSON fallback in ./config/
    let cfg_dir = tmp.path().join("config");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("bias.json"), r#"{"weights": {"threshold": 0.4}}"#).unwrap();
    assert_eq!(load_config_default().unwrap().weights.threshold, 0.4);

    // 3) TOML wins over JSON
    fs::write(cfg_dir.join("bias.toml"), "[weights]\nthreshold = 0.3\n").unwrap();
    assert_eq!(load_config_default().unwrap().weights.threshold, 0.3);

    // 4) env var wins over both
    let p_env = tmp.path().join("custom.toml");
    fs::write(&p_env, "[weights]\nthreshold = 0.9\n").unwrap();
    env::set_var(ENV_BIAS_CONFIG_PATH, p_env.display().to_string());
    assert_eq!(load_config_default().unwrap().weights.threshold, 0.9);

    // 5) env var pointing nowhere is an error, not a silent fallback
    env::set_var(ENV_BIAS_CONFIG_PATH, tmp.path().join("gone.toml"));
    assert!(matches!(
        load_config_default(),
        Err(ConfigError::MissingPath(_))
    ));
    env::remove_var(ENV_BIAS_CONFIG_PATH);

    env::set_current_dir(&old).unwrap();
}

#[test]
fn threshold_from_config_changes_labels() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("wide.toml");
    fs::write(&p, "[weights]\nthreshold = 0.6\n").unwrap();

    let wide = load_config_from(&p).unwrap().build().unwrap();
    // prior alone (0.5) no longer crosses the bound
    assert_eq!(wide.classify_bias(&Article::new("CNN", "", "")), BiasLabel::Center);
    assert_eq!(
        wide.classify_bias(&Article::new("CNN", "Welfare vote", "")),
        BiasLabel::Left
    );
}
