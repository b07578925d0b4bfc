use makhraj::api::{evaluate_with, load_scorer};
use makhraj::config::Config;
use makhraj::error::MakhrajError;
use makhraj::scorer::{ErrorKind, Scorer};
use std::fs;

// Surfaces the engine's own log lines in test output.
fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

// --- DEFAULTS ---

#[test]
fn test_default_config_validates() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_default_group_tables() {
    let config = Config::default();
    assert_eq!(config.groups.cheap.len(), 7);
    assert_eq!(config.groups.moderate.len(), 5);
    assert!(config.groups.cheap.iter().any(|g| g.contains('ث')));
}

// --- FILE LOADING ---

#[test]
fn test_load_roundtrip() {
    init_logging();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("profile.json");
    let json = serde_json::to_string_pretty(&Config::default()).expect("serialize");
    fs::write(&path, json).expect("write profile");

    let loaded = Config::load_from_file(&path).expect("load profile");
    assert_eq!(loaded.weights.cost_indel, 2);
    assert_eq!(loaded.weights.length_penalty, 5.0);
    assert_eq!(loaded.groups.cheap.len(), 7);
}

#[test]
fn test_partial_profile_fills_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("partial.json");
    fs::write(&path, r#"{ "weights": { "length_penalty": 9.5 } }"#).expect("write profile");

    let loaded = Config::load_from_file(&path).expect("load profile");
    assert_eq!(loaded.weights.length_penalty, 9.5);
    assert_eq!(loaded.weights.cost_cheap_sub, 1);
    assert_eq!(loaded.groups.moderate.len(), 5);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Config::load_from_file("no/such/profile.json").unwrap_err();
    assert!(matches!(err, MakhrajError::Io(_)), "got {:?}", err);
}

#[test]
fn test_malformed_json_is_parse_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").expect("write profile");

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, MakhrajError::Json(_)), "got {:?}", err);
}

#[test]
fn test_loaded_groups_change_scoring() {
    init_logging();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("strict.json");
    // The built-in cheap tier forgives thaa for taa; this profile does
    // not, so the swap falls through to the expensive cost.
    fs::write(
        &path,
        r#"{ "groups": { "cheap": ["تط", "دض", "سص", "ذزظ", "حه", "عء", "قك"] } }"#,
    )
    .expect("write profile");

    let strict = load_scorer(&path).expect("build scorer from profile");
    let default = Scorer::default();

    let lenient_sim = default.similarity("ثوب", "توب");
    let strict_sim = strict.similarity("ثوب", "توب");
    assert!(
        strict_sim < lenient_sim,
        "expected the loaded groups to bite: {} vs {}",
        strict_sim,
        lenient_sim
    );

    let lenient_result = evaluate_with(&default, "ثوب", "توب");
    let strict_result = evaluate_with(&strict, "ثوب", "توب");
    assert_eq!(lenient_result.errors[0].kind, ErrorKind::Minor);
    assert_eq!(strict_result.errors[0].kind, ErrorKind::Severe);
    assert_eq!(strict_result.errors[0].category, None);
}

#[test]
fn test_loaded_profile_is_validated() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("zero_indel.json");
    fs::write(&path, r#"{ "weights": { "cost_indel": 0 } }"#).expect("write profile");

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, MakhrajError::Validation(_)), "got {:?}", err);
}

// --- WEIGHT VALIDATION ---

fn expect_invalid(config: Config) {
    assert!(
        matches!(config.validate(), Err(MakhrajError::Validation(_))),
        "expected a validation error"
    );
}

#[test]
fn test_rejects_unordered_costs() {
    let mut config = Config::default();
    config.weights.cost_cheap_sub = 5;
    expect_invalid(config);
}

#[test]
fn test_rejects_zero_expensive_cost() {
    let mut config = Config::default();
    config.weights.cost_cheap_sub = 0;
    config.weights.cost_moderate_sub = 0;
    config.weights.cost_expensive_sub = 0;
    expect_invalid(config);
}

#[test]
fn test_rejects_zero_indel_cost() {
    let mut config = Config::default();
    config.weights.cost_indel = 0;
    expect_invalid(config);
}

#[test]
fn test_rejects_negative_length_penalty() {
    let mut config = Config::default();
    config.weights.length_penalty = -1.0;
    expect_invalid(config);
}

#[test]
fn test_rejects_out_of_range_thresholds() {
    let mut config = Config::default();
    config.weights.align_match_threshold = 150.0;
    expect_invalid(config);

    let mut config = Config::default();
    config.weights.classify_minor_threshold = -5.0;
    expect_invalid(config);
}

#[test]
fn test_rejects_inverted_thresholds() {
    let mut config = Config::default();
    config.weights.align_near_threshold = 99.0;
    expect_invalid(config);

    let mut config = Config::default();
    config.weights.classify_minor_threshold = 96.0;
    expect_invalid(config);
}

#[test]
fn test_rejects_near_cost_above_far_cost() {
    let mut config = Config::default();
    config.weights.align_near_cost = 1.5;
    expect_invalid(config);
}

// --- GROUP VALIDATION ---

#[test]
fn test_rejects_duplicate_letter_within_tier() {
    let mut config = Config::default();
    config.groups.cheap = vec!["تط".to_string(), "تد".to_string()];
    expect_invalid(config);
}

#[test]
fn test_same_letter_in_both_tiers_is_allowed() {
    // Seen sits in a cheap group and a moderate group by default.
    let mut config = Config::default();
    config.groups.cheap = vec!["سص".to_string()];
    config.groups.moderate = vec!["سش".to_string()];
    assert!(config.validate().is_ok());
}

#[test]
fn test_rejects_empty_group() {
    let mut config = Config::default();
    config.groups.moderate = vec![String::new()];
    expect_invalid(config);
}

#[test]
fn test_single_letter_group_is_tolerated() {
    init_logging();
    let mut config = Config::default();
    config.groups.cheap = vec!["ت".to_string()];
    assert!(config.validate().is_ok());
}
