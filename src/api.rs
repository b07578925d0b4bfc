// ===== makhraj/src/api.rs =====
use crate::config::Config;
use crate::error::MkResult;
use crate::scorer::{AccuracyResult, Scorer};
use std::path::Path;

/// Service: Live accuracy for one interim transcript delivery.
///
/// Every delivery is treated as an independent, complete string; no
/// state is kept between calls. Uses the built-in scoring profile.
pub fn live_accuracy(reference: &str, recognized: &str) -> f32 {
    Scorer::default().score_live(reference, recognized)
}

/// Service: Full evaluation of a finalized transcript against the
/// reference text, with the built-in scoring profile.
pub fn evaluate(reference: &str, recognized: &str) -> AccuracyResult {
    Scorer::default().score_final(reference, recognized)
}

/// `live_accuracy` against a caller-built scorer, for hosts that keep
/// one configured instance around.
pub fn live_accuracy_with(scorer: &Scorer, reference: &str, recognized: &str) -> f32 {
    scorer.score_live(reference, recognized)
}

/// `evaluate` against a caller-built scorer.
pub fn evaluate_with(scorer: &Scorer, reference: &str, recognized: &str) -> AccuracyResult {
    scorer.score_final(reference, recognized)
}

/// Service: Build a scorer from a JSON scoring profile on disk.
pub fn load_scorer<P: AsRef<Path>>(path: P) -> MkResult<Scorer> {
    let config = Config::load_from_file(path)?;
    Scorer::new(config)
}
