pub mod align;
pub mod classify;
pub mod costs;
pub mod engine;
pub mod highlight;
pub mod similarity;
pub mod types;

pub use self::types::{AccuracyResult, AlignmentOp, ErrorKind, ErrorRecord, HighlightSpan};

use crate::config::{Config, PhoneticGroups, ScoringWeights};
use crate::error::MkResult;
use crate::token::Token;
use std::collections::HashMap;
use tracing::debug;

/// Immutable scoring engine: the weights plus prebuilt letter-to-group
/// lookup tables. Every method takes `&self`, so one instance can be
/// shared across recognition sessions.
pub struct Scorer {
    pub weights: ScoringWeights,
    pub groups: PhoneticGroups,

    // --- Data Tables (Fast Lookups) ---
    // Letter to group id, one table per tier
    pub(crate) cheap_ids: HashMap<char, usize>,
    pub(crate) moderate_ids: HashMap<char, usize>,
}

impl Scorer {
    pub fn new(config: Config) -> MkResult<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: Config) -> Self {
        let cheap_ids = build_group_table(&config.groups.cheap);
        let moderate_ids = build_group_table(&config.groups.moderate);
        debug!(
            "Scorer tables built: {} cheap letters, {} moderate letters",
            cheap_ids.len(),
            moderate_ids.len()
        );
        Scorer {
            weights: config.weights,
            groups: config.groups,
            cheap_ids,
            moderate_ids,
        }
    }

    /// Phonetic-aware similarity between two raw strings, 0..=100.
    pub fn similarity(&self, a: &str, b: &str) -> f32 {
        similarity::similarity(self, a, b)
    }

    /// Minimum-cost word alignment of two token sequences.
    pub fn align(&self, reference: &[Token], recognized: &[Token]) -> Vec<AlignmentOp> {
        align::align(self, reference, recognized)
    }

    /// Accuracy number for an interim transcript (Fast)
    pub fn score_live(&self, reference: &str, recognized: &str) -> f32 {
        engine::score_live(self, reference, recognized)
    }

    /// Full evaluation of a finalized transcript (Rich Data)
    pub fn score_final(&self, reference: &str, recognized: &str) -> AccuracyResult {
        engine::score_final(self, reference, recognized)
    }
}

impl Default for Scorer {
    /// Built-in weights and groups, skipping file loading. The defaults
    /// always pass validation.
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

fn build_group_table(groups: &[String]) -> HashMap<char, usize> {
    let mut ids = HashMap::new();
    for (id, group) in groups.iter().enumerate() {
        for c in group.chars() {
            ids.insert(c, id);
        }
    }
    ids
}
