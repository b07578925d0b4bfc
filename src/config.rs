use crate::error::{MakhrajError, MkResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub weights: ScoringWeights,
    pub groups: PhoneticGroups,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === Substitution tiers (char level) ===
    pub cost_cheap_sub: u32,
    pub cost_moderate_sub: u32,
    pub cost_expensive_sub: u32,
    pub cost_indel: u32,

    // Points subtracted per char of length difference
    pub length_penalty: f32,

    // === Alignment (word level) ===
    pub align_match_threshold: f32,
    pub align_near_threshold: f32,
    pub align_near_cost: f32,
    pub align_far_cost: f32,
    pub align_gap_cost: f32,

    // === Classification ===
    pub classify_correct_threshold: f32,
    pub classify_minor_threshold: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            cost_cheap_sub: 1,
            cost_moderate_sub: 2,
            cost_expensive_sub: 3,
            cost_indel: 2,
            length_penalty: 5.0,
            align_match_threshold: 95.0,
            align_near_threshold: 80.0,
            align_near_cost: 0.5,
            align_far_cost: 1.0,
            align_gap_cost: 1.0,
            classify_correct_threshold: 95.0,
            classify_minor_threshold: 75.0,
        }
    }
}

/// Letter sets that are acoustically easy to confuse. Each string is one
/// group; membership in the same group decides the substitution tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneticGroups {
    pub cheap: Vec<String>,
    pub moderate: Vec<String>,
}

impl Default for PhoneticGroups {
    fn default() -> Self {
        Self {
            cheap: vec![
                "تطث".to_string(), // dental stops and the interdental thaa
                "دض".to_string(),
                "سص".to_string(),
                "ذزظ".to_string(),
                "حه".to_string(),
                "عء".to_string(),
                "قك".to_string(),
            ],
            moderate: vec![
                "سش".to_string(),
                "لن".to_string(),
                "بت".to_string(),
                "جخ".to_string(),
                "رز".to_string(),
            ],
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MkResult<Config> {
        info!("Loading scoring profile from {:?}", path.as_ref());
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MkResult<()> {
        let w = &self.weights;

        if w.cost_cheap_sub > w.cost_moderate_sub || w.cost_moderate_sub > w.cost_expensive_sub {
            return Err(MakhrajError::Validation(format!(
                "Substitution costs must be ordered cheap <= moderate <= expensive (got {}/{}/{})",
                w.cost_cheap_sub, w.cost_moderate_sub, w.cost_expensive_sub
            )));
        }
        if w.cost_expensive_sub == 0 {
            return Err(MakhrajError::Validation(
                "cost_expensive_sub must be at least 1".to_string(),
            ));
        }
        if w.cost_indel == 0 {
            return Err(MakhrajError::Validation(
                "cost_indel must be at least 1".to_string(),
            ));
        }
        if w.length_penalty < 0.0 {
            return Err(MakhrajError::Validation(
                "length_penalty must not be negative".to_string(),
            ));
        }

        for (name, val) in [
            ("align_match_threshold", w.align_match_threshold),
            ("align_near_threshold", w.align_near_threshold),
            ("classify_correct_threshold", w.classify_correct_threshold),
            ("classify_minor_threshold", w.classify_minor_threshold),
        ] {
            if !(0.0..=100.0).contains(&val) {
                return Err(MakhrajError::Validation(format!(
                    "{} must be within 0..=100 (got {})",
                    name, val
                )));
            }
        }
        if w.align_near_threshold > w.align_match_threshold {
            return Err(MakhrajError::Validation(
                "align_near_threshold must not exceed align_match_threshold".to_string(),
            ));
        }
        if w.classify_minor_threshold > w.classify_correct_threshold {
            return Err(MakhrajError::Validation(
                "classify_minor_threshold must not exceed classify_correct_threshold".to_string(),
            ));
        }
        if w.align_gap_cost <= 0.0 || w.align_far_cost <= 0.0 {
            return Err(MakhrajError::Validation(
                "align_gap_cost and align_far_cost must be positive".to_string(),
            ));
        }
        if w.align_near_cost < 0.0 || w.align_near_cost > w.align_far_cost {
            return Err(MakhrajError::Validation(
                "align_near_cost must lie within 0..=align_far_cost".to_string(),
            ));
        }

        validate_tier(&self.groups.cheap, "cheap")?;
        validate_tier(&self.groups.moderate, "moderate")?;
        Ok(())
    }
}

fn validate_tier(groups: &[String], tier: &str) -> MkResult<()> {
    let mut seen = std::collections::HashSet::new();
    for group in groups {
        if group.is_empty() {
            return Err(MakhrajError::Validation(format!(
                "Empty letter group in {} tier",
                tier
            )));
        }
        if group.chars().count() < 2 {
            warn!("Single-letter group '{}' in {} tier has no effect", group, tier);
        }
        for c in group.chars() {
            if !seen.insert(c) {
                return Err(MakhrajError::Validation(format!(
                    "Letter '{}' appears in more than one {} group",
                    c, tier
                )));
            }
        }
    }
    Ok(())
}
