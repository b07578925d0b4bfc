use crate::config::ScoringWeights;
use std::collections::HashMap;
use strum_macros::{Display, EnumIter};

/// How far apart two characters sit acoustically. Variants are declared
/// closest first, so iteration order is the cost order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SubstitutionTier {
    Identical,
    Cheap,
    Moderate,
    Expensive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionCost {
    pub cost: u32,
    pub tier: SubstitutionTier,
}

/// Classifies a character pair against the phonetic group tables.
/// Checked in order: identical, cheap, moderate. A pair sharing no
/// group falls through to expensive.
pub fn substitution_tier(
    a: char,
    b: char,
    cheap_ids: &HashMap<char, usize>,
    moderate_ids: &HashMap<char, usize>,
) -> SubstitutionTier {
    if a == b {
        return SubstitutionTier::Identical;
    }
    if same_group(a, b, cheap_ids) {
        return SubstitutionTier::Cheap;
    }
    if same_group(a, b, moderate_ids) {
        return SubstitutionTier::Moderate;
    }
    SubstitutionTier::Expensive
}

pub fn substitution_cost(
    a: char,
    b: char,
    cheap_ids: &HashMap<char, usize>,
    moderate_ids: &HashMap<char, usize>,
    weights: &ScoringWeights,
) -> SubstitutionCost {
    let tier = substitution_tier(a, b, cheap_ids, moderate_ids);
    SubstitutionCost {
        cost: tier_cost(tier, weights),
        tier,
    }
}

fn tier_cost(tier: SubstitutionTier, weights: &ScoringWeights) -> u32 {
    match tier {
        SubstitutionTier::Identical => 0,
        SubstitutionTier::Cheap => weights.cost_cheap_sub,
        SubstitutionTier::Moderate => weights.cost_moderate_sub,
        SubstitutionTier::Expensive => weights.cost_expensive_sub,
    }
}

// Two letters belong to a tier only when the table puts them in the
// same group. Membership in different groups of one tier is not a
// relation.
fn same_group(a: char, b: char, ids: &HashMap<char, usize>) -> bool {
    match (ids.get(&a), ids.get(&b)) {
        (Some(ga), Some(gb)) => ga == gb,
        _ => false,
    }
}
