use super::costs;
use super::Scorer;

/// Phonetic-aware similarity between two raw strings, on a 0..=100
/// scale. Equal strings short-circuit to 100, including two empties.
pub fn similarity(scorer: &Scorer, a: &str, b: &str) -> f32 {
    if a == b {
        return 100.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let distance = weighted_distance(scorer, &a_chars, &b_chars);
    let max_len = a_chars.len().max(b_chars.len());
    let worst_case = max_len as u32 * scorer.weights.cost_expensive_sub;

    let base = if distance >= worst_case {
        0.0
    } else {
        (worst_case - distance) as f32 / worst_case as f32 * 100.0
    };

    let len_diff = a_chars.len().abs_diff(b_chars.len()) as f32;
    (base - len_diff * scorer.weights.length_penalty).clamp(0.0, 100.0)
}

/// Tier-weighted edit distance over two char sequences. Two-row
/// Levenshtein fill; substitutions cost their tier, insertions and
/// deletions a flat indel cost.
fn weighted_distance(scorer: &Scorer, a: &[char], b: &[char]) -> u32 {
    let w = &scorer.weights;
    if a.is_empty() {
        return b.len() as u32 * w.cost_indel;
    }
    if b.is_empty() {
        return a.len() as u32 * w.cost_indel;
    }

    let mut prev: Vec<u32> = (0..=b.len() as u32).map(|j| j * w.cost_indel).collect();
    let mut curr: Vec<u32> = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = (i as u32 + 1) * w.cost_indel;
        for (j, &cb) in b.iter().enumerate() {
            let sub = prev[j]
                + costs::substitution_cost(ca, cb, &scorer.cheap_ids, &scorer.moderate_ids, w).cost;
            let del = prev[j + 1] + w.cost_indel;
            let ins = curr[j] + w.cost_indel;
            curr[j + 1] = sub.min(del).min(ins);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
