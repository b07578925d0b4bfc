use super::costs::{self, SubstitutionTier};
use super::similarity::similarity;
use super::types::{AlignmentOp, ErrorKind, ErrorRecord};
use super::Scorer;
use crate::token::Token;

/// Turns one alignment step into an error record. Inserted words have
/// no reference token and produce nothing.
///
/// Grading ignores which diagonal variant the aligner picked and
/// recomputes the real similarity, so the banded costs that steer the
/// alignment never leak into the verdict.
pub fn classify(
    scorer: &Scorer,
    op: AlignmentOp,
    reference: &[Token],
    recognized: &[Token],
) -> Option<ErrorRecord> {
    match op {
        AlignmentOp::Match { ref_idx, rec_idx } | AlignmentOp::Substitute { ref_idx, rec_idx } => {
            let r = &reference[ref_idx];
            let s = &recognized[rec_idx];
            let kind = grade(scorer, &r.normalized, &s.normalized);
            let category = match kind {
                ErrorKind::Minor | ErrorKind::Severe => {
                    confusion_category(scorer, &r.normalized, &s.normalized)
                }
                _ => None,
            };
            Some(ErrorRecord {
                word: r.text.clone(),
                kind,
                matched_word: Some(s.text.clone()),
                category,
            })
        }
        AlignmentOp::Delete { ref_idx } => Some(ErrorRecord {
            word: reference[ref_idx].text.clone(),
            kind: ErrorKind::Missing,
            matched_word: None,
            category: None,
        }),
        AlignmentOp::Insert { .. } => None,
    }
}

fn grade(scorer: &Scorer, reference: &str, recognized: &str) -> ErrorKind {
    if reference == recognized {
        return ErrorKind::Correct;
    }
    let sim = similarity(scorer, reference, recognized);
    let w = &scorer.weights;
    if sim >= w.classify_correct_threshold {
        ErrorKind::Correct
    } else if sim >= w.classify_minor_threshold {
        ErrorKind::Minor
    } else {
        ErrorKind::Severe
    }
}

/// Names the first tabulated confusion between the two normalized words,
/// scanning position by position over the shared prefix. Mismatches
/// outside the group tables are skipped, not labeled.
fn confusion_category(scorer: &Scorer, reference: &str, spoken: &str) -> Option<String> {
    for (rc, sc) in reference.chars().zip(spoken.chars()) {
        if rc == sc {
            continue;
        }
        match costs::substitution_tier(rc, sc, &scorer.cheap_ids, &scorer.moderate_ids) {
            SubstitutionTier::Cheap | SubstitutionTier::Moderate => {
                return Some(format!("substituted {} for {}", sc, rc));
            }
            _ => {}
        }
    }
    None
}
