use super::{align, classify, highlight};
use super::{AccuracyResult, Scorer};
use crate::normalize::normalize;
use crate::token::tokenize;

/// Fast path: interim transcripts. Whole-string similarity over the
/// normalized texts, no tokenization and no alignment.
pub fn score_live(scorer: &Scorer, reference: &str, recognized: &str) -> f32 {
    scorer.similarity(&normalize(reference), &normalize(recognized))
}

/// Detailed path: the finalized transcript. Tokenizes both texts,
/// aligns them word by word, grades every reference token and cuts the
/// original text into highlight spans.
///
/// The headline accuracy is the whole-string similarity, the same
/// number the fast path reports, not an aggregate of the per-word
/// verdicts.
pub fn score_final(scorer: &Scorer, reference: &str, recognized: &str) -> AccuracyResult {
    let overall_accuracy = score_live(scorer, reference, recognized);

    let ref_tokens = tokenize(reference);
    let rec_tokens = tokenize(recognized);

    let ops = align::align(scorer, &ref_tokens, &rec_tokens);
    let mut errors = Vec::with_capacity(ref_tokens.len());
    for op in &ops {
        if let Some(record) = classify::classify(scorer, *op, &ref_tokens, &rec_tokens) {
            errors.push(record);
        }
    }
    debug_assert_eq!(errors.len(), ref_tokens.len());

    let highlight_spans = highlight::build_spans(reference, &ref_tokens, &errors);

    AccuracyResult {
        overall_accuracy,
        errors,
        highlight_spans,
    }
}
