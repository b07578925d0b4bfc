use super::similarity::similarity;
use super::types::AlignmentOp;
use super::Scorer;
use crate::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Diag,
    Up,
    Left,
}

/// Aligns the reference tokens against the recognized tokens with a
/// minimum-cost edit script. Diagonal cells are charged by banded
/// similarity (free at or above the match threshold, a reduced cost at
/// or above the near threshold, full cost below), gaps a flat cost. On
/// ties a diagonal step wins over a deletion, a deletion over an
/// insertion, so the script stays anchored to the reference.
///
/// Every reference index appears in exactly one `Match`, `Substitute`
/// or `Delete`; every recognized index in exactly one `Match`,
/// `Substitute` or `Insert`.
pub fn align(scorer: &Scorer, reference: &[Token], recognized: &[Token]) -> Vec<AlignmentOp> {
    let w = &scorer.weights;
    let m = reference.len();
    let n = recognized.len();

    let mut dp = vec![vec![0.0f32; n + 1]; m + 1];
    let mut back = vec![vec![Step::Diag; n + 1]; m + 1];

    for i in 1..=m {
        dp[i][0] = i as f32 * w.align_gap_cost;
        back[i][0] = Step::Up;
    }
    for j in 1..=n {
        dp[0][j] = j as f32 * w.align_gap_cost;
        back[0][j] = Step::Left;
    }

    for i in 1..=m {
        for j in 1..=n {
            let sim = similarity(
                scorer,
                &reference[i - 1].normalized,
                &recognized[j - 1].normalized,
            );
            let cell = banded_cost(scorer, sim);

            let mut best = dp[i - 1][j - 1] + cell;
            let mut step = Step::Diag;

            let delete = dp[i - 1][j] + w.align_gap_cost;
            if delete < best {
                best = delete;
                step = Step::Up;
            }
            let insert = dp[i][j - 1] + w.align_gap_cost;
            if insert < best {
                best = insert;
                step = Step::Left;
            }

            dp[i][j] = best;
            back[i][j] = step;
        }
    }

    let mut ops = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && back[i][j] == Step::Diag {
            let sim = similarity(
                scorer,
                &reference[i - 1].normalized,
                &recognized[j - 1].normalized,
            );
            let op = if sim >= w.align_match_threshold {
                AlignmentOp::Match {
                    ref_idx: i - 1,
                    rec_idx: j - 1,
                }
            } else {
                AlignmentOp::Substitute {
                    ref_idx: i - 1,
                    rec_idx: j - 1,
                }
            };
            ops.push(op);
            i -= 1;
            j -= 1;
        } else if i > 0 && (j == 0 || back[i][j] == Step::Up) {
            ops.push(AlignmentOp::Delete { ref_idx: i - 1 });
            i -= 1;
        } else {
            ops.push(AlignmentOp::Insert { rec_idx: j - 1 });
            j -= 1;
        }
    }
    ops.reverse();
    ops
}

fn banded_cost(scorer: &Scorer, sim: f32) -> f32 {
    let w = &scorer.weights;
    if sim >= w.align_match_threshold {
        0.0
    } else if sim >= w.align_near_threshold {
        w.align_near_cost
    } else {
        w.align_far_cost
    }
}
