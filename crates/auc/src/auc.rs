//! Integer-arithmetic ROC AUC.
//!
//! The area is integrated with the trapezoidal rule over distinct prediction
//! thresholds, but every trapezoid is measured in sample counts instead of
//! rates, so the whole scan runs on `u64` and the only floating-point step is
//! the final normalization:
//!
//! ```text
//! raw  = Σ (TP(k-1) + TP(k)) · ΔTN(k)
//! AUC  = 0.5 · raw / (N_pos · N_neg)
//! ```
//!
//! `TP(k)` is the number of positives scored above threshold `k` and
//! `ΔTN(k)` the number of negatives that fall between thresholds `k-1` and
//! `k`. Samples sharing a prediction form one threshold step, so ties produce
//! a diagonal segment of the ROC curve rather than a staircase.

use std::cmp::Ordering;

use tracing::trace;

use crate::error::AucError;
use crate::types::{Label, LabelCounts, Sample};

/// Largest dataset the integer accumulator is guaranteed to handle.
///
/// The accumulator is bounded by `2·P·N <= len²/2`, which fits in a `u64`
/// for any `len <= 2^32`.
pub const MAX_SAMPLES: u64 = 1 << 32;

// ─── Ordering ────────────────────────────────────────────────────────

fn cmp_prediction(a: &Sample, b: &Sample) -> Ordering {
    a.prediction.total_cmp(&b.prediction)
}

/// Sort samples by prediction, ascending.
///
/// Uses the IEEE total order, so the sort is well defined even for NaN
/// predictions. Order among equal predictions is unspecified.
pub fn sort_by_prediction(samples: &mut [Sample]) {
    samples.sort_unstable_by(cmp_prediction);
}

// ─── Integration ─────────────────────────────────────────────────────

/// Twice the un-normalized area under the ROC curve.
///
/// `sorted` must be ordered by [`sort_by_prediction`], be non-empty and
/// contain exactly `positives` positive samples.
fn integrate(sorted: &[Sample], positives: u64) -> u64 {
    let mut tp = positives; // positives above the current threshold
    let mut tp_at_boundary = positives;
    let mut tn_delta: u64 = 0; // negatives since the last threshold
    let mut accum: u64 = 0;
    let mut threshold = sorted[0].prediction;

    for sample in sorted {
        // `!=` rather than total_cmp keeps -0.0 and +0.0 in one group.
        if sample.prediction != threshold {
            threshold = sample.prediction;
            accum += (tp_at_boundary + tp) * tn_delta;
            tp_at_boundary = tp;
            tn_delta = 0;
        }
        match sample.ground_truth {
            Label::Negative => tn_delta += 1,
            Label::Positive => tp -= 1,
        }
    }

    assert_eq!(tp, 0, "positives left unconsumed after the threshold scan");

    // Last open group.
    accum + tp_at_boundary * tn_delta
}

// ─── Public API ──────────────────────────────────────────────────────

/// Compute the ROC AUC of `samples`, sorting them in place.
///
/// On success the result lies in `[0, 1]`. On return from a successful call
/// `samples` is ordered by prediction ascending; callers that need the
/// original order should use [`auc`] instead. When the labels are not mixed
/// the slice is left untouched.
///
/// # Errors
///
/// - [`AucError::AllNegatives`] if every label is 0.
/// - [`AucError::AllPositives`] if every label is 1.
///
/// # Panics
///
/// Panics if `samples.len() < 2` or `samples.len() > MAX_SAMPLES`. Both are
/// caller contract violations.
pub fn compute_auc(samples: &mut [Sample]) -> Result<f64, AucError> {
    assert!(
        samples.len() >= 2,
        "need at least two samples to calculate AUC, got {}",
        samples.len()
    );
    assert!(
        samples.len() as u64 <= MAX_SAMPLES,
        "{} samples exceed the supported maximum of {}",
        samples.len(),
        MAX_SAMPLES
    );

    let counts = LabelCounts::tally(samples);
    counts.check_mixed()?;

    sort_by_prediction(samples);
    let accum = integrate(samples, counts.positives);

    trace!(
        positives = counts.positives,
        negatives = counts.negatives,
        accum,
        "integrated ROC area"
    );

    Ok(0.5 * accum as f64 / counts.positives as f64 / counts.negatives as f64)
}

/// Compute the ROC AUC of `samples` without reordering them.
///
/// Sorts a private copy and delegates to [`compute_auc`], with the same
/// errors and panics.
pub fn auc(samples: &[Sample]) -> Result<f64, AucError> {
    let mut scratch = samples.to_vec();
    compute_auc(&mut scratch)
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(pairs: &[(u32, f32)]) -> Vec<Sample> {
        pairs
            .iter()
            .map(|&(gt, pred)| Sample::new(Label::try_from(gt).unwrap(), pred))
            .collect()
    }

    #[test]
    fn one_negative_below_and_one_above_the_positive() {
        let mut data = samples(&[(0, 0.1), (0, 3.0), (1, 0.8)]);
        assert_eq!(compute_auc(&mut data).unwrap(), 0.5);
    }

    #[test]
    fn tied_pair_counts_as_half() {
        // pos 0.9 beats both negatives, pos 0.4 ties one and beats one
        let mut data = samples(&[(1, 0.9), (1, 0.4), (0, 0.4), (0, 0.2)]);
        assert_eq!(compute_auc(&mut data).unwrap(), 0.875);
    }

    #[test]
    fn perfect_separation_is_one() {
        let mut data = samples(&[(0, 0.1), (0, 0.2), (1, 0.7), (1, 0.9), (0, 0.3)]);
        assert_eq!(compute_auc(&mut data).unwrap(), 1.0);
    }

    #[test]
    fn perfect_inversion_is_zero() {
        let mut data = samples(&[(1, 0.1), (1, 0.2), (0, 0.7), (0, 0.9), (1, 0.3)]);
        assert_eq!(compute_auc(&mut data).unwrap(), 0.0);
    }

    #[test]
    fn all_predictions_tied_is_one_half() {
        let mut data = samples(&[(0, 0.5), (1, 0.5), (1, 0.5), (0, 0.5), (0, 0.5)]);
        assert_eq!(compute_auc(&mut data).unwrap(), 0.5);
    }

    #[test]
    fn signed_zeros_share_a_threshold() {
        let mut data = samples(&[(1, -0.0), (0, 0.0)]);
        assert_eq!(compute_auc(&mut data).unwrap(), 0.5);
        let mut data = samples(&[(0, -0.0), (1, 0.0)]);
        assert_eq!(compute_auc(&mut data).unwrap(), 0.5);
    }

    #[test]
    fn infinite_predictions_sort_to_the_ends() {
        let mut data = samples(&[(1, f32::INFINITY), (0, f32::NEG_INFINITY), (0, 0.0)]);
        assert_eq!(compute_auc(&mut data).unwrap(), 1.0);
    }

    #[test]
    fn all_negatives_is_reported() {
        let mut data = samples(&[(0, 0.3), (0, 0.1), (0, 0.2)]);
        let before = data.clone();
        assert!(matches!(compute_auc(&mut data), Err(AucError::AllNegatives)));
        assert_eq!(data, before);
    }

    #[test]
    fn all_positives_is_reported() {
        let mut data = samples(&[(1, 0.3), (1, 0.1)]);
        assert!(matches!(compute_auc(&mut data), Err(AucError::AllPositives)));
    }

    #[test]
    fn compute_sorts_in_place() {
        let mut data = samples(&[(0, 3.0), (1, 0.8), (0, 0.1)]);
        compute_auc(&mut data).unwrap();
        let preds: Vec<f32> = data.iter().map(|s| s.prediction).collect();
        assert_eq!(preds, vec![0.1, 0.8, 3.0]);
    }

    #[test]
    fn auc_leaves_input_order_alone() {
        let data = samples(&[(0, 3.0), (1, 0.8), (0, 0.1)]);
        let before = data.clone();
        assert_eq!(auc(&data).unwrap(), 0.5);
        assert_eq!(data, before);
    }

    #[test]
    fn large_separable_dataset_stays_exact() {
        let mut data: Vec<Sample> = (0..200_000u32)
            .map(|i| {
                let jitter = i as f32 * 1e-9;
                if i % 2 == 0 {
                    Sample::positive(1.0 + jitter)
                } else {
                    Sample::negative(jitter)
                }
            })
            .collect();
        assert_eq!(compute_auc(&mut data).unwrap(), 1.0);
    }

    #[test]
    #[should_panic(expected = "need at least two samples")]
    fn single_sample_is_a_contract_violation() {
        let mut data = samples(&[(1, 0.5)]);
        let _ = compute_auc(&mut data);
    }

    #[test]
    fn integrate_matches_hand_computed_accumulator() {
        // sorted: 0.2(N) 0.4(P) 0.4(N) 0.9(P)
        let sorted = samples(&[(0, 0.2), (1, 0.4), (0, 0.4), (1, 0.9)]);
        assert_eq!(integrate(&sorted, 2), 7);
    }
}
